pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatingRequest {
    pub song_id: String,
    pub rating: i32,
}

/// Aggregate over a song's ratings. Every statistic is `None` while the song
/// has no ratings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatingStats {
    pub avg: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub count: u64,
}

impl RatingStats {
    pub fn empty() -> Self {
        Self {
            avg: None,
            min: None,
            max: None,
            count: 0,
        }
    }

    pub fn from_ratings(ratings: &[i32]) -> Self {
        let (Some(min), Some(max)) = (ratings.iter().min(), ratings.iter().max()) else {
            return Self::empty();
        };

        let sum: i64 = ratings.iter().map(|&rating| rating as i64).sum();
        let avg = sum as f64 / ratings.len() as f64;

        Self {
            avg: Some(round(avg, 2)),
            min: Some(*min),
            max: Some(*max),
            count: ratings.len() as u64,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RatingStatsRow {
    pub rating_count: i64,
    pub avg_rating: Option<f64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
}

impl TryFrom<RatingStatsRow> for RatingStats {
    type Error = anyhow::Error;

    fn try_from(row: RatingStatsRow) -> anyhow::Result<Self> {
        Ok(Self {
            avg: row.avg_rating,
            min: row.min_rating.map(i32::try_from).transpose()?,
            max: row.max_rating.map(i32::try_from).transpose()?,
            count: u64::try_from(row.rating_count)?,
        })
    }
}

pub fn round(x: f64, decimals: u32) -> f64 {
    let y = 10i32.pow(decimals) as f64;
    (x * y).round() / y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_no_ratings_are_empty() {
        assert_eq!(RatingStats::from_ratings(&[]), RatingStats::empty());
    }

    #[test]
    fn stats_are_rounded_to_two_decimals() {
        let stats = RatingStats::from_ratings(&[1, 2, 2]);

        assert_eq!(stats.avg, Some(1.67));
        assert_eq!(stats.min, Some(1));
        assert_eq!(stats.max, Some(2));
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn rating_request_rejects_unknown_fields() {
        let body = r#"{"song_id": "abc", "rating": 3, "comment": "nice"}"#;
        assert!(serde_json::from_str::<RatingRequest>(body).is_err());
    }

    #[test]
    fn rating_request_rejects_fractional_rating() {
        let body = r#"{"song_id": "abc", "rating": 3.5}"#;
        assert!(serde_json::from_str::<RatingRequest>(body).is_err());
    }
}
