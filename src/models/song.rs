use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub difficulty: f64,
    pub released: Option<NaiveDate>,
    pub ratings: Vec<i32>,
}

/// A song as read from a fixture, before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub difficulty: f64,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

impl NewSong {
    pub fn into_song(self, id: String) -> Song {
        Song {
            id,
            title: self.title,
            artist: self.artist,
            difficulty: self.difficulty,
            released: self.released,
            ratings: self.ratings,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct SongRow {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub difficulty: f64,
    pub released: Option<NaiveDate>,
    pub ratings: sqlx::types::Json<Vec<i32>>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            artist: row.artist,
            difficulty: row.difficulty,
            released: row.released,
            ratings: row.ratings.0,
        }
    }
}
