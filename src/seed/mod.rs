use anyhow::Context as _;

use crate::{
    context::Context,
    models::{
        rating::{MAX_RATING, MIN_RATING},
        song::NewSong,
    },
};

/// Parses a JSON Lines fixture, one song per line. Blank lines are skipped.
pub fn parse_songs(contents: &str) -> anyhow::Result<Vec<NewSong>> {
    let mut songs = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let song: NewSong = serde_json::from_str(line)
            .with_context(|| format!("invalid song on line {}", idx + 1))?;

        if let Some(rating) = song
            .ratings
            .iter()
            .find(|rating| !(MIN_RATING..=MAX_RATING).contains(*rating))
        {
            anyhow::bail!("rating {} out of range on line {}", rating, idx + 1);
        }

        songs.push(song);
    }

    Ok(songs)
}

/// Replaces the whole collection with the songs in `songs_path`.
pub async fn serve(ctx: Context) -> anyhow::Result<()> {
    let path = &ctx.config.songs_path;

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let songs = parse_songs(&contents)?;

    let inserted = ctx.songs.replace_all(songs).await?;

    log::info!(
        songs_path = path.display().to_string().as_str(),
        inserted = inserted;
        "Seeded songs collection",
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use clap::Parser;

    use super::*;
    use crate::{
        config::Config,
        repositories::{memory::InMemorySongsRepository, songs::SongsRepository},
    };

    #[test]
    fn parses_json_lines() {
        let contents = r#"{"artist": "The Yousicians", "title": "Lycanthropic Metamorphosis", "difficulty": 14.6, "level": 13, "released": "2016-10-26"}

{"artist": "Mr Fastfinger", "title": "Awaki-Waki", "difficulty": 15, "ratings": [4, 5]}
"#;

        let songs = parse_songs(contents).unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title, "Lycanthropic Metamorphosis");
        assert_eq!(
            songs[0].released,
            chrono::NaiveDate::from_ymd_opt(2016, 10, 26)
        );
        assert!(songs[0].ratings.is_empty());
        assert_eq!(songs[1].difficulty, 15.0);
        assert_eq!(songs[1].ratings, vec![4, 5]);
    }

    #[test]
    fn reports_malformed_line() {
        let contents = "{\"artist\": \"a\", \"title\": \"b\", \"difficulty\": 1}\n{\"artist\": \"a\"}\n";

        let err = parse_songs(contents).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let contents = r#"{"artist": "a", "title": "b", "difficulty": 1, "ratings": [7]}"#;
        assert!(parse_songs(contents).is_err());
    }

    async fn serve_fixture(contents: &str) -> (anyhow::Result<()>, Arc<InMemorySongsRepository>) {
        let path = std::env::temp_dir().join(format!("songs-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, contents).await.unwrap();

        let repo = Arc::new(InMemorySongsRepository::new());
        repo.insert_many(parse_songs(r#"{"artist": "a", "title": "Old Song", "difficulty": 1}"#).unwrap())
            .await
            .unwrap();

        let config = Config::parse_from([
            "songs-service",
            "--database-url",
            "memory://",
            "--songs-path",
            path.to_str().unwrap(),
        ]);
        let result = serve(Context {
            config,
            songs: repo.clone(),
        })
        .await;
        tokio::fs::remove_file(&path).await.unwrap();

        (result, repo)
    }

    #[tokio::test]
    async fn serve_replaces_collection_from_file() {
        let (result, repo) =
            serve_fixture(r#"{"artist": "Stadium Kings", "title": "Rock Anthem", "difficulty": 3}"#)
                .await;
        result.unwrap();

        let songs = repo.fetch_page(0, 10).await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Rock Anthem");
    }

    #[tokio::test]
    async fn serve_keeps_collection_when_fixture_is_malformed() {
        let (result, repo) = serve_fixture(r#"{"artist": "a"}"#).await;

        assert!(result.is_err());
        assert_eq!(repo.fetch_page(0, 10).await.unwrap()[0].title, "Old Song");
    }
}
