use std::ops::DerefMut;

use async_trait::async_trait;
use sqlx::{mysql::MySqlConnectOptions, types::Json, Connection, MySqlConnection};

use crate::{
    models::{
        pool::{DbPool, Pool},
        rating::{RatingStats, RatingStatsRow},
        song::{NewSong, Song, SongRow},
    },
    repositories::songs::SongsRepository,
};

const CREATE_SONGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS songs (
    seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    id CHAR(36) NOT NULL UNIQUE,
    title VARCHAR(255) NOT NULL,
    artist VARCHAR(255) NOT NULL,
    difficulty DOUBLE NOT NULL,
    released DATE NULL,
    ratings JSON NOT NULL
)"#;

const SONG_COLUMNS: &str = "id, title, artist, difficulty, released, ratings";

/// Escapes LIKE wildcards so the search term matches literally.
fn like_pattern(message: &str) -> String {
    let escaped = message
        .to_lowercase()
        .replace('!', "!!")
        .replace('%', "!%")
        .replace('_', "!_");
    format!("%{}%", escaped)
}

async fn insert_songs(
    connection: &mut MySqlConnection,
    songs: Vec<NewSong>,
) -> anyhow::Result<u64> {
    let mut inserted = 0;
    for song in songs {
        sqlx::query(
            "INSERT INTO songs (id, title, artist, difficulty, released, ratings)
            VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&song.title)
        .bind(&song.artist)
        .bind(song.difficulty)
        .bind(song.released)
        .bind(Json(&song.ratings))
        .execute(&mut *connection)
        .await?;

        inserted += 1;
    }

    Ok(inserted)
}

pub struct MySqlSongsRepository {
    database: Pool,
}

impl MySqlSongsRepository {
    pub fn new(database: Pool) -> Self {
        Self { database }
    }

    pub fn connect(database_url: &str, pool_size: usize) -> anyhow::Result<Self> {
        let options: MySqlConnectOptions = database_url.parse()?;
        Ok(Self::new(DbPool::new(options, pool_size)?))
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_SONGS_TABLE)
            .execute(self.database.get().await?.deref_mut())
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SongsRepository for MySqlSongsRepository {
    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(self.database.get().await?.deref_mut())
            .await?;

        Ok(())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
            .fetch_one(self.database.get().await?.deref_mut())
            .await?;

        Ok(u64::try_from(count)?)
    }

    async fn fetch_page(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Song>> {
        let songs: Vec<SongRow> = sqlx::query_as(&format!(
            "SELECT {} FROM songs ORDER BY seq LIMIT ? OFFSET ?",
            SONG_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.database.get().await?.deref_mut())
        .await?;

        Ok(songs.into_iter().map(Song::from).collect())
    }

    async fn search(&self, message: &str) -> anyhow::Result<Vec<Song>> {
        let pattern = like_pattern(message);
        let songs: Vec<SongRow> = sqlx::query_as(&format!(
            "SELECT {} FROM songs
            WHERE LOWER(title) LIKE ? ESCAPE '!' OR LOWER(artist) LIKE ? ESCAPE '!'
            ORDER BY seq",
            SONG_COLUMNS
        ))
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.database.get().await?.deref_mut())
        .await?;

        Ok(songs.into_iter().map(Song::from).collect())
    }

    async fn fetch_one(&self, song_id: &str) -> anyhow::Result<Option<Song>> {
        let song: Option<SongRow> =
            sqlx::query_as(&format!("SELECT {} FROM songs WHERE id = ?", SONG_COLUMNS))
                .bind(song_id)
                .fetch_optional(self.database.get().await?.deref_mut())
                .await?;

        Ok(song.map(Song::from))
    }

    async fn push_rating(&self, song_id: &str, rating: i32) -> anyhow::Result<Option<Song>> {
        let result =
            sqlx::query("UPDATE songs SET ratings = JSON_ARRAY_APPEND(ratings, '$', ?) WHERE id = ?")
                .bind(rating)
                .bind(song_id)
                .execute(self.database.get().await?.deref_mut())
                .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.fetch_one(song_id).await
    }

    async fn rating_stats(&self, song_id: &str) -> anyhow::Result<Option<RatingStats>> {
        let row: Option<RatingStatsRow> = sqlx::query_as(
            "SELECT
                COUNT(r.rating) rating_count,
                CAST(ROUND(AVG(r.rating), 2) AS DOUBLE) avg_rating,
                CAST(MIN(r.rating) AS SIGNED) min_rating,
                CAST(MAX(r.rating) AS SIGNED) max_rating
            FROM
                songs s
            LEFT JOIN
                JSON_TABLE(s.ratings, '$[*]' COLUMNS (rating INT PATH '$')) r
                ON TRUE
            WHERE
                s.id = ?
            GROUP BY
                s.seq",
        )
        .bind(song_id)
        .fetch_optional(self.database.get().await?.deref_mut())
        .await?;

        row.map(RatingStats::try_from).transpose()
    }

    async fn average_difficulty(&self, level: Option<i32>) -> anyhow::Result<Option<f64>> {
        let avg: Option<f64> = sqlx::query_scalar(
            "SELECT CAST(ROUND(AVG(difficulty), 2) AS DOUBLE) FROM songs
            WHERE ? IS NULL OR difficulty = ?",
        )
        .bind(level)
        .bind(level)
        .fetch_one(self.database.get().await?.deref_mut())
        .await?;

        Ok(avg)
    }

    async fn insert_many(&self, songs: Vec<NewSong>) -> anyhow::Result<u64> {
        let mut connection = self.database.get().await?;
        let mut tx = connection.deref_mut().begin().await?;

        let inserted = insert_songs(&mut tx, songs).await?;
        tx.commit().await?;

        Ok(inserted)
    }

    async fn replace_all(&self, songs: Vec<NewSong>) -> anyhow::Result<u64> {
        let mut connection = self.database.get().await?;
        let mut tx = connection.deref_mut().begin().await?;

        sqlx::query("DELETE FROM songs").execute(&mut *tx).await?;
        let inserted = insert_songs(&mut tx, songs).await?;
        tx.commit().await?;

        Ok(inserted)
    }
}
