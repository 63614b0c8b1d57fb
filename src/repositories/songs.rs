use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::Config,
    models::{
        rating::RatingStats,
        song::{NewSong, Song},
    },
    repositories::{memory::InMemorySongsRepository, mysql::MySqlSongsRepository},
};

/// Storage client for the `songs` collection.
///
/// Songs are returned in insertion order. `push_rating` must append in a
/// single atomic step so that concurrent submissions never overwrite each
/// other.
#[async_trait]
pub trait SongsRepository: Send + Sync {
    async fn ping(&self) -> anyhow::Result<()>;

    async fn count(&self) -> anyhow::Result<u64>;

    async fn fetch_page(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Song>>;

    /// Case-insensitive substring match on title or artist.
    async fn search(&self, message: &str) -> anyhow::Result<Vec<Song>>;

    async fn fetch_one(&self, song_id: &str) -> anyhow::Result<Option<Song>>;

    /// Appends `rating` and returns the updated song, or `None` if no song has
    /// this id.
    async fn push_rating(&self, song_id: &str, rating: i32) -> anyhow::Result<Option<Song>>;

    async fn rating_stats(&self, song_id: &str) -> anyhow::Result<Option<RatingStats>>;

    /// Average difficulty rounded to two decimals, `None` when nothing matches.
    async fn average_difficulty(&self, level: Option<i32>) -> anyhow::Result<Option<f64>>;

    async fn insert_many(&self, songs: Vec<NewSong>) -> anyhow::Result<u64>;

    /// Swaps the whole collection for `songs` in one step. On failure the
    /// previous contents are kept.
    async fn replace_all(&self, songs: Vec<NewSong>) -> anyhow::Result<u64>;
}

pub async fn connect(config: &Config) -> anyhow::Result<Arc<dyn SongsRepository>> {
    if config.database_url.starts_with("memory://") {
        return Ok(Arc::new(InMemorySongsRepository::new()));
    }

    let repo = MySqlSongsRepository::connect(&config.database_url, config.database_pool_size)?;
    repo.ensure_schema().await?;

    Ok(Arc::new(repo))
}
