use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    models::{
        rating::{round, RatingStats},
        song::{NewSong, Song},
    },
    repositories::songs::SongsRepository,
};

/// Process-local store used by `memory://` deployments and the test suite.
#[derive(Default)]
pub struct InMemorySongsRepository {
    songs: RwLock<Vec<Song>>,
}

impl InMemorySongsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SongsRepository for InMemorySongsRepository {
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.songs.read().await.len() as u64)
    }

    async fn fetch_page(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Song>> {
        let songs = self.songs.read().await;
        let page = songs
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(page)
    }

    async fn search(&self, message: &str) -> anyhow::Result<Vec<Song>> {
        let needle = message.to_lowercase();
        let songs = self.songs.read().await;

        Ok(songs
            .iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&needle)
                    || song.artist.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn fetch_one(&self, song_id: &str) -> anyhow::Result<Option<Song>> {
        let songs = self.songs.read().await;
        Ok(songs.iter().find(|song| song.id == song_id).cloned())
    }

    async fn push_rating(&self, song_id: &str, rating: i32) -> anyhow::Result<Option<Song>> {
        let mut songs = self.songs.write().await;
        let Some(song) = songs.iter_mut().find(|song| song.id == song_id) else {
            return Ok(None);
        };

        song.ratings.push(rating);
        Ok(Some(song.clone()))
    }

    async fn rating_stats(&self, song_id: &str) -> anyhow::Result<Option<RatingStats>> {
        let songs = self.songs.read().await;
        Ok(songs
            .iter()
            .find(|song| song.id == song_id)
            .map(|song| RatingStats::from_ratings(&song.ratings)))
    }

    async fn average_difficulty(&self, level: Option<i32>) -> anyhow::Result<Option<f64>> {
        let songs = self.songs.read().await;
        let difficulties: Vec<f64> = songs
            .iter()
            .map(|song| song.difficulty)
            .filter(|&difficulty| level.map_or(true, |level| difficulty == level as f64))
            .collect();

        if difficulties.is_empty() {
            return Ok(None);
        }

        let avg = difficulties.iter().sum::<f64>() / difficulties.len() as f64;
        Ok(Some(round(avg, 2)))
    }

    async fn insert_many(&self, new_songs: Vec<NewSong>) -> anyhow::Result<u64> {
        let mut songs = self.songs.write().await;
        let inserted = new_songs.len() as u64;

        songs.extend(
            new_songs
                .into_iter()
                .map(|song| song.into_song(uuid::Uuid::new_v4().to_string())),
        );

        Ok(inserted)
    }

    async fn replace_all(&self, new_songs: Vec<NewSong>) -> anyhow::Result<u64> {
        let mut songs = self.songs.write().await;
        let inserted = new_songs.len() as u64;

        *songs = new_songs
            .into_iter()
            .map(|song| song.into_song(uuid::Uuid::new_v4().to_string()))
            .collect();

        Ok(inserted)
    }
}
