use std::sync::Arc;

use crate::{
    context::Context,
    errors::Error,
    models::{rating::RatingStats, song::Song},
};

pub async fn add(song_id: &str, rating: i32, context: Arc<Context>) -> Result<Song, Error> {
    let song = context
        .songs
        .push_rating(song_id, rating)
        .await
        .map_err(Error::internal("Failed to add rating"))?
        .ok_or_else(|| Error::not_found("Song not found"))?;

    log::info!(song_id = song_id, rating = rating; "Rating added");

    Ok(song)
}

pub async fn fetch_stats(song_id: &str, context: Arc<Context>) -> Result<RatingStats, Error> {
    context
        .songs
        .rating_stats(song_id)
        .await
        .map_err(Error::internal("Failed to fetch rating stats"))?
        .ok_or_else(|| Error::not_found("Song not found"))
}
