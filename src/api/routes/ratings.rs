use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::{
    api::error::{rejected, AppResult},
    context::Context,
    models::{
        rating::{RatingRequest, RatingStats},
        song::Song,
    },
    query, usecases,
};

pub fn router() -> Router {
    Router::new()
        .route("/songs/rating", post(add_rating))
        .route("/songs/rating/:song_id", get(get_rating_stats))
}

async fn add_rating(
    Extension(ctx): Extension<Arc<Context>>,
    body: Result<Json<RatingRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Song>)> {
    let Json(request) = body.map_err(|rejection| {
        rejected(
            "'song_id' and 'rating' are required and must be a string and an integer",
            rejection,
        )
    })?;

    let rating = query::parse_rating(request.rating)?;
    let song_id = query::parse_song_id(&request.song_id)?;

    let song = usecases::ratings::add(&song_id, rating, ctx.clone()).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

async fn get_rating_stats(
    Extension(ctx): Extension<Arc<Context>>,
    song_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<RatingStats>> {
    let Path(song_id) =
        song_id.map_err(|rejection| rejected("Invalid song id", rejection))?;
    let song_id = query::parse_song_id(&song_id)?;

    let stats = usecases::ratings::fetch_stats(&song_id, ctx.clone()).await?;
    Ok(Json(stats))
}
