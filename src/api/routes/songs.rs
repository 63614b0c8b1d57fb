use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    api::error::{rejected, AppResult},
    context::Context,
    models::{page::Paginated, song::Song},
    query, usecases,
};

const SONGS_PATH: &str = "/songs";

pub fn router() -> Router {
    Router::new()
        .route(SONGS_PATH, get(get_songs))
        .route("/songs/search", get(search_songs))
}

#[derive(serde::Deserialize)]
struct ListQuery {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    message: Option<String>,
}

async fn get_songs(
    Extension(ctx): Extension<Arc<Context>>,
    params: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<Paginated<Song>>> {
    let Query(params) =
        params.map_err(|rejection| rejected("Malformed query string", rejection))?;
    let page_query = query::parse_page_query(
        params.page.as_deref(),
        params.limit.as_deref(),
        ctx.config.default_page_limit,
        ctx.config.max_page_limit,
    )?;

    let songs = usecases::songs::fetch_page(SONGS_PATH, page_query, ctx.clone()).await?;
    Ok(Json(songs))
}

async fn search_songs(
    Extension(ctx): Extension<Arc<Context>>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Song>>> {
    let Query(params) =
        params.map_err(|rejection| rejected("Malformed query string", rejection))?;
    let message = query::parse_search(params.message.as_deref())?;

    let songs = usecases::songs::search(message, ctx.clone()).await?;
    Ok(Json(songs))
}
