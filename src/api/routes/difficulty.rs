use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    api::error::{rejected, AppResult},
    context::Context,
    models::difficulty::DifficultyAverage,
    query, usecases,
};

pub fn router() -> Router {
    Router::new().route("/songs/difficulty/avg", get(get_average_difficulty))
}

#[derive(serde::Deserialize)]
struct DifficultyQuery {
    level: Option<String>,
}

async fn get_average_difficulty(
    Extension(ctx): Extension<Arc<Context>>,
    params: Result<Query<DifficultyQuery>, QueryRejection>,
) -> AppResult<Json<DifficultyAverage>> {
    let Query(params) =
        params.map_err(|rejection| rejected("Malformed query string", rejection))?;
    let level = query::parse_level(params.level.as_deref())?;

    let average = usecases::difficulty::fetch_average(level, ctx.clone()).await?;
    Ok(Json(average))
}
