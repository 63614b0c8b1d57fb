use axum::{extract::Extension, http, routing::get, Router};
use std::sync::Arc;

use crate::context::Context;

pub fn router() -> Router {
    Router::new().route("/_health", get(health))
}

async fn health(Extension(ctx): Extension<Arc<Context>>) -> http::StatusCode {
    match ctx.songs.ping().await {
        Ok(()) => http::StatusCode::OK,
        Err(err) => {
            log::error!(error:? = err; "Failed health check.");
            http::StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
