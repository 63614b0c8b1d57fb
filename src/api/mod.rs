use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::Context;

mod error;
mod routes;

fn api_router() -> Router {
    routes::songs::router()
        .merge(routes::ratings::router())
        .merge(routes::difficulty::router())
        .merge(routes::health::router())
}

pub fn app(ctx: Context) -> Router {
    api_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(Arc::new(ctx))),
    )
}

pub async fn serve(ctx: Context) -> anyhow::Result<()> {
    let server_port = ctx.config.api_port;
    let server_host = ctx.config.api_host.clone();

    let listener = tokio::net::TcpListener::bind((server_host.as_str(), server_port)).await?;

    log::info!(
        host = server_host.as_str(),
        port = server_port;
        "Serving API",
    );
    axum::serve(listener, app(ctx)).await?;

    Ok(())
}
