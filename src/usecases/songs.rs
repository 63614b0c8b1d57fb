use std::sync::Arc;

use crate::{
    context::Context,
    errors::Error,
    models::{page::Paginated, song::Song},
    query::PageQuery,
};

pub async fn fetch_page(
    path: &str,
    query: PageQuery,
    context: Arc<Context>,
) -> Result<Paginated<Song>, Error> {
    let total_count = context
        .songs
        .count()
        .await
        .map_err(Error::internal("Failed to count songs"))?;

    let songs = context
        .songs
        .fetch_page(query.offset(), query.limit)
        .await
        .map_err(Error::internal("Failed to fetch songs"))?;

    Ok(Paginated::new(path, songs, query, total_count))
}

pub async fn search(message: &str, context: Arc<Context>) -> Result<Vec<Song>, Error> {
    context
        .songs
        .search(message)
        .await
        .map_err(Error::internal("Failed to search songs"))
}
