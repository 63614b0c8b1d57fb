use std::sync::Arc;

use crate::{context::Context, errors::Error, models::difficulty::DifficultyAverage};

pub async fn fetch_average(
    level: Option<i32>,
    context: Arc<Context>,
) -> Result<DifficultyAverage, Error> {
    let avg = context
        .songs
        .average_difficulty(level)
        .await
        .map_err(Error::internal("Failed to fetch average difficulty"))?;

    Ok(DifficultyAverage { avg })
}
