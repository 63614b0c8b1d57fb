use std::sync::Arc;

use crate::{config::Config, repositories::songs::SongsRepository};

#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub songs: Arc<dyn SongsRepository>,
}
