// src/api/mod.rs
pub mod games;
pub mod health;

use std::sync::Arc;

use crate::config::Config;
use crate::db::GameStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
    pub config: Config,
}
