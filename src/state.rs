// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion_client::CompletionClient;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completions: CompletionClient,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            completions: CompletionClient::new(config),
            metrics: MetricsManager::new(),
        }
    }
}
