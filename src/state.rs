// src/state.rs
use std::sync::Arc;

use crate::services::completion::CompletionProvider;
use crate::services::relay::RelayService;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: RelayService,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            relay: RelayService::new(provider),
        }
    }
}
