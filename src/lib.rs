pub mod config;
pub mod dto;
pub mod error;
pub mod form;
pub mod listing;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::services::backend_client::BackendClient;
use crate::services::draft_store::{DraftStore, JsonFileDraftStore};

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub drafts: Arc<dyn DraftStore>,
}

impl AppState {
    pub fn new(backend_url: &str, drafts_path: &str) -> Self {
        Self {
            backend: BackendClient::new(backend_url),
            drafts: Arc::new(JsonFileDraftStore::new(drafts_path)),
        }
    }

    /// State with an injected draft repository.
    pub fn with_store(backend_url: &str, drafts: Arc<dyn DraftStore>) -> Self {
        Self {
            backend: BackendClient::new(backend_url),
            drafts,
        }
    }
}
