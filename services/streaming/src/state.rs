//! Application state shared across handlers

use crate::service::CatalogService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}
