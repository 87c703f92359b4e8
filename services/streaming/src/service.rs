//! Catalog service orchestrating the store and the fabric resolver

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ServiceError, ServiceResult},
    fabric::PlayoutResolver,
    models::{CatalogRecord, PageRequest},
    repositories::CatalogStore,
};

/// Catalog browsing and playback resolution.
///
/// Holds its two collaborators behind trait objects; both are injected at
/// construction. Every operation is a single read, there are no retries and
/// no state carried between requests.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    resolver: Arc<dyn PlayoutResolver>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(store: Arc<dyn CatalogStore>, resolver: Arc<dyn PlayoutResolver>) -> Self {
        Self { store, resolver }
    }

    /// List one page of catalog records in the store's natural order.
    ///
    /// Out-of-range pages come back as an empty list, never an error.
    pub async fn list(&self, request: &PageRequest) -> ServiceResult<Vec<CatalogRecord>> {
        let (page, page_size) = request.normalize();

        // An offset that overflows i64 is past the end of any collection.
        let skip = match page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) {
            Some(skip) => skip,
            None => return Ok(Vec::new()),
        };

        let records = self.store.find_page(skip, page_size).await?;
        Ok(records)
    }

    /// Fetch a single catalog record by ID.
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<CatalogRecord> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        Ok(record)
    }

    /// Resolve a content version hash into its clear HLS playout URL.
    ///
    /// A blank hash is rejected before the resolver is contacted. A resolver
    /// failure and a resolved-but-unplayable version surface as different
    /// error kinds.
    pub async fn get_source_link(&self, version_hash: &str) -> ServiceResult<String> {
        if version_hash.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "versionHash must be a non-empty string".to_string(),
            ));
        }

        let options = self.resolver.resolve(version_hash).await?;

        let url = options
            .clear_playout_url("hls")
            .ok_or_else(|| ServiceError::PlayoutNotAvailable(version_hash.to_string()))?;

        info!("Resolved source link for version hash {}", version_hash);
        Ok(url.to_string())
    }
}
