//! Repositories for catalog storage

use async_trait::async_trait;
use common::error::DatabaseError;
use uuid::Uuid;

use crate::models::CatalogRecord;

pub mod catalog;

pub use catalog::PgCatalogStore;

/// Abstract keyed store holding catalog metadata.
///
/// `find_by_id` keeps "absent" and "failed" apart: `Ok(None)` means the key
/// does not exist, `Err` means the store itself misbehaved.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Return up to `limit` records starting after `skip` records in the
    /// store's natural order. A skip past the end of the collection yields an
    /// empty sequence, not an error.
    async fn find_page(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<CatalogRecord>, DatabaseError>;

    /// Exact-match lookup by record ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CatalogRecord>, DatabaseError>;
}
