//! PostgreSQL-backed catalog store

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::PgPool;
use uuid::Uuid;

use super::CatalogStore;
use crate::models::CatalogRecord;

/// Catalog store over the `catalogs` table.
///
/// `created_at` supplies the natural order: ingestion appends rows, so
/// ascending insertion time matches the order clients saw them arrive.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    /// Create a new catalog store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_page(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<CatalogRecord>, DatabaseError> {
        let records = sqlx::query_as::<_, CatalogRecord>(
            r#"
            SELECT id, elv_object_id, object_name, display_title, version_hash,
                   image, copyright, creator, release_date, runtime, synopsis,
                   created_at
            FROM catalogs
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(records)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CatalogRecord>, DatabaseError> {
        let record = sqlx::query_as::<_, CatalogRecord>(
            r#"
            SELECT id, elv_object_id, object_name, display_title, version_hash,
                   image, copyright, creator, release_date, runtime, synopsis,
                   created_at
            FROM catalogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(record)
    }
}
