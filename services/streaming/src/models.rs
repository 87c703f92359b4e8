//! Models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub mod playout;

/// A single catalog entry describing one piece of content on the fabric.
///
/// The four required fields are always present and non-empty; `version_hash`
/// identifies the exact playable version of the asset on the content fabric.
/// `created_at` is set by the ingestion process and supplies the catalog's
/// natural order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogRecord {
    pub id: Uuid,
    pub elv_object_id: String,
    pub object_name: String,
    pub display_title: String,
    pub version_hash: String,
    pub image: Option<Vec<u8>>,
    pub copyright: Option<String>,
    pub creator: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<String>,
    pub synopsis: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for catalog listing
///
/// Values arrive as query-string text; anything that is not an integer is
/// treated as absent rather than rejected, so `normalize` can apply the
/// defaults uniformly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based)
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    /// Number of records per page
    #[serde(default, rename = "pageSize", deserialize_with = "lenient_i64")]
    pub page_size: Option<i64>,
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse::<i64>().ok()))
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_PAGE_SIZE: i64 = 10;

    /// Resolve page and page size, falling back to the defaults for any
    /// missing or non-positive value so the computed skip is never negative.
    pub fn normalize(&self) -> (i64, i64) {
        let page = self
            .page
            .filter(|p| *p >= 1)
            .unwrap_or(Self::DEFAULT_PAGE);
        let page_size = self
            .page_size
            .filter(|s| *s >= 1)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE);
        (page, page_size)
    }
}

/// Query parameters for source link resolution
#[derive(Debug, Clone, Deserialize)]
pub struct SourceLinkQuery {
    #[serde(rename = "versionHash")]
    pub version_hash: String,
}

/// Response for source link resolution
#[derive(Debug, Clone, Serialize)]
pub struct SourceLinkResponse {
    #[serde(rename = "playoutUrl")]
    pub playout_url: String,
}
