//! Streaming service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    authz::{Operation, authorize},
    error::ServiceError,
    middleware::{AuthUser, auth_middleware},
    models::{PageRequest, SourceLinkQuery, SourceLinkResponse},
    state::AppState,
};

/// Create the router for the streaming service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/catalog", get(get_catalog))
        .route("/catalog/:id", get(get_catalog_record))
        .route("/source", get(get_source_link))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "streaming-service"
    }))
}

/// Get one page of catalog metadata
pub async fn get_catalog(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PageRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    authorize(&user, Operation::ListCatalog)?;

    let records = state.catalog.list(&query).await?;
    Ok(Json(records))
}

/// Get a single catalog record by ID
pub async fn get_catalog_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    authorize(&user, Operation::GetRecord)?;

    let record = state.catalog.get_by_id(id).await?;
    Ok(Json(record))
}

/// Resolve a version hash into a playable source link
pub async fn get_source_link(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<SourceLinkQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    authorize(&user, Operation::GetSourceLink)?;

    let playout_url = state.catalog.get_source_link(&query.version_hash).await?;
    Ok(Json(SourceLinkResponse { playout_url }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fabric::{PlayoutResolver, ResolutionError};
    use crate::models::CatalogRecord;
    use crate::models::playout::PlayoutOptions;
    use crate::repositories::CatalogStore;
    use crate::service::CatalogService;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use common::error::DatabaseError;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EmptyStore;

    #[async_trait]
    impl CatalogStore for EmptyStore {
        async fn find_page(
            &self,
            _skip: i64,
            _limit: i64,
        ) -> Result<Vec<CatalogRecord>, DatabaseError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<CatalogRecord>, DatabaseError> {
            Ok(None)
        }
    }

    struct UnreachableResolver;

    #[async_trait]
    impl PlayoutResolver for UnreachableResolver {
        async fn resolve(&self, hash: &str) -> Result<PlayoutOptions, ResolutionError> {
            Err(ResolutionError::Rejected {
                hash: hash.to_string(),
                status: 404,
            })
        }
    }

    fn test_router() -> Router {
        let catalog =
            CatalogService::new(Arc::new(EmptyStore), Arc::new(UnreachableResolver));
        create_router(AppState { catalog })
    }

    #[tokio::test]
    async fn health_check_is_open() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn catalog_routes_require_a_bearer_token() {
        for uri in ["/catalog", "/catalog/4b4a4a1e-0000-0000-0000-000000000000", "/source?versionHash=hq__x"] {
            let response = test_router()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn non_bearer_authorization_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::get("/catalog")
                    .header("authorization", "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
