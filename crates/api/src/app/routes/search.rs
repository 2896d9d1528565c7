use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use crate::app::dto;
use crate::app::services::AppServices;

/// GET /search?search_query=X&min_price=Y
pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    if let Err(resp) = query.validate() {
        return resp;
    }

    let results = services.products_search(query.search_query.as_deref(), query.min_price);
    Json(serde_json::json!({ "search_results": results })).into_response()
}
