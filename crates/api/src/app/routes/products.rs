use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = services.products_list();
    Json(serde_json::json!({ "products": products })).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let product = services.products_create(draft);
    Json(serde_json::json!({
        "message": "Product added successfully",
        "product": product,
    }))
    .into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.products_get(id) {
        Some(product) => Json(serde_json::json!({ "product": product })).into_response(),
        None => errors::product_not_found(),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    match services.products_update(id, draft) {
        Ok(product) => Json(serde_json::json!({
            "message": "Product updated successfully",
            "product": product,
        }))
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.products_delete(id) {
        Ok(()) => Json(serde_json::json!({"message": "Product deleted successfully"})).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
