use axum::http::StatusCode;
use serde::Deserialize;

use catalog_core::ProductDraft;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Body for POST /products and PUT /products/{id}.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl ProductRequest {
    /// Run boundary validation, producing either a store-ready draft or the
    /// error response to return as-is.
    pub fn into_draft(self) -> Result<ProductDraft, axum::response::Response> {
        ProductDraft::new(self.name, self.price, self.description)
            .map_err(errors::domain_error_to_response)
    }
}

/// Query parameters for GET /search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search_query: Option<String>,
    pub min_price: Option<f64>,
}

impl SearchQuery {
    /// Boundary validation: a present `search_query` must be at least 3
    /// characters (an empty string counts as present), a present `min_price`
    /// must be strictly positive.
    pub fn validate(&self) -> Result<(), axum::response::Response> {
        if let Some(q) = &self.search_query {
            if q.chars().count() < 3 {
                return Err(errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    "search_query must be at least 3 characters",
                ));
            }
        }
        if let Some(min) = self.min_price {
            if !(min > 0.0) {
                return Err(errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    "min_price must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}
