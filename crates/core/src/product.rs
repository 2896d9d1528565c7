//! Product entity and validated creation payload.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Name length bounds, in characters.
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 25;

/// A catalog record. `id` is assigned by the store; `description` is
/// serialized as JSON `null` when absent (never omitted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// A product payload that has passed boundary validation but has no id yet.
///
/// Constructing one is the only way to get product data into the store, so
/// every stored record satisfies the name/price constraints at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: f64,
    description: Option<String>,
}

impl ProductDraft {
    /// Validate a raw payload: name length in [3, 25] characters, price > 0.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let len = name.chars().count();
        if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
            return Err(DomainError::validation(format!(
                "name must be {NAME_MIN_LEN} to {NAME_MAX_LEN} characters, got {len}"
            )));
        }
        if !(price > 0.0) {
            return Err(DomainError::validation("price must be greater than zero"));
        }

        Ok(Self {
            name,
            price,
            description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Attach a store-assigned id, producing the stored record.
    pub(crate) fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}
