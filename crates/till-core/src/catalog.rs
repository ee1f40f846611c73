//! # Product Catalog
//!
//! Read-only store mapping product identifiers to products.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types: " k01 "                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trim + case-insensitive match against product ids                     │
//! │       │                                                                 │
//! │       ├── K01 | Kopi Tubruk | 8000   ← MATCH                          │
//! │       └── T01 | Teh Manis   | 5000                                     │
//! │                                                                         │
//! │  No match → CoreError::ProductNotFound(" k01 ".trim())                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listing order is load order, so the menu shows products the way the
//! catalog file lists them.

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_price, validate_product_id, validate_product_name};

/// Products available when no catalog file is configured.
const DEMO_PRODUCTS: &[(&str, &str, i64)] = &[
    ("K01", "Kopi Tubruk", 8000),
    ("T01", "Teh Manis", 5000),
    ("N01", "Nasi Goreng", 25000),
    ("M01", "Mie Ayam", 18000),
    ("R01", "Roti Bakar", 15000),
];

/// Read-only product store.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and rejecting duplicate ids.
    ///
    /// Ids are compared case-insensitively, so `k01` and `K01` collide.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut accepted: Vec<Product> = Vec::with_capacity(products.len());

        for mut product in products {
            validate_product_id(&product.id)?;
            validate_product_name(&product.name)?;
            validate_price(product.price)?;

            product.id = product.id.trim().to_string();
            product.name = product.name.trim().to_string();

            if accepted
                .iter()
                .any(|p| p.id.eq_ignore_ascii_case(&product.id))
            {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id,
                }
                .into());
            }

            accepted.push(product);
        }

        debug!(count = accepted.len(), "Catalog loaded");
        Ok(Catalog { products: accepted })
    }

    /// Parses a JSON array of products.
    ///
    /// ## Format
    /// ```json
    /// [
    ///   { "id": "K01", "name": "Kopi Tubruk", "price": 8000 }
    /// ]
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::from_products(products)
    }

    /// Looks up a product by id (trimmed, case-insensitive).
    pub fn get(&self, id: &str) -> CoreResult<&Product> {
        let id = id.trim();
        self.products
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// All products in load order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    /// A small demo menu.
    fn default() -> Self {
        Catalog {
            products: DEMO_PRODUCTS
                .iter()
                .map(|(id, name, price)| Product::new(*id, *name, Money::from_minor(*price)))
                .collect(),
        }
    }
}
