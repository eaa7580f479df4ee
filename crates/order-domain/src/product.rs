//! Product entity shared by order items and restaurant catalogs.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product, as submitted on an order item or listed in a restaurant
/// catalog.
///
/// Name and price are only mutable through
/// [`update_with_confirmed_name_and_price`](Product::update_with_confirmed_name_and_price),
/// which the domain service invokes while reconciling client-submitted item
/// data against the restaurant's catalog before validation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Returns the product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Overwrites name and price with the catalog's authoritative values.
    pub fn update_with_confirmed_name_and_price(&mut self, name: impl Into<String>, price: Money) {
        self.name = name.into();
        self.price = price;
    }
}
