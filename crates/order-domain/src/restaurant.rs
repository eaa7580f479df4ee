//! Restaurant snapshot used for order validation.

use common::RestaurantId;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Configuration for constructing a [`Restaurant`] snapshot.
#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    pub id: RestaurantId,
    pub products: Vec<Product>,
    pub active: bool,
}

/// A read-only snapshot of a restaurant's availability and product catalog.
///
/// The domain core never mutates a restaurant; it is purely a data source
/// for price confirmation and the active-restaurant check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    products: Vec<Product>,
    active: bool,
}

impl Restaurant {
    /// Creates a restaurant snapshot.
    pub fn new(config: RestaurantConfig) -> Self {
        Self {
            id: config.id,
            products: config.products,
            active: config.active,
        }
    }

    /// Returns the restaurant identifier.
    pub fn id(&self) -> RestaurantId {
        self.id
    }

    /// Returns the product catalog.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns true if the restaurant is accepting orders.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
