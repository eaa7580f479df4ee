//! Order line item.

use common::{Money, OrderId};
use serde::{Deserialize, Serialize};

use crate::product::Product;

use super::OrderItemId;

/// A line item on an order.
///
/// The back-reference to the owning order and the 1-based sequence id are
/// assigned during order initialization and are absent until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    order_id: Option<OrderId>,
    id: Option<OrderItemId>,
    product: Product,
    quantity: u32,
    price: Money,
}

impl OrderItem {
    /// Creates an item from client-submitted data.
    pub fn new(product: Product, quantity: u32, price: Money) -> Self {
        Self {
            order_id: None,
            id: None,
            product,
            quantity,
            price,
        }
    }

    /// Returns the owning order id, once assigned.
    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    /// Returns the item's sequence id, once assigned.
    pub fn id(&self) -> Option<OrderItemId> {
        self.id
    }

    /// Returns the product this item refers to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the ordered quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the submitted unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns quantity times unit price.
    pub fn sub_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }

    /// Returns true if the unit price is positive and matches the product's
    /// confirmed price.
    pub fn is_price_valid(&self) -> bool {
        self.price.is_greater_than_zero() && self.price == self.product.price()
    }

    /// Assigns the owning order and sequence position. Invoked exactly once,
    /// from order initialization.
    pub(crate) fn initialize(&mut self, order_id: OrderId, id: OrderItemId) {
        self.order_id = Some(order_id);
        self.id = Some(id);
    }

    /// Mutable product access for the price-confirmation pass.
    pub(crate) fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}
