//! Domain rule violations.

use common::{Money, RestaurantId};
use thiserror::Error;

/// A domain rule violated by an order operation.
///
/// These errors are never recovered or retried inside the domain layer. A
/// returned error means the operation was aborted; the in-memory snapshot
/// may be partially mutated and should be discarded by the caller.
#[derive(Debug, Error)]
pub enum OrderDomainError {
    /// The restaurant is not currently accepting orders.
    #[error("Restaurant is not active. RestaurantId: {restaurant_id}")]
    RestaurantNotActive { restaurant_id: RestaurantId },

    /// The order already carries an id or a status.
    #[error("Order is not in correct state for initialization")]
    OrderAlreadyInitialized,

    /// The order total must be strictly positive.
    #[error("Total price must be greater than zero")]
    TotalPriceNotPositive,

    /// The order total disagrees with the sum of its item sub-totals.
    #[error("Total price: {order_total} is not equal to Order items total: {items_total}")]
    ItemTotalMismatch {
        order_total: Money,
        items_total: Money,
    },

    /// An item's submitted price disagrees with the confirmed product price.
    #[error("Order item price: {item_price} is not valid for product price: {product_price}")]
    ItemPriceMismatch {
        item_price: Money,
        product_price: Money,
    },

    /// The requested transition is not allowed from the order's status.
    #[error("Order is not in correct state for {action} operation")]
    InvalidStateTransition { action: &'static str },
}
