//! Domain service orchestrating cross-entity order operations.

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::OrderDomainError;
use crate::restaurant::Restaurant;

use super::{Order, OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};

/// Orchestrates operations spanning the order aggregate and the restaurant
/// snapshot, returning domain events for the caller to publish.
///
/// Each operation is a synchronous in-memory transformation of the
/// snapshots passed in; the caller owns concurrency control and must treat
/// a returned error as "operation aborted, snapshot may be partially
/// mutated".
#[derive(Debug, Clone, Default)]
pub struct OrderDomainService<C: Clock = SystemClock> {
    clock: C,
}

impl OrderDomainService {
    /// Creates a service using the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> OrderDomainService<C> {
    /// Creates a service with an explicit time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Validates and initializes a new order against a restaurant snapshot.
    ///
    /// Fails if the restaurant is inactive. Otherwise confirms each item's
    /// product name and price from the catalog (matching by product id
    /// only), validates the order, initializes it, and returns the
    /// `OrderCreated` event.
    ///
    /// Confirmation must run before validation: the item-price check
    /// compares against the confirmed product price.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> Result<OrderCreatedEvent, OrderDomainError> {
        validate_restaurant(restaurant)?;
        set_order_product_information(order, restaurant);
        order.validate_order()?;
        order.initialize_order()?;

        if let Some(order_id) = order.id() {
            info!(%order_id, "Order created successfully");
        }
        Ok(OrderCreatedEvent::new(order.clone(), self.clock.now()))
    }

    /// Pays a pending order and returns the `OrderPaid` event.
    pub fn pay_order(&self, order: &mut Order) -> Result<OrderPaidEvent, OrderDomainError> {
        order.pay()?;

        if let Some(order_id) = order.id() {
            info!(%order_id, "Order paid successfully");
        }
        Ok(OrderPaidEvent::new(order.clone(), self.clock.now()))
    }

    /// Approves a paid order.
    ///
    /// No event is returned; a caller may emit one to continue downstream
    /// processing.
    pub fn approve_order(&self, order: &mut Order) -> Result<(), OrderDomainError> {
        order.approve()?;

        if let Some(order_id) = order.id() {
            info!(%order_id, "Order approved successfully");
        }
        Ok(())
    }

    /// Starts cancelling a paid order's payment and returns the
    /// `OrderCancelled` event.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<OrderCancelledEvent, OrderDomainError> {
        order.init_cancel(failure_messages)?;

        if let Some(order_id) = order.id() {
            info!(%order_id, "Order payment cancelled successfully");
        }
        Ok(OrderCancelledEvent::new(order.clone(), self.clock.now()))
    }

    /// Cancels an order terminally. No event is returned.
    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        order.cancel(failure_messages)?;

        if let Some(order_id) = order.id() {
            info!(%order_id, "Order cancelled successfully");
        }
        Ok(())
    }
}

fn validate_restaurant(restaurant: &Restaurant) -> Result<(), OrderDomainError> {
    if !restaurant.is_active() {
        return Err(OrderDomainError::RestaurantNotActive {
            restaurant_id: restaurant.id(),
        });
    }
    Ok(())
}

// Overwrites each matching item's product name and price with the catalog's
// authoritative values. Matching is by product id only; name and price are
// exactly what gets corrected.
fn set_order_product_information(order: &mut Order, restaurant: &Restaurant) {
    for item in order.items_mut() {
        for catalog_product in restaurant.products() {
            if item.product().id() == catalog_product.id() {
                item.product_mut().update_with_confirmed_name_and_price(
                    catalog_product.name(),
                    catalog_product.price(),
                );
            }
        }
    }
}
