//! Order aggregate implementation.

use common::{CustomerId, Money, OrderId, RestaurantId};
use serde::{Deserialize, Serialize};

use crate::error::OrderDomainError;

use super::{OrderItem, OrderItemId, OrderStatus, StreetAddress, TrackingId};

/// Configuration for constructing an [`Order`] from client-submitted data.
///
/// Id, tracking id, and status are deliberately absent: they are assigned by
/// [`Order::initialize_order`] after validation.
#[derive(Debug, Clone)]
pub struct OrderConfig {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: StreetAddress,
    pub price: Money,
    pub items: Vec<OrderItem>,
}

/// Order aggregate root.
///
/// Owns the line items and enforces the invariants across them: a positive
/// total, an exact match between the total and the sum of item sub-totals,
/// and per-item price agreement with the confirmed product price. Every
/// status mutation is guarded by the state machine in [`OrderStatus`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: Option<OrderId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,
    tracking_id: Option<TrackingId>,
    status: Option<OrderStatus>,
    failure_messages: Option<Vec<String>>,
}

impl Order {
    /// Creates an uninitialized order from client-submitted data.
    pub fn new(config: OrderConfig) -> Self {
        Self {
            id: None,
            customer_id: config.customer_id,
            restaurant_id: config.restaurant_id,
            delivery_address: config.delivery_address,
            price: config.price,
            items: config.items,
            tracking_id: None,
            status: None,
            failure_messages: None,
        }
    }
}

// Query methods
impl Order {
    /// Returns the order id, once assigned.
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    /// Returns the customer who placed the order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the restaurant the order was placed with.
    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    /// Returns the delivery address.
    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    /// Returns the submitted order total.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the tracking id, once assigned.
    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    /// Returns the current status, or `None` before initialization.
    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    /// Returns the accumulated failure messages.
    pub fn failure_messages(&self) -> &[String] {
        self.failure_messages.as_deref().unwrap_or_default()
    }

    /// Mutable item access for the service's price-confirmation pass.
    pub(crate) fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }
}

// Validation and state transitions
impl Order {
    /// Validates the order prior to initialization.
    ///
    /// Checks, in order: the order has not been initialized yet, the total
    /// is strictly positive, and the item prices are consistent (each item
    /// matches its confirmed product price, and the sub-totals sum exactly
    /// to the order total).
    pub fn validate_order(&self) -> Result<(), OrderDomainError> {
        self.validate_initial_order()?;
        self.validate_total_price()?;
        self.validate_items_price()
    }

    /// Assigns the order id, tracking id, and Pending status, and numbers
    /// the items 1..N in insertion order.
    pub fn initialize_order(&mut self) -> Result<(), OrderDomainError> {
        if self.status.is_some() || self.id.is_some() {
            return Err(OrderDomainError::OrderAlreadyInitialized);
        }

        let order_id = OrderId::new();
        self.id = Some(order_id);
        self.tracking_id = Some(TrackingId::new());
        self.status = Some(OrderStatus::Pending);

        for (position, item) in self.items.iter_mut().enumerate() {
            item.initialize(order_id, OrderItemId::new(position as u64 + 1));
        }

        Ok(())
    }

    /// Marks the order as paid. Allowed only from Pending.
    pub fn pay(&mut self) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_pay()) {
            return Err(OrderDomainError::InvalidStateTransition { action: "pay" });
        }
        self.status = Some(OrderStatus::Paid);
        Ok(())
    }

    /// Marks the order as approved. Allowed only from Paid.
    pub fn approve(&mut self) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_approve()) {
            return Err(OrderDomainError::InvalidStateTransition { action: "approve" });
        }
        self.status = Some(OrderStatus::Approved);
        Ok(())
    }

    /// Starts cancelling a paid order, recording the failure messages.
    /// Allowed only from Paid.
    pub fn init_cancel(&mut self, failure_messages: Vec<String>) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_init_cancel()) {
            return Err(OrderDomainError::InvalidStateTransition {
                action: "initCancel",
            });
        }
        self.status = Some(OrderStatus::Cancelling);
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    /// Cancels the order, recording the failure messages. Allowed from
    /// Cancelling or Pending.
    pub fn cancel(&mut self, failure_messages: Vec<String>) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_cancel()) {
            return Err(OrderDomainError::InvalidStateTransition { action: "cancel" });
        }
        self.status = Some(OrderStatus::Cancelled);
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    // The first assignment stores the incoming list as-is; later calls
    // append only non-empty messages. Identical messages accumulate.
    fn update_failure_messages(&mut self, incoming: Vec<String>) {
        match &mut self.failure_messages {
            Some(existing) => {
                existing.extend(incoming.into_iter().filter(|message| !message.is_empty()));
            }
            None => self.failure_messages = Some(incoming),
        }
    }

    fn validate_initial_order(&self) -> Result<(), OrderDomainError> {
        if self.status.is_some() || self.id.is_some() {
            return Err(OrderDomainError::OrderAlreadyInitialized);
        }
        Ok(())
    }

    fn validate_total_price(&self) -> Result<(), OrderDomainError> {
        if !self.price.is_greater_than_zero() {
            return Err(OrderDomainError::TotalPriceNotPositive);
        }
        Ok(())
    }

    fn validate_items_price(&self) -> Result<(), OrderDomainError> {
        let mut items_total = Money::ZERO;
        for item in &self.items {
            Self::validate_item_price(item)?;
            items_total = items_total.add(&item.sub_total());
        }

        if items_total != self.price {
            return Err(OrderDomainError::ItemTotalMismatch {
                order_total: self.price,
                items_total,
            });
        }
        Ok(())
    }

    fn validate_item_price(item: &OrderItem) -> Result<(), OrderDomainError> {
        if !item.is_price_valid() {
            return Err(OrderDomainError::ItemPriceMismatch {
                item_price: item.price(),
                product_price: item.product().price(),
            });
        }
        Ok(())
    }
}
