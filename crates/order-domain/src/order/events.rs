//! Order domain events.
//!
//! Plain data carriers describing a state change, intended for a
//! downstream publisher to serialize and dispatch. Each event captures the
//! order as it looked when the event was constructed, plus a UTC timestamp
//! from the injected clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Order;

/// A fact about an order, intended for downstream publication.
pub trait DomainEvent {
    /// Event type name, used by publishers for routing.
    fn event_type(&self) -> &'static str;

    /// When the event was constructed (UTC).
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// A new order passed validation and was initialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

/// An order moved from Pending to Paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

/// An order's payment entered cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

macro_rules! order_event {
    ($name:ident, $event_type:literal) => {
        impl $name {
            /// Creates the event from an order snapshot and a timestamp.
            pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
                Self { order, created_at }
            }

            /// Returns the order as captured at event time.
            pub fn order(&self) -> &Order {
                &self.order
            }

            /// Returns the event timestamp (UTC).
            pub fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        }

        impl DomainEvent for $name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn occurred_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        }
    };
}

order_event!(OrderCreatedEvent, "OrderCreated");
order_event!(OrderPaidEvent, "OrderPaid");
order_event!(OrderCancelledEvent, "OrderCancelled");
