//! Order domain core for the food ordering system.
//!
//! This crate models the lifecycle and invariants of a food order:
//! - The [`Order`] aggregate root with its status state machine
//!   (Pending -> Paid -> Approved, with cancellation paths)
//! - Cross-entity price reconciliation against a [`Restaurant`] catalog
//!   snapshot
//! - [`OrderDomainService`] orchestrating creation, payment, approval, and
//!   cancellation, producing domain events for the caller to publish
//!
//! Persistence, transport, and event dispatch are external collaborators:
//! callers pass in fully loaded `Order` and `Restaurant` snapshots and
//! receive events or an [`OrderDomainError`] back.

pub mod clock;
pub mod error;
pub mod order;
pub mod product;
pub mod restaurant;

pub use clock::{Clock, SystemClock};
pub use error::OrderDomainError;
pub use order::{
    DomainEvent, Order, OrderCancelledEvent, OrderConfig, OrderCreatedEvent, OrderDomainService,
    OrderItem, OrderItemId, OrderPaidEvent, OrderStatus, StreetAddress, TrackingId,
};
pub use product::Product;
pub use restaurant::{Restaurant, RestaurantConfig};
