//! Order aggregate and related types.

mod aggregate;
mod events;
mod item;
mod service;
mod state;
mod value_objects;

pub use aggregate::{Order, OrderConfig};
pub use events::{DomainEvent, OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
pub use item::OrderItem;
pub use service::OrderDomainService;
pub use state::OrderStatus;
pub use value_objects::{OrderItemId, StreetAddress, TrackingId};
