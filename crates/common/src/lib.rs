//! Shared value objects for the food ordering domain.
//!
//! These types cross service boundaries, so they live outside any single
//! domain crate: exact-decimal [`Money`] and the typed identifiers that
//! name customers, restaurants, orders, and products.

pub mod money;
pub mod types;

pub use money::Money;
pub use types::{CustomerId, OrderId, ProductId, RestaurantId};
