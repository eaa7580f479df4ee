//! Value objects local to the order aggregate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer-facing tracking identifier, assigned at order initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(Uuid);

impl TrackingId {
    /// Creates a new random tracking identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a tracking identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TrackingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an item within its order, assigned sequentially from 1 in
/// insertion order during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

impl OrderItemId {
    /// Creates an item identifier from a 1-based sequence position.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the sequence position.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery address for an order.
///
/// Equality compares street, postal code, and city only; the id is a
/// persistence identity, not part of the value.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct StreetAddress {
    id: Uuid,
    street: String,
    postal_code: String,
    city: String,
}

impl StreetAddress {
    /// Creates an address with a fresh identity.
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    /// Returns the address identity.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the street line.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the postal code.
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Returns the city.
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl PartialEq for StreetAddress {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street
            && self.postal_code == other.postal_code
            && self.city == other.city
    }
}
