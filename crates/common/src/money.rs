//! Exact-decimal money arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount backed by an exact decimal.
///
/// Every arithmetic result is immediately rounded half-up to two fractional
/// digits and padded back to scale 2; amounts are never rescaled lazily.
/// The constructor stores the amount it is given as-is, so an unvalidated
/// client value keeps its submitted scale until it flows through arithmetic.
///
/// Multiplication only accepts integral factors: in this domain money is
/// multiplied by item quantities, never by fractional rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a money value from a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly positive.
    pub fn is_greater_than_zero(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is strictly greater than `other`.
    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }

    /// Adds another amount, rescaling the result.
    pub fn add(&self, other: &Money) -> Money {
        Money(scaled(self.0 + other.0))
    }

    /// Subtracts another amount, rescaling the result.
    pub fn subtract(&self, other: &Money) -> Money {
        Money(scaled(self.0 - other.0))
    }

    /// Multiplies by an item quantity, rescaling the result.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(scaled(self.0 * Decimal::from(quantity)))
    }
}

/// Half-up rounding to two fractional digits, padded to exactly scale 2.
fn scaled(amount: Decimal) -> Decimal {
    let mut scaled = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(2);
    scaled
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for Money {
    /// Always renders the two-decimal, half-up view of the amount.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", scaled(self.0))
    }
}
