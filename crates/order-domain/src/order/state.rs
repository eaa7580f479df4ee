//! Order status state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Transitions:
/// ```text
/// Pending ──► Paid ──► Approved
///    │          │
///    │          └────► Cancelling ──► Cancelled
///    └───────────────────────────────► Cancelled
/// ```
///
/// An order carries no status at all before initialization; the aggregate
/// models that as `Option<OrderStatus>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order validated and initialized, awaiting payment.
    Pending,

    /// Payment completed, awaiting restaurant approval.
    Paid,

    /// Restaurant approved the order (terminal state).
    Approved,

    /// Payment is being rolled back after a downstream failure.
    Cancelling,

    /// Order was cancelled (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order can be paid in this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Returns true if the order can be approved in this status.
    pub fn can_approve(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    /// Returns true if payment cancellation can start in this status.
    pub fn can_init_cancel(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    /// Returns true if the order can be cancelled outright in this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Cancelling | OrderStatus::Pending)
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Approved | OrderStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Approved => "Approved",
            OrderStatus::Cancelling => "Cancelling",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
