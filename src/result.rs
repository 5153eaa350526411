//! # Processing Result
//!
//! Immutable success/failure outcome of a processing run.
//!
//! ## Invariants
//! ```text
//! success == true   ⇔  order_id present, message == "Order processed successfully"
//! success == false  ⇔  order_id absent,  total == $0.00
//! ```
//! Both invariants hold by construction: the two factory methods are the
//! only way to obtain a value, the fields are private, and `Deserialize` is
//! intentionally not derived (results flow outward only).

use serde::Serialize;

use crate::money::Money;

/// Fixed message carried by every successful result.
pub const SUCCESS_MESSAGE: &str = "Order processed successfully";

/// The outcome of [`crate::OrderProcessor::process_order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    success: bool,
    message: String,
    order_id: Option<String>,
    total_amount_cents: i64,
}

impl ProcessingResult {
    /// Creates a successful result carrying the generated order id and the
    /// computed total.
    pub fn success(order_id: impl Into<String>, total_amount: Money) -> Self {
        ProcessingResult {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            order_id: Some(order_id.into()),
            total_amount_cents: total_amount.cents(),
        }
    }

    /// Creates a failed result carrying the reason. No order id, zero total.
    pub fn failure(message: impl Into<String>) -> Self {
        ProcessingResult {
            success: false,
            message: message.into(),
            order_id: None,
            total_amount_cents: 0,
        }
    }

    /// Whether processing succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Whether processing failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Human-readable outcome message, always present.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Generated order identifier; present iff successful.
    #[inline]
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Computed order total; zero on failure.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
