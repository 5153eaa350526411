//! # Error Types
//!
//! Typed business-rule errors for order-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderProcessor check fails                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderRuleError (this file, typed enum)                                 │
//! │       │                                                                 │
//! │       ▼  Display string                                                 │
//! │  ProcessingResult::failure(message)                                     │
//! │                                                                         │
//! │  Rule violations are expected business outcomes. They are carried in    │
//! │  the result type and NEVER escape process_order() as a panic.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant's Display string IS the user-facing failure message,
//!    so the wording here is a contract

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Order Rule Error
// =============================================================================

/// A violated order-shape or payment business rule.
///
/// Checks run in a fixed priority order (customer → items → address →
/// payment), and only the first violation reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderRuleError {
    /// Customer identifier is empty or whitespace-only.
    #[error("Invalid customer ID")]
    InvalidCustomerId,

    /// The order carries no items at all.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// Delivery address is empty or whitespace-only.
    #[error("Delivery address is required")]
    MissingDeliveryAddress,

    /// No payment method was ever selected on the order.
    ///
    /// ## When This Occurs
    /// Only when an order is built without calling `payment_method()`.
    /// Validation is lazy: construction accepts the gap, this check
    /// reports it.
    #[error("Payment method is required")]
    MissingPaymentMethod,

    /// Credit-card order total is above the allowed ceiling.
    ///
    /// ## User Workflow
    /// ```text
    /// CreditCard order, total $1500.00
    ///      │
    ///      ▼
    /// total > credit limit ($1000.00)
    ///      │
    ///      ▼
    /// "Amount exceeds credit limit of $1000.00"
    /// ```
    #[error("Amount exceeds credit limit of {limit}")]
    CreditLimitExceeded { limit: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for rule-check results.
pub type RuleResult<T = ()> = Result<T, OrderRuleError>;

// =============================================================================
// Unit Tests
// =============================================================================
