//! # order-core: Pure Order Processing Logic
//!
//! This crate is the **heart** of the order pipeline. It contains all
//! validation, pricing, and payment-rule logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        order-core Flow                                  │
//! │                                                                         │
//! │   ┌────────────┐    ┌──────────────┐    ┌───────┐    ┌──────────────┐  │
//! │   │  Product   │◄───│ OrderBuilder │───►│ Order │───►│OrderProcessor│  │
//! │   │  Catalog   │    │  (fluent,    │    │(value │    │  validate    │  │
//! │   │ (read-only)│    │  single-use) │    │object)│    │  price       │  │
//! │   └────────────┘    └──────────────┘    └───────┘    │  pay-rules   │  │
//! │                                                       └──────┬───────┘  │
//! │                                                              │          │
//! │                                                              ▼          │
//! │                                                   ┌───────────────────┐ │
//! │                                                   │ ProcessingResult  │ │
//! │                                                   │ success / failure │ │
//! │                                                   └───────────────────┘ │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, OrderItem, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Read-only product catalog, injected into the builder
//! - [`builder`] - Fluent, single-use order accumulator
//! - [`processor`] - Stateless validate → price → payment-rule pipeline
//! - [`result`] - Immutable success/failure outcome
//! - [`error`] - Typed business-rule errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: Business failures are typed results, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use order_core::{OrderBuilder, OrderProcessor, PaymentMethod, ProductCatalog};
//!
//! let catalog = ProductCatalog::with_defaults();
//!
//! let order = OrderBuilder::new(&catalog)
//!     .customer_id("CUST-42")
//!     .add_item("BOOK001", 2)
//!     .payment_method(PaymentMethod::Cash)
//!     .delivery_address("221B Baker Street")
//!     .build();
//!
//! let result = OrderProcessor::new().process_order(&order);
//! assert!(result.is_success());
//! assert_eq!(result.total_amount().cents(), 5198); // 2 × $25.99
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod error;
pub mod money;
pub mod processor;
pub mod result;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use order_core::Money` instead of
// `use order_core::money::Money`

pub use builder::OrderBuilder;
pub use catalog::ProductCatalog;
pub use error::{OrderRuleError, RuleResult};
pub use money::Money;
pub use processor::OrderProcessor;
pub use result::ProcessingResult;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Credit-card payment ceiling, in cents ($1000.00).
///
/// ## Business Reason
/// Simulated card-network rule: credit-card orders above this amount are
/// rejected before any payment attempt would be made. Debit, cash, and bank
/// transfer have no ceiling in this design.
pub const CREDIT_LIMIT_CENTS: i64 = 100_000;
