//! # Order Builder
//!
//! Fluent, single-use accumulator that assembles an [`Order`] against a
//! borrowed catalog.
//!
//! ## Assembly Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Assembly                                       │
//! │                                                                         │
//! │  OrderBuilder::new(&catalog)                                            │
//! │       │                                                                 │
//! │       ├── .customer_id("CUST-42")                                       │
//! │       ├── .add_item("BOOK001", 2) ──► catalog lookup ──► snapshot item  │
//! │       ├── .add_item("GADGET999", 1) ─► unknown id ─────► skipped        │
//! │       ├── .payment_method(Cash)                                         │
//! │       ├── .delivery_address("221B Baker Street")                        │
//! │       └── .priority()                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  .build() ──► Order (builder consumed)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive Assembly vs. Strict Processing
//! Unknown product ids (and non-positive quantities) are dropped here with a
//! log event instead of failing the fluent chain. Assembly is convenience;
//! real validation happens once, in the processor.

use tracing::{debug, warn};

use crate::catalog::ProductCatalog;
use crate::types::{Order, OrderItem, PaymentMethod};

/// Accumulates order state, then produces an [`Order`].
///
/// ## Single-Use By Construction
/// Every method takes `self` by value and `build()` consumes the builder, so
/// two orders can never share an accumulated item list. Not `Clone`, not
/// `Sync`-shared: one builder, one order.
#[derive(Debug)]
pub struct OrderBuilder<'a> {
    catalog: &'a ProductCatalog,
    customer_id: String,
    items: Vec<OrderItem>,
    payment_method: Option<PaymentMethod>,
    delivery_address: String,
    is_priority: bool,
}

impl<'a> OrderBuilder<'a> {
    /// Starts an empty builder over the given catalog.
    pub fn new(catalog: &'a ProductCatalog) -> Self {
        OrderBuilder {
            catalog,
            customer_id: String::new(),
            items: Vec::new(),
            payment_method: None,
            delivery_address: String::new(),
            is_priority: false,
        }
    }

    /// Sets the customer identifier.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    /// Resolves `product_id` in the catalog and appends a snapshot item.
    ///
    /// Unknown ids are a silent no-op (deliberate "ignore unknown input"
    /// policy, logged at debug). Non-positive quantities are likewise
    /// skipped, so built orders only ever carry quantities > 0.
    pub fn add_item(mut self, product_id: &str, quantity: i64) -> Self {
        if quantity <= 0 {
            warn!(product_id, quantity, "Skipping item with non-positive quantity");
            return self;
        }

        match self.catalog.find_product(product_id) {
            Some(product) => {
                self.items.push(OrderItem::from_product(product, quantity));
            }
            None => {
                debug!(product_id, "Skipping unknown product id");
            }
        }
        self
    }

    /// Sets the payment method.
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Sets the delivery address.
    pub fn delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = address.into();
        self
    }

    /// Marks the order for priority handling.
    pub fn priority(mut self) -> Self {
        self.is_priority = true;
        self
    }

    /// Consumes the builder and constructs the order.
    ///
    /// Construction never fails (lazy validation): whatever was accumulated
    /// becomes the order, and the processor judges it.
    pub fn build(self) -> Order {
        debug!(
            customer_id = %self.customer_id,
            items = self.items.len(),
            "Building order"
        );
        Order::new(
            self.customer_id,
            self.items,
            self.payment_method,
            self.delivery_address,
            self.is_priority,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
