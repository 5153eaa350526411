//! # Domain Types
//!
//! Core domain types for the order pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   OrderItem     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product_id     │   │  customer_id    │       │
//! │  │  name           │   │  name (frozen)  │   │  items          │       │
//! │  │  price_cents    │   │  unit_price     │   │  payment_method │       │
//! │  └─────────────────┘   │  quantity       │   │  address        │       │
//! │                        └─────────────────┘   │  priority       │       │
//! │  ┌─────────────────┐                         │  created_at     │       │
//! │  │ PaymentMethod   │                         └─────────────────┘       │
//! │  │  ─────────────  │                                                   │
//! │  │  CreditCard     │                                                   │
//! │  │  DebitCard      │                                                   │
//! │  │  Cash           │                                                   │
//! │  │  BankTransfer   │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An `OrderItem` freezes the product's name and price at the moment the
//! item is added, so later catalog changes never affect an existing order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier (e.g. "BOOK001").
    pub id: String,

    /// Display name shown to the customer.
    pub name: String,

    /// Unit price in cents (smallest currency unit), never negative.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the product sits in the premium price band (> $50).
    pub fn is_expensive(&self) -> bool {
        self.price_cents > 5_000
    }

    /// Returns a copy of this product with a different price.
    pub fn with_price(&self, price_cents: i64) -> Self {
        Product {
            id: self.id.clone(),
            name: self.name.clone(),
            price_cents,
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer intends to pay.
///
/// ## Closed Enumeration
/// The processor dispatches on this enum with a `match` that has NO wildcard
/// arm. Adding a variant here is a compile-time obligation to decide its
/// payment rule - there is no silent "unsupported" default to fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit card, subject to the credit limit.
    CreditCard,
    /// Debit card, no additional constraint.
    DebitCard,
    /// Physical cash payment.
    Cash,
    /// Bank transfer, no additional constraint.
    BankTransfer,
}

impl PaymentMethod {
    /// Stable lowercase wire code for this method.
    pub const fn code(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit",
            PaymentMethod::DebitCard => "debit",
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "transfer",
        }
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
/// Uses the snapshot pattern to freeze product data at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity ordered, expected > 0.
    pub quantity: i64,
}

impl OrderItem {
    /// Creates an item by snapshotting a resolved product.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// afterwards, this item keeps the original price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        OrderItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// ## User Workflow
    /// ```text
    /// Programming Book $25.99 × 2 ──► line total $51.98
    /// ```
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Checks whether the unit price sits above $100.
    pub fn is_expensive(&self) -> bool {
        self.unit_price_cents > 10_000
    }

    /// Checks whether the quantity counts as a bulk line (> 10 units).
    pub fn is_large_quantity(&self) -> bool {
        self.quantity > 10
    }

    /// Returns a copy of this item with a different quantity.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        OrderItem {
            quantity,
            ..self.clone()
        }
    }

    /// Returns a copy of this item with a different unit price.
    pub fn with_price(&self, unit_price_cents: i64) -> Self {
        OrderItem {
            unit_price_cents,
            ..self.clone()
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's requested purchase.
///
/// ## Validation Discipline: Lazy
/// Construction always succeeds; the [`crate::OrderProcessor`] is the single
/// validation authority and reports problems as structured failure results.
/// That keeps "a half-filled order exists" representable (e.g. a builder
/// where no payment method was ever chosen) without panics or constructor
/// errors.
///
/// ## Immutability
/// The item vector is moved in at construction. Rust ownership gives us the
/// defensive copy for free: no caller retains a handle that could mutate a
/// constructed order's items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Customer identifier, expected non-blank.
    pub customer_id: String,

    /// Line items, expected non-empty.
    pub items: Vec<OrderItem>,

    /// Chosen payment method; `None` means the caller never picked one.
    pub payment_method: Option<PaymentMethod>,

    /// Where to deliver, expected non-blank.
    pub delivery_address: String,

    /// Priority-handling flag.
    pub is_priority: bool,

    /// When the order was constructed.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order stamped with the current time.
    pub fn new(
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
        payment_method: Option<PaymentMethod>,
        delivery_address: impl Into<String>,
        is_priority: bool,
    ) -> Self {
        Order {
            customer_id: customer_id.into(),
            items,
            payment_method,
            delivery_address: delivery_address.into(),
            is_priority,
            created_at: Utc::now(),
        }
    }

    /// Sum of all line totals.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Checks whether any line refers to the given product.
    pub fn contains_product(&self, product_id: &str) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price_cents: i64, quantity: i64) -> OrderItem {
        OrderItem {
            product_id: format!("P-{price_cents}"),
            name: "Test Product".to_string(),
            unit_price_cents: price_cents,
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item(2599, 2).line_total().cents(), 5198);
        assert_eq!(item(199, 1).line_total().cents(), 199);
    }

    #[test]
    fn test_total_amount_sums_line_totals() {
        // $10.00 × 2 + $3.50 × 4 = $34.00
        let order = Order::new(
            "CUST-1",
            vec![item(1000, 2), item(350, 4)],
            Some(PaymentMethod::Cash),
            "1 Test Lane",
            false,
        );
        assert_eq!(order.total_amount().cents(), 3400);
    }

    #[test]
    fn test_total_item_count() {
        let order = Order::new(
            "CUST-1",
            vec![item(1000, 2), item(350, 4)],
            Some(PaymentMethod::Cash),
            "1 Test Lane",
            false,
        );
        assert_eq!(order.total_item_count(), 6);
    }

    #[test]
    fn test_contains_product() {
        let order = Order::new(
            "CUST-1",
            vec![item(1000, 1)],
            Some(PaymentMethod::Cash),
            "1 Test Lane",
            false,
        );
        assert!(order.contains_product("P-1000"));
        assert!(!order.contains_product("P-9999"));
    }

    #[test]
    fn test_item_snapshot_from_product() {
        let product = Product::new("BOOK001", "Programming Book", 2599);
        let line = OrderItem::from_product(&product, 2);

        assert_eq!(line.product_id, "BOOK001");
        assert_eq!(line.name, "Programming Book");
        assert_eq!(line.unit_price_cents, 2599);

        // Later price changes must not leak into the captured item
        let repriced = product.with_price(9999);
        assert_eq!(repriced.price_cents, 9999);
        assert_eq!(line.unit_price_cents, 2599);
    }

    #[test]
    fn test_item_classifiers_and_copies() {
        let line = item(10_001, 11);
        assert!(line.is_expensive());
        assert!(line.is_large_quantity());

        let smaller = line.with_quantity(2);
        assert_eq!(smaller.quantity, 2);
        assert!(!smaller.is_large_quantity());

        let cheaper = line.with_price(500);
        assert!(!cheaper.is_expensive());
        assert_eq!(cheaper.quantity, 11);
    }

    #[test]
    fn test_product_is_expensive() {
        assert!(Product::new("X", "Pricey", 5_001).is_expensive());
        assert!(!Product::new("Y", "Cheap", 5_000).is_expensive());
    }

    #[test]
    fn test_payment_method_codes() {
        assert_eq!(PaymentMethod::CreditCard.code(), "credit");
        assert_eq!(PaymentMethod::DebitCard.code(), "debit");
        assert_eq!(PaymentMethod::Cash.code(), "cash");
        assert_eq!(PaymentMethod::BankTransfer.code(), "transfer");
    }

    #[test]
    fn test_payment_method_serde_code() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
    }
}
