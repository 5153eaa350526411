//! # Order Processor
//!
//! Stateless validate → price → payment-rule pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_order(&Order)                                │
//! │                                                                         │
//! │  1. Shape checks, in contract order (first failure wins):               │
//! │     customer id ──► items ──► delivery address                          │
//! │          │                                                              │
//! │          ▼ any violation                                                │
//! │     ProcessingResult::failure(message)                                  │
//! │                                                                         │
//! │  2. Total = Σ line totals          (cannot fail)                        │
//! │                                                                         │
//! │  3. Payment rule dispatch:                                              │
//! │     CreditCard    ──► total ≤ credit limit?                             │
//! │     DebitCard     ──► always passes                                     │
//! │     Cash          ──► always passes                                     │
//! │     BankTransfer  ──► always passes                                     │
//! │     (unset)       ──► "Payment method is required"                      │
//! │                                                                         │
//! │  4. Success: generated order id + computed total                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The check order is a contract, not an implementation detail: only the
//! first failure reaches the caller, so a missing customer id is reported
//! even when the address is also missing.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{OrderRuleError, RuleResult};
use crate::money::Money;
use crate::result::ProcessingResult;
use crate::types::{Order, PaymentMethod};
use crate::CREDIT_LIMIT_CENTS;

// =============================================================================
// Order Processor
// =============================================================================

/// Validates, prices, and payment-checks orders.
///
/// ## Concurrency
/// Holds only the credit limit. Safe to share across threads and reuse for
/// any number of calls; every call is independent and touches no shared
/// mutable state.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    credit_limit: Money,
}

impl Default for OrderProcessor {
    fn default() -> Self {
        OrderProcessor::new()
    }
}

impl OrderProcessor {
    /// Creates a processor with the standard credit limit
    /// ([`CREDIT_LIMIT_CENTS`], $1000.00).
    pub fn new() -> Self {
        OrderProcessor::with_credit_limit(Money::from_cents(CREDIT_LIMIT_CENTS))
    }

    /// Creates a processor with a custom credit limit (test substitution).
    pub fn with_credit_limit(credit_limit: Money) -> Self {
        OrderProcessor { credit_limit }
    }

    /// Processes an order and reports the outcome.
    ///
    /// Rule violations come back as failure results; this function never
    /// panics on bad input.
    ///
    /// ## Example
    /// ```rust
    /// use order_core::{Order, OrderItem, OrderProcessor, PaymentMethod, Product};
    ///
    /// let book = Product::new("BOOK001", "Programming Book", 2599);
    /// let order = Order::new(
    ///     "CUST-42",
    ///     vec![OrderItem::from_product(&book, 1)],
    ///     Some(PaymentMethod::Cash),
    ///     "221B Baker Street",
    ///     false,
    /// );
    ///
    /// let result = OrderProcessor::new().process_order(&order);
    /// assert!(result.is_success());
    /// assert_eq!(result.total_amount().cents(), 2599);
    /// ```
    pub fn process_order(&self, order: &Order) -> ProcessingResult {
        debug!(customer_id = %order.customer_id, items = order.items.len(), "Processing order");

        // Early return on the first shape violation
        if let Err(violation) = self.validate_order(order) {
            debug!(%violation, "Order rejected");
            return ProcessingResult::failure(violation.to_string());
        }

        // This step cannot fail
        let total_amount = order.total_amount();

        if let Err(violation) = self.validate_payment(order.payment_method, total_amount) {
            debug!(%violation, "Payment rejected");
            return ProcessingResult::failure(violation.to_string());
        }

        let order_id = generate_order_id();
        info!(
            order_id = %order_id,
            total = %total_amount,
            priority = order.is_priority,
            "Order processed"
        );
        ProcessingResult::success(order_id, total_amount)
    }

    /// Shape checks, most fundamental first: customer → items → address.
    fn validate_order(&self, order: &Order) -> RuleResult {
        if order.customer_id.trim().is_empty() {
            return Err(OrderRuleError::InvalidCustomerId);
        }

        if order.items.is_empty() {
            return Err(OrderRuleError::EmptyOrder);
        }

        if order.delivery_address.trim().is_empty() {
            return Err(OrderRuleError::MissingDeliveryAddress);
        }

        Ok(())
    }

    /// Payment-method rule dispatch.
    ///
    /// The match has no wildcard arm on purpose: extending [`PaymentMethod`]
    /// will not compile until the new variant's rule is decided here.
    fn validate_payment(&self, method: Option<PaymentMethod>, amount: Money) -> RuleResult {
        let Some(method) = method else {
            return Err(OrderRuleError::MissingPaymentMethod);
        };

        match method {
            PaymentMethod::CreditCard => self.validate_credit_card(amount),
            // No additional constraint on these in this design
            PaymentMethod::DebitCard => Ok(()),
            PaymentMethod::Cash => Ok(()),
            PaymentMethod::BankTransfer => Ok(()),
        }
    }

    /// Credit-card ceiling rule.
    fn validate_credit_card(&self, amount: Money) -> RuleResult {
        let exceeds_credit_limit = amount > self.credit_limit;

        if exceeds_credit_limit {
            return Err(OrderRuleError::CreditLimitExceeded {
                limit: self.credit_limit,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Order Id Generation
// =============================================================================

/// Synthesizes a practically-unique order identifier.
///
/// Time component for rough ordering/debuggability plus a UUID v4 fragment
/// for uniqueness within the same millisecond. Best-effort, not
/// cryptographic.
fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let nonce = Uuid::new_v4().simple().to_string();
    format!("ORD-{}-{}", millis, &nonce[..8])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::OrderBuilder;
    use crate::catalog::ProductCatalog;
    use crate::types::{OrderItem, Product};

    fn item(price_cents: i64, quantity: i64) -> OrderItem {
        OrderItem {
            product_id: format!("P-{price_cents}"),
            name: "Test Product".to_string(),
            unit_price_cents: price_cents,
            quantity,
        }
    }

    fn order(
        customer_id: &str,
        items: Vec<OrderItem>,
        method: Option<PaymentMethod>,
        address: &str,
    ) -> Order {
        Order::new(customer_id, items, method, address, false)
    }

    #[test]
    fn test_valid_order_succeeds() {
        let result = OrderProcessor::new().process_order(&order(
            "CUST-1",
            vec![item(1000, 2), item(350, 4)],
            Some(PaymentMethod::Cash),
            "1 Test Lane",
        ));

        assert!(result.is_success());
        assert_eq!(result.message(), "Order processed successfully");
        assert_eq!(result.total_amount().cents(), 3400);
        assert!(result.order_id().is_some());
    }

    #[test]
    fn test_blank_customer_id_fails() {
        let processor = OrderProcessor::new();
        for customer_id in ["", "   "] {
            let result = processor.process_order(&order(
                customer_id,
                vec![item(1000, 1)],
                Some(PaymentMethod::Cash),
                "1 Test Lane",
            ));
            assert!(result.is_failure());
            assert_eq!(result.message(), "Invalid customer ID");
        }
    }

    #[test]
    fn test_empty_items_fails() {
        let result = OrderProcessor::new().process_order(&order(
            "CUST-1",
            vec![],
            Some(PaymentMethod::Cash),
            "1 Test Lane",
        ));
        assert!(result.is_failure());
        assert_eq!(result.message(), "Order must contain at least one item");
    }

    #[test]
    fn test_blank_address_fails() {
        let result = OrderProcessor::new().process_order(&order(
            "CUST-1",
            vec![item(1000, 1)],
            Some(PaymentMethod::Cash),
            "  ",
        ));
        assert!(result.is_failure());
        assert_eq!(result.message(), "Delivery address is required");
    }

    #[test]
    fn test_check_order_first_failure_wins() {
        // Customer id AND address are both missing; the customer check
        // runs first, so its message is the one reported.
        let result = OrderProcessor::new().process_order(&order(
            "",
            vec![],
            None,
            "",
        ));
        assert_eq!(result.message(), "Invalid customer ID");
    }

    #[test]
    fn test_missing_payment_method_fails() {
        let result = OrderProcessor::new().process_order(&order(
            "CUST-1",
            vec![item(1000, 1)],
            None,
            "1 Test Lane",
        ));
        assert!(result.is_failure());
        assert_eq!(result.message(), "Payment method is required");
    }

    #[test]
    fn test_credit_card_within_limit_succeeds() {
        let processor = OrderProcessor::new();

        // Strictly below the limit
        let below = processor.process_order(&order(
            "CUST-1",
            vec![item(50_000, 1)],
            Some(PaymentMethod::CreditCard),
            "1 Test Lane",
        ));
        assert!(below.is_success());

        // Exactly at the limit: allowed (rule is "exceeds", not "reaches")
        let at_limit = processor.process_order(&order(
            "CUST-1",
            vec![item(crate::CREDIT_LIMIT_CENTS, 1)],
            Some(PaymentMethod::CreditCard),
            "1 Test Lane",
        ));
        assert!(at_limit.is_success());
    }

    #[test]
    fn test_credit_card_over_limit_fails() {
        // One item priced $1500.00, qty 1
        let result = OrderProcessor::new().process_order(&order(
            "CUST-1",
            vec![item(150_000, 1)],
            Some(PaymentMethod::CreditCard),
            "1 Test Lane",
        ));

        assert!(result.is_failure());
        assert_eq!(result.message(), "Amount exceeds credit limit of $1000.00");
        assert!(result.message().contains("credit limit"));
        assert!(result.message().contains("1000"));
        assert!(result.order_id().is_none());
        assert!(result.total_amount().is_zero());
    }

    #[test]
    fn test_non_credit_methods_have_no_ceiling() {
        let processor = OrderProcessor::new();
        let methods = [
            PaymentMethod::DebitCard,
            PaymentMethod::Cash,
            PaymentMethod::BankTransfer,
        ];

        for method in methods {
            // $5000.00 total, well above the credit limit
            let result = processor.process_order(&order(
                "CUST-1",
                vec![item(500_000, 1)],
                Some(method),
                "1 Test Lane",
            ));
            assert!(result.is_success(), "{} should have no ceiling", method.code());
            assert_eq!(result.total_amount().cents(), 500_000);
        }
    }

    #[test]
    fn test_custom_credit_limit() {
        let strict = OrderProcessor::with_credit_limit(Money::from_cents(500));
        let result = strict.process_order(&order(
            "CUST-1",
            vec![item(600, 1)],
            Some(PaymentMethod::CreditCard),
            "1 Test Lane",
        ));
        assert!(result.is_failure());
        assert_eq!(result.message(), "Amount exceeds credit limit of $5.00");
    }

    #[test]
    fn test_order_ids_are_unique_and_prefixed() {
        let processor = OrderProcessor::new();
        let make = || {
            processor.process_order(&order(
                "CUST-1",
                vec![item(1000, 1)],
                Some(PaymentMethod::Cash),
                "1 Test Lane",
            ))
        };

        let first = make();
        let second = make();
        let first_id = first.order_id().unwrap();
        let second_id = second.order_id().unwrap();

        assert!(first_id.starts_with("ORD-"));
        assert!(!first_id.is_empty());
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_end_to_end_builder_to_result() {
        let catalog = ProductCatalog::with_defaults();
        let order = OrderBuilder::new(&catalog)
            .customer_id("CUST-42")
            .add_item("BOOK001", 2)
            .add_item("GADGET999", 1) // unknown, silently dropped
            .add_item("PEN001", 3)
            .payment_method(PaymentMethod::BankTransfer)
            .delivery_address("221B Baker Street")
            .priority()
            .build();

        let result = OrderProcessor::new().process_order(&order);

        assert!(result.is_success());
        // 2 × $25.99 + 3 × $1.99 = $57.95
        assert_eq!(result.total_amount().cents(), 5795);
        assert_eq!(order.total_item_count(), 5);
    }

    #[test]
    fn test_processor_is_reusable_and_stateless() {
        let processor = OrderProcessor::new();

        let bad = processor.process_order(&order("", vec![], None, ""));
        assert!(bad.is_failure());

        // A failure leaves no residue; the next call is judged on its own
        let good = processor.process_order(&order(
            "CUST-2",
            vec![item(100, 1)],
            Some(PaymentMethod::Cash),
            "1 Test Lane",
        ));
        assert!(good.is_success());
    }

    #[test]
    fn test_substitute_catalog_through_pipeline() {
        let catalog = ProductCatalog::from_products(vec![Product::new(
            "WIDGET01",
            "Widget",
            150_000,
        )]);
        let order = OrderBuilder::new(&catalog)
            .customer_id("CUST-9")
            .add_item("WIDGET01", 1)
            .payment_method(PaymentMethod::CreditCard)
            .delivery_address("1 Test Lane")
            .build();

        let result = OrderProcessor::new().process_order(&order);
        assert!(result.is_failure());
        assert!(result.message().contains("credit limit"));
    }
}
