//! # Product Catalog
//!
//! Read-only lookup from product id to product descriptor.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductCatalog is NOT ambient global state.                            │
//! │                                                                         │
//! │  Whoever wires the system constructs one catalog and lends it to each   │
//! │  OrderBuilder:                                                          │
//! │                                                                         │
//! │     let catalog = ProductCatalog::with_defaults();                      │
//! │     let order = OrderBuilder::new(&catalog)...build();                  │
//! │                                                                         │
//! │  Tests substitute their own catalogs via from_products().               │
//! │  After construction the catalog is never mutated, so sharing it across  │
//! │  threads needs no locking.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Product;

/// Read-only product lookup.
///
/// Backed by a plain vector: the assortment is tiny, lookups are linear, and
/// iteration order stays insertion-stable (not a contractual property, but
/// convenient for display and tests).
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates a catalog with the standard demo assortment.
    pub fn with_defaults() -> Self {
        ProductCatalog::from_products(vec![
            Product::new("BOOK001", "Programming Book", 2599),
            Product::new("PEN001", "Blue Pen", 199),
            Product::new("NOTEBOOK001", "A4 Notebook", 599),
        ])
    }

    /// Creates a catalog from an arbitrary product list (test substitution).
    pub fn from_products(products: Vec<Product>) -> Self {
        ProductCatalog { products }
    }

    /// Looks up a product by id.
    ///
    /// An absent id yields `None`, never an error - deciding what a missing
    /// product means is the caller's business (the builder skips it).
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Returns a defensive copy of every product, in insertion order.
    pub fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
