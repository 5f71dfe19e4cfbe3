//! Shopping cart state and e-commerce domain types for TurboCommerce.
//!
//! This crate provides the client-side cart of a storefront:
//!
//! - **Cart**: line items unique by product, the [`CartStore`] that mutates
//!   them and mirrors every change to a durable key-value slot
//! - **Catalog**: the product descriptor the cart copies its display data from
//! - **Money**: cents-based totals
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::MemoryStore;
//! use turbo_commerce::prelude::*;
//!
//! let storage = MemoryStore::new();
//! let mut cart = CartStore::new(&storage, &CartConfig::default());
//!
//! // Load whatever the previous session left behind
//! cart.hydrate();
//!
//! cart.add(&ProductDescriptor::new("a", "Notebook", 9.99, "notebook.jpg"));
//! cart.add(&ProductDescriptor::new("a", "Notebook", 9.99, "notebook.jpg"));
//! cart.add(&ProductDescriptor::new("b", "Pen", 5.0, "pen.jpg"));
//!
//! assert_eq!(cart.line_count(), 2);
//! assert_eq!(cart.unit_count(), 3);
//! println!("Total: {}", cart.total_price().display()); // $24.98
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod numeric;

pub mod cart;
pub mod catalog;

pub use config::CartConfig;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use numeric::Numeric;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CartConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::numeric::Numeric;

    // Cart
    pub use crate::cart::{
        encode_cart_snapshot, parse_cart_snapshot, CartState, CartStore, Hydration, LineItem,
    };

    // Catalog
    pub use crate::catalog::{ProductCatalog, ProductDescriptor, StaticCatalog};
}
