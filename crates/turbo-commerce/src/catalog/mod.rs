//! Product catalog module.
//!
//! The catalog is an external collaborator; this module defines the product
//! descriptor the cart consumes and the read-only interface to fetch it.

mod product;
mod source;

pub use product::ProductDescriptor;
pub use source::{ProductCatalog, StaticCatalog};
