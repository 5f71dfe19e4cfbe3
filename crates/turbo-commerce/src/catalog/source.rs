//! Catalog access.

use std::path::Path;

use crate::catalog::ProductDescriptor;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Read-only source of product descriptors.
///
/// The cart only copies the fields it displays at add-time and never goes
/// back to the catalog to refresh them.
pub trait ProductCatalog {
    /// List every product.
    fn fetch_all(&self) -> Result<Vec<ProductDescriptor>, CommerceError>;

    /// Look up one product.
    fn fetch_by_id(&self, id: &ProductId) -> Result<ProductDescriptor, CommerceError> {
        self.fetch_all()?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.clone()))
    }
}

/// Catalog held in memory, typically loaded from a JSON product feed.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<ProductDescriptor>,
}

impl StaticCatalog {
    /// Create a catalog from descriptors.
    pub fn new(products: Vec<ProductDescriptor>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON array of products from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::SerializationError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for StaticCatalog {
    fn fetch_all(&self) -> Result<Vec<ProductDescriptor>, CommerceError> {
        Ok(self.products.clone())
    }

    fn fetch_by_id(&self, id: &ProductId) -> Result<ProductDescriptor, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.clone()))
    }
}
