//! Product descriptors as supplied by the catalog.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as listed by the catalog.
///
/// Matches the storefront product feed (`id`, `title`, `price`, `image`,
/// `category`, `description`); cart-record spellings (`productId`,
/// `unitPrice`) are accepted as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDescriptor {
    /// Unique product identifier.
    #[serde(alias = "productId")]
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price in major currency units (e.g., dollars).
    #[serde(alias = "unitPrice")]
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
}

impl ProductDescriptor {
    /// Create a descriptor with the fields the cart needs.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
            category: String::new(),
            description: String::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
