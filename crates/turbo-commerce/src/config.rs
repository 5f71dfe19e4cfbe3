//! Cart configuration.

use serde::{Deserialize, Serialize};
use turbo_cache::cache_key;

use crate::money::Currency;

/// Default name of the durable slot holding the cart.
pub const DEFAULT_CART_SLOT: &str = "cart";

/// Configuration for a cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Name of the durable slot the cart is mirrored to.
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Optional prefix, for several storefronts sharing one medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Currency totals are computed in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_slot() -> String {
    DEFAULT_CART_SLOT.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            namespace: None,
            currency: Currency::default(),
        }
    }
}

impl CartConfig {
    /// Set the slot name.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Set the namespace prefix.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Storage key of the cart slot (`"cart"` or `"<namespace>:cart"`).
    pub fn slot_key(&self) -> String {
        match &self.namespace {
            Some(ns) => cache_key!(ns.as_str(), self.slot),
            None => self.slot.clone(),
        }
    }
}
