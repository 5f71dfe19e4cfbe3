//! Product identifiers.
//!
//! Catalogs hand out either numeric ids or opaque string ids, and a cart
//! persisted by one session must be readable by the next, so the id keeps
//! whichever form it was created with. A numeric `1` and a textual `"1"` are
//! different products.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog product, stable across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Integer id, serialized as a JSON number.
    Number(i64),
    /// Opaque id, serialized as a JSON string.
    Text(String),
}

impl ProductId {
    /// Create a textual ID.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId::Text(id.into())
    }

    /// Parse user input: integers become numeric ids, anything else is text.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(input.to_string()),
        }
    }

    /// Get the numeric form, if this is a numeric ID.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ProductId::Number(n) => Some(*n),
            ProductId::Text(_) => None,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for ProductId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProductId::parse(s))
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}
