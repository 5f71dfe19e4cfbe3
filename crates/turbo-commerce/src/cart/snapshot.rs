//! Durable cart record codec.
//!
//! The record is a JSON array of line items. Anything else (invalid JSON, an
//! object, an array whose elements lack the line-item shape) is malformed.
//! A line with a `null` or missing price or quantity still loads; it just
//! contributes nothing to the totals.

use crate::cart::LineItem;
use crate::error::CommerceError;
use serde_json::Value;

/// Parse a durable cart record into line items.
///
/// ```
/// use turbo_commerce::cart::parse_cart_snapshot;
///
/// let items = parse_cart_snapshot(
///     r#"[{"productId":1,"title":"Mug","image":"","unitPrice":5,"quantity":2}]"#,
/// ).unwrap();
/// assert_eq!(items[0].quantity(), Some(2));
///
/// assert!(parse_cart_snapshot("not-json").is_err());
/// ```
pub fn parse_cart_snapshot(raw: &str) -> Result<Vec<LineItem>, CommerceError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CommerceError::MalformedCartRecord(format!("invalid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(CommerceError::MalformedCartRecord(format!(
            "expected an array of line items, found {}",
            json_kind(&value)
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| CommerceError::MalformedCartRecord(format!("invalid line item: {}", e)))
}

/// Encode line items as a durable cart record.
pub fn encode_cart_snapshot(items: &[LineItem]) -> Result<String, CommerceError> {
    Ok(serde_json::to_string(items)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
