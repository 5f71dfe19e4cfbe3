//! Lenient numeric fields for persisted client data.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A number as it was stored: a JSON number, a JSON string, or `null`.
///
/// Persisted carts are written by older builds and sometimes by hand, so a
/// price may come back as `"12.50"`, `"bad"`, or `null` (what a browser
/// writes for NaN). A missing field reads as `null`. Keeping the raw value lets a
/// record load and round-trip unchanged; arithmetic asks for [`as_f64`] or
/// [`as_integer`] and skips what does not parse.
///
/// [`as_f64`]: Numeric::as_f64
/// [`as_integer`]: Numeric::as_integer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// No value.
    #[default]
    Null,
    /// A JSON number, kept in its original integer or float form.
    Number(Number),
    /// A JSON string that may or may not hold a number.
    Text(String),
}

impl Numeric {
    /// Decimal value, if finite.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(n) => n.as_f64()?,
            Numeric::Text(s) => s.trim().parse::<f64>().ok()?,
            Numeric::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Integer value. Fractional values truncate toward zero.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Numeric::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
            Numeric::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            Numeric::Null => None,
        }
    }
}

fn truncate(value: f64) -> Option<i64> {
    let value = value.trunc();
    (value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64)
        .then_some(value as i64)
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Numeric::Number(Number::from(n))
    }
}

impl From<f64> for Numeric {
    /// Non-finite values have no JSON number form and are kept as text.
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Numeric::Number)
            .unwrap_or_else(|| Numeric::Text(value.to_string()))
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(n) => write!(f, "{}", n),
            Numeric::Text(s) => write!(f, "{}", s),
            Numeric::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_values() {
        assert_eq!(Numeric::from(3).as_integer(), Some(3));
        assert_eq!(Numeric::from(3).as_f64(), Some(3.0));
        assert_eq!(Numeric::from(9.99).as_f64(), Some(9.99));
        assert_eq!(Numeric::from(2.7).as_integer(), Some(2));
    }

    #[test]
    fn test_text_values() {
        assert_eq!(Numeric::from("12.5").as_f64(), Some(12.5));
        assert_eq!(Numeric::from(" 4 ").as_integer(), Some(4));
        assert_eq!(Numeric::from("4.9").as_integer(), Some(4));
        assert_eq!(Numeric::from("bad").as_f64(), None);
        assert_eq!(Numeric::from("bad").as_integer(), None);
        assert_eq!(Numeric::from("NaN").as_f64(), None);
        assert_eq!(Numeric::from("").as_integer(), None);
    }

    #[test]
    fn test_non_finite_float_kept_as_text() {
        assert_eq!(Numeric::from(f64::NAN), Numeric::Text("NaN".into()));
        assert_eq!(Numeric::from(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn test_round_trip_keeps_form() {
        for raw in ["2", "9.99", r#""bad""#, r#""10""#, "-1", "null"] {
            let value: Numeric = serde_json::from_str(raw).unwrap();
            assert_eq!(serde_json::to_string(&value).unwrap(), raw);
        }
    }

    #[test]
    fn test_null_has_no_value() {
        let value: Numeric = serde_json::from_str("null").unwrap();
        assert_eq!(value, Numeric::Null);
        assert_eq!(value, Numeric::default());
        assert_eq!(value.as_f64(), None);
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.to_string(), "null");
    }

    #[test]
    fn test_rejects_other_json_types() {
        assert!(serde_json::from_str::<Numeric>("true").is_err());
        assert!(serde_json::from_str::<Numeric>("[1]").is_err());
    }
}
