//! Cart state and line item types.

use crate::catalog::ProductDescriptor;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::numeric::Numeric;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Display fields are copied from the catalog when the product is first
/// added and are not refreshed afterwards. The serialized form is the
/// durable record format (`productId`, `title`, `image`, `unitPrice`,
/// `quantity`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line refers to. Unique within a cart.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    #[serde(default)]
    pub title: String,
    /// Product image URL (denormalized for display).
    #[serde(default)]
    pub image: String,
    /// Unit price in major currency units.
    #[serde(default)]
    pub unit_price: Numeric,
    /// Quantity. At least 1 for lines produced by cart operations.
    #[serde(default)]
    pub quantity: Numeric,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(
        product_id: impl Into<ProductId>,
        title: impl Into<String>,
        image: impl Into<String>,
        unit_price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            title: title.into(),
            image: image.into(),
            unit_price: Numeric::from(unit_price),
            quantity: Numeric::from(1),
        }
    }

    /// Create a line item with quantity 1 from a catalog product.
    pub fn from_product(product: &ProductDescriptor) -> Self {
        Self::new(
            product.id.clone(),
            product.title.clone(),
            product.image.clone(),
            product.price,
        )
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Numeric::from(quantity);
        self
    }

    /// Quantity, if it parses as an integer.
    pub fn quantity(&self) -> Option<i64> {
        self.quantity.as_integer()
    }

    /// Unit price, if it parses as a finite number.
    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price.as_f64()
    }

    /// `unit_price * quantity` in `currency`, rounded once to minor units.
    ///
    /// Returns `None` if either field does not parse or the product
    /// overflows.
    pub fn line_total(&self, currency: Currency) -> Option<Money> {
        let quantity = self.quantity()?;
        Money::from_decimal(self.unit_price()? * quantity as f64, currency)
    }
}

/// Snapshot of the cart: ordered line items, unique by product.
///
/// Insertion order is display order. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap line items as-is.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume and return the line items.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Check if a product has a line.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct lines (the nav badge).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities. Lines whose quantity does not parse are skipped.
    pub fn unit_count(&self) -> i64 {
        self.items
            .iter()
            .filter_map(LineItem::quantity)
            .fold(0_i64, |acc, q| acc.saturating_add(q))
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// A line whose price or quantity does not parse contributes zero, as
    /// does one whose total would overflow; the rest of the cart still adds
    /// up.
    pub fn total_price(&self, currency: Currency) -> Money {
        self.items
            .iter()
            .fold(Money::zero(currency), |total, item| {
                match item.line_total(currency).and_then(|line| total.try_add(&line)) {
                    Some(sum) => sum,
                    None => {
                        tracing::debug!(
                            product_id = %item.product_id,
                            unit_price = %item.unit_price,
                            quantity = %item.quantity,
                            "line skipped in cart total"
                        );
                        total
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_from_product() {
        let product = ProductDescriptor::new(1, "Backpack", 109.95, "a.jpg");
        let item = LineItem::from_product(&product);
        assert_eq!(item.product_id, ProductId::Number(1));
        assert_eq!(item.quantity(), Some(1));
        assert_eq!(item.unit_price(), Some(109.95));
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("a", "A", "", 9.99).with_quantity(3);
        assert_eq!(item.line_total(Currency::USD).unwrap().amount_cents, 2997);

        let mut bad = item.clone();
        bad.unit_price = Numeric::from("bad");
        assert!(bad.line_total(Currency::USD).is_none());
    }

    #[test]
    fn test_line_total_rounds_once_per_line() {
        let item = LineItem::new("p", "P", "", 0.125).with_quantity(8);
        assert_eq!(item.line_total(Currency::USD).unwrap().amount_cents, 100);

        let item = LineItem::new("q", "Q", "", 0.333).with_quantity(3);
        assert_eq!(item.line_total(Currency::USD).unwrap().amount_cents, 100);

        let item = LineItem::new("r", "R", "", 9.99).with_quantity(2);
        assert_eq!(item.line_total(Currency::USD).unwrap().amount_cents, 1998);
    }

    #[test]
    fn test_missing_price_reads_as_null() {
        let item: LineItem = serde_json::from_value(serde_json::json!({
            "productId": 1,
            "quantity": 2
        }))
        .unwrap();
        assert_eq!(item.unit_price, Numeric::Null);
        assert!(item.line_total(Currency::USD).is_none());
        assert_eq!(item.quantity(), Some(2));
    }

    #[test]
    fn test_serialized_field_names() {
        let item = LineItem::new(7, "Mug", "m.jpg", 5.0).with_quantity(2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": 7,
                "title": "Mug",
                "image": "m.jpg",
                "unitPrice": 5.0,
                "quantity": 2
            })
        );
    }

    #[test]
    fn test_state_serializes_as_array() {
        let state = CartState::from_items(vec![LineItem::new("a", "A", "", 1.0)]);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.starts_with('['));
        assert_eq!(serde_json::from_str::<CartState>(&json).unwrap(), state);
    }

    #[test]
    fn test_total_skips_unparseable_lines() {
        let mut bad = LineItem::new("y", "Y", "", 0.0).with_quantity(3);
        bad.unit_price = Numeric::from("bad");
        let state = CartState::from_items(vec![
            LineItem::new("x", "X", "", 10.0).with_quantity(2),
            bad,
        ]);
        assert_eq!(state.total_price(Currency::USD).amount_cents, 2000);
    }

    #[test]
    fn test_total_skips_unparseable_quantity() {
        let mut bad = LineItem::new("y", "Y", "", 4.0);
        bad.quantity = Numeric::from("many");
        let state = CartState::from_items(vec![LineItem::new("x", "X", "", 1.5), bad]);
        assert_eq!(state.total_price(Currency::USD).amount_cents, 150);
        assert_eq!(state.unit_count(), 1);
    }

    #[test]
    fn test_total_skips_overflowing_line() {
        let huge = LineItem::new("h", "H", "", 1e15).with_quantity(i64::MAX);
        let state = CartState::from_items(vec![huge, LineItem::new("x", "X", "", 2.0)]);
        assert_eq!(state.total_price(Currency::USD).amount_cents, 200);
    }

    #[test]
    fn test_text_numbers_still_count() {
        let mut item = LineItem::new("t", "T", "", 0.0);
        item.unit_price = Numeric::from("2.50");
        item.quantity = Numeric::from("4");
        let state = CartState::from_items(vec![item]);
        assert_eq!(state.total_price(Currency::USD).amount_cents, 1000);
        assert_eq!(state.unit_count(), 4);
    }
}
