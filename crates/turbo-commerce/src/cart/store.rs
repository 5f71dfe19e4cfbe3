//! The cart store: owner of the cart state and its durable mirror.

use turbo_cache::KvStore;

use crate::cart::snapshot::{encode_cart_snapshot, parse_cart_snapshot};
use crate::cart::{CartState, LineItem};
use crate::catalog::ProductDescriptor;
use crate::config::CartConfig;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::numeric::Numeric;

/// Result of loading the durable slot into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// The slot held a cart record; the store now holds its lines.
    Restored {
        /// Number of lines loaded.
        lines: usize,
    },
    /// No record was stored; the store is empty.
    Empty,
    /// The record did not parse; the store is empty.
    Malformed,
    /// The medium could not be read; in-memory state was left untouched.
    Unavailable,
}

/// Shopping cart state container.
///
/// Owns the [`CartState`] and mirrors it to one durable slot of an injected
/// [`KvStore`]. Every mutation rewrites the whole slot; `clear` erases it.
/// Storage failures are logged and swallowed: the in-memory state stays
/// authoritative for the rest of the session, and no operation returns an
/// error.
///
/// Until [`hydrate`](Self::hydrate) runs the store presents an empty cart.
///
/// # Example
///
/// ```rust
/// use turbo_cache::MemoryStore;
/// use turbo_commerce::prelude::*;
///
/// let storage = MemoryStore::new();
/// let mut cart = CartStore::new(&storage, &CartConfig::default());
/// cart.hydrate();
///
/// let mug = ProductDescriptor::new(1, "Mug", 9.99, "mug.jpg");
/// cart.add(&mug);
/// cart.add(&mug);
///
/// assert_eq!(cart.line_count(), 1);
/// assert_eq!(cart.unit_count(), 2);
/// assert_eq!(cart.total_price().display(), "$19.98");
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    slot: String,
    currency: Currency,
    state: CartState,
    hydrated: bool,
    revision: u64,
}

impl<S: KvStore> CartStore<S> {
    /// Create an empty, not yet hydrated store over `storage`.
    pub fn new(storage: S, config: &CartConfig) -> Self {
        Self {
            storage,
            slot: config.slot_key(),
            currency: config.currency,
            state: CartState::new(),
            hydrated: false,
            revision: 0,
        }
    }

    /// Load the durable slot into memory.
    ///
    /// Absent or malformed records leave an empty cart; an unreadable medium
    /// leaves the current state as it is. Never writes to storage.
    pub fn hydrate(&mut self) -> Hydration {
        self.hydrated = true;

        let raw = match self.storage.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = %self.slot, "no stored cart");
                self.set_all(Vec::new());
                return Hydration::Empty;
            }
            Err(error) => {
                tracing::warn!(slot = %self.slot, %error, "cart storage unavailable, keeping in-memory cart");
                return Hydration::Unavailable;
            }
        };

        match parse_cart_snapshot(&raw) {
            Ok(items) => {
                let lines = items.len();
                tracing::debug!(slot = %self.slot, lines, "cart restored");
                self.set_all(items);
                Hydration::Restored { lines }
            }
            Err(error) => {
                tracing::warn!(slot = %self.slot, %error, "stored cart is malformed, starting empty");
                self.set_all(Vec::new());
                Hydration::Malformed
            }
        }
    }

    /// Replace every line at once. Does not write to storage; call
    /// [`persist`](Self::persist) for that.
    pub fn set_all(&mut self, items: Vec<LineItem>) {
        self.state = CartState::from_items(items);
        self.bump();
    }

    /// Overwrite the durable slot with the current lines.
    ///
    /// Returns whether the write landed. Failures are logged, not raised.
    pub fn persist(&self) -> bool {
        let raw = match encode_cart_snapshot(self.state.items()) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(slot = %self.slot, %error, "failed to encode cart");
                return false;
            }
        };
        match self.storage.set(&self.slot, &raw) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(slot = %self.slot, %error, "failed to save cart");
                false
            }
        }
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart gets its quantity incremented in place
    /// (a stored quantity that no longer parses counts as zero). A new
    /// product is appended with quantity 1.
    pub fn add(&mut self, product: &ProductDescriptor) -> &LineItem {
        let items = self.state.items_mut();
        let existing = items.iter().position(|i| i.product_id == product.id);
        let index = match existing {
            Some(index) => {
                let line = &mut items[index];
                let quantity = line.quantity().unwrap_or(0).max(0).saturating_add(1);
                line.quantity = Numeric::from(quantity);
                tracing::debug!(product_id = %product.id, quantity, "cart line incremented");
                index
            }
            None => {
                items.push(LineItem::from_product(product));
                tracing::debug!(product_id = %product.id, "cart line added");
                items.len() - 1
            }
        };
        self.bump();
        self.persist();
        &self.state.items()[index]
    }

    /// Remove a product's line. Unknown ids are a no-op.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let items = self.state.items_mut();
        let len_before = items.len();
        items.retain(|i| &i.product_id != product_id);
        let removed = items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "cart line removed");
            self.bump();
        } else {
            tracing::debug!(%product_id, "remove ignored, product not in cart");
        }
        self.persist();
        removed
    }

    /// Set a line's quantity exactly.
    ///
    /// Unknown ids are a no-op, and so is a quantity below 1: the previous
    /// quantity stands. Removing a line takes [`remove`](Self::remove).
    ///
    /// Returns whether the quantity was applied.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let applied = match self
            .state
            .items_mut()
            .iter_mut()
            .find(|i| &i.product_id == product_id)
        {
            Some(line) if quantity > 0 => {
                line.quantity = Numeric::from(quantity);
                true
            }
            Some(_) => {
                tracing::debug!(%product_id, quantity, "non-positive quantity ignored");
                false
            }
            None => {
                tracing::debug!(%product_id, "set quantity ignored, product not in cart");
                false
            }
        };
        if applied {
            tracing::debug!(%product_id, quantity, "cart line quantity set");
            self.bump();
        }
        self.persist();
        applied
    }

    /// Empty the cart and erase the durable slot.
    pub fn clear(&mut self) {
        self.set_all(Vec::new());
        if let Err(error) = self.storage.delete(&self.slot) {
            tracing::warn!(slot = %self.slot, %error, "failed to erase stored cart");
        }
        tracing::debug!(slot = %self.slot, "cart cleared");
    }

    /// Complete a purchase: hand back the final cart and clear it.
    ///
    /// Returns `None` (and changes nothing) when the cart is empty.
    pub fn checkout(&mut self) -> Option<CartState> {
        if self.state.is_empty() {
            return None;
        }
        let order = self.state.clone();
        tracing::info!(
            lines = order.line_count(),
            units = order.unit_count(),
            total = %order.total_price(self.currency),
            "checkout completed"
        );
        self.clear();
        Some(order)
    }

    /// Current snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.state.get(product_id)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Number of distinct lines (the nav badge).
    pub fn line_count(&self) -> usize {
        self.state.line_count()
    }

    /// Total units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.state.unit_count()
    }

    /// Sum of `unit_price * quantity`; unparseable lines contribute zero.
    pub fn total_price(&self) -> Money {
        self.state.total_price(self.currency)
    }

    /// Whether [`hydrate`](Self::hydrate) has run.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Counter bumped on every in-memory change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Currency totals are computed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Storage key of the durable slot.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The storage capability.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
