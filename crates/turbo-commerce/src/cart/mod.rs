//! Shopping cart module.
//!
//! Contains the line item and cart state types, the durable record codec,
//! and the [`CartStore`] that owns a cart for the lifetime of a session.

mod line_item;
mod snapshot;
mod store;

pub use line_item::{CartState, LineItem};
pub use snapshot::{encode_cart_snapshot, parse_cart_snapshot};
pub use store::{CartStore, Hydration};
