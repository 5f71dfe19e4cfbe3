//! Cart commands: show, add, remove, set-qty, clear, checkout.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use serde::Serialize;
use turbo_cache::KvStore;
use turbo_commerce::prelude::*;

use super::{AddArgs, ClearArgs, RemoveArgs, SetQtyArgs};
use crate::context::Context;
use crate::output::{format_line_total, format_unit_price, pluralize_items};

/// Machine-readable view of the cart for `--json`.
#[derive(Debug, Serialize)]
pub struct CartSummary<'a> {
    pub items: &'a [LineItem],
    pub lines: usize,
    pub units: i64,
    pub total: String,
    pub total_minor: i64,
    pub currency: Currency,
}

impl<'a> CartSummary<'a> {
    pub fn new(state: &'a CartState, currency: Currency) -> Self {
        let total = state.total_price(currency);
        Self {
            items: state.items(),
            lines: state.line_count(),
            units: state.unit_count(),
            total: total.display_amount(),
            total_minor: total.amount_cents,
            currency,
        }
    }
}

/// Print the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    print_cart(ctx, cart.state(), cart.currency());
    Ok(())
}

/// Add one unit of a product.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::parse(&args.id);
    let product = match (args.title, args.price) {
        (Some(title), Some(price)) => ProductDescriptor::new(id, title, price, args.image),
        _ => ctx
            .catalog()?
            .fetch_by_id(&id)
            .with_context(|| format!("Cannot add product {}", id))?,
    };

    let mut cart = ctx.open_cart()?;
    let line = cart.add(&product);
    let quantity = line.quantity().unwrap_or_default();
    ctx.output.success(&format!(
        "Added {} to cart (quantity {})",
        product.title, quantity
    ));
    finish(ctx, &cart)
}

/// Remove a product's line.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::parse(&args.id);
    let mut cart = ctx.open_cart()?;
    if cart.remove(&id) {
        ctx.output.success(&format!("Removed {} from cart", id));
    } else {
        ctx.output.info(&format!("Product {} is not in the cart", id));
    }
    finish(ctx, &cart)
}

/// Set a line's quantity.
pub fn set_qty(args: SetQtyArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::parse(&args.id);
    let mut cart = ctx.open_cart()?;
    if cart.set_quantity(&id, args.quantity) {
        ctx.output
            .success(&format!("Set quantity of {} to {}", id, args.quantity));
    } else if cart.get(&id).is_none() {
        ctx.output.info(&format!("Product {} is not in the cart", id));
    } else {
        ctx.output.warn(&format!(
            "Quantity must be at least 1; use `cart remove {}` to drop the line",
            id
        ));
    }
    finish(ctx, &cart)
}

/// Empty the cart.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if cart.is_empty() {
        ctx.output.info("Cart is already empty");
        return finish(ctx, &cart);
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove {} from the cart?",
                pluralize_items(cart.unit_count())
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    cart.clear();
    ctx.output.success("Cart cleared");
    finish(ctx, &cart)
}

/// Simulate a successful payment: print the order and empty the cart.
pub fn checkout(ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let currency = cart.currency();
    match cart.checkout() {
        Some(order) => {
            if ctx.output.is_json() {
                ctx.output.json(&CartSummary::new(&order, currency));
            } else {
                print_cart(ctx, &order, currency);
                ctx.output
                    .success("Payment successful! Your items will be shipped soon.");
            }
        }
        None => ctx.output.info("Your cart is empty. Nothing to check out."),
    }
    Ok(())
}

/// Print the cart after a mutation.
fn finish<S: KvStore>(ctx: &Context, cart: &CartStore<S>) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&CartSummary::new(cart.state(), cart.currency()));
    } else {
        ctx.output.kv(
            "Cart",
            &format!(
                "{} ({} lines), {}",
                pluralize_items(cart.unit_count()),
                cart.line_count(),
                cart.total_price().display()
            ),
        );
    }
    Ok(())
}

fn print_cart(ctx: &Context, state: &CartState, currency: Currency) {
    if ctx.output.is_json() {
        ctx.output.json(&CartSummary::new(state, currency));
        return;
    }

    ctx.output.header("Your Cart");
    if state.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    let widths = [10, 32, 8, 12, 12];
    ctx.output
        .table_row(&["ID", "Product", "Qty", "Unit Price", "Total"], &widths);
    for item in state.items() {
        let id = item.product_id.to_string();
        let quantity = item.quantity.to_string();
        let unit = format_unit_price(item, currency);
        let total = format_line_total(item, currency);
        ctx.output.table_row(
            &[
                id.as_str(),
                item.title.as_str(),
                quantity.as_str(),
                unit.as_str(),
                total.as_str(),
            ],
            &widths,
        );
    }
    println!();
    ctx.output.kv("Items", &pluralize_items(state.unit_count()));
    ctx.output.kv("Total", &state.total_price(currency).display());
}
