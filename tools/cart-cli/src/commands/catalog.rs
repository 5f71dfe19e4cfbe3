//! Catalog listing.

use anyhow::Result;
use turbo_commerce::prelude::*;

use crate::context::Context;

/// List the products of the configured catalog.
pub fn list(ctx: &Context) -> Result<()> {
    let products = ctx.catalog()?.fetch_all()?;
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let currency = ctx.config.cart.currency;
    ctx.output.header("Catalog");
    let widths = [10, 40, 12, 20];
    ctx.output
        .table_row(&["ID", "Title", "Price", "Category"], &widths);
    for product in &products {
        let id = product.id.to_string();
        let price = Money::from_decimal(product.price, currency)
            .map(|m| m.display())
            .unwrap_or_else(|| product.price.to_string());
        ctx.output.table_row(
            &[
                id.as_str(),
                product.title.as_str(),
                price.as_str(),
                product.category.as_str(),
            ],
            &widths,
        );
    }
    Ok(())
}
