//! Import and export of cart records.

use anyhow::{Context as _, Result};
use turbo_commerce::prelude::*;

use super::{ExportArgs, ImportArgs};
use crate::context::Context;
use crate::output::pluralize_items;

/// Replace the cart with the lines in a JSON file and save it.
pub fn import(args: ImportArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items = parse_cart_snapshot(&raw)
        .with_context(|| format!("Failed to import {}", path.display()))?;

    let mut cart = ctx.open_cart()?;
    cart.set_all(items);
    if !cart.persist() {
        anyhow::bail!("Imported cart could not be saved to {}", cart.slot());
    }

    ctx.output.success(&format!(
        "Imported {} ({} lines)",
        pluralize_items(cart.unit_count()),
        cart.line_count()
    ));
    Ok(())
}

/// Write the cart record to stdout or a file.
pub fn export(args: ExportArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let raw = encode_cart_snapshot(cart.items())?;

    match args.output {
        Some(file) => {
            let path = ctx.resolve_path(&file);
            std::fs::write(&path, &raw)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Exported cart to {}", path.display()));
        }
        None => println!("{}", raw),
    }
    Ok(())
}
