//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod transfer;

use clap::Args;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID (integers are numeric ids).
    pub id: String,

    /// Product title; with --price, skips the catalog lookup.
    #[arg(long, requires = "price")]
    pub title: Option<String>,

    /// Unit price in major currency units.
    #[arg(long, requires = "title")]
    pub price: Option<f64>,

    /// Image URL.
    #[arg(long, default_value = "")]
    pub image: String,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the set-qty command.
#[derive(Args)]
pub struct SetQtyArgs {
    /// Product ID.
    pub id: String,

    /// New quantity (values below 1 are ignored; use `remove`).
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// JSON file holding an array of line items.
    pub file: String,
}

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}
