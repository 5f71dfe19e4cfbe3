//! Cart CLI - terminal storefront cart backed by durable slot files.
//!
//! Commands:
//! - `cart show` - Print the cart
//! - `cart add` - Add one unit of a product
//! - `cart remove` - Remove a product's line
//! - `cart set-qty` - Set a line's quantity
//! - `cart clear` - Empty the cart
//! - `cart checkout` - Simulate payment and empty the cart
//! - `cart import` / `cart export` - Move cart records in and out
//! - `cart catalog` - List catalog products

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ClearArgs, ExportArgs, ImportArgs, RemoveArgs, SetQtyArgs};

/// Cart CLI - Manage a storefront shopping cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart (default)
    Show,

    /// Add one unit of a product
    Add(AddArgs),

    /// Remove a product's line
    Remove(RemoveArgs),

    /// Set a line's quantity
    SetQty(SetQtyArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Simulate payment and empty the cart
    Checkout,

    /// Replace the cart with a JSON record
    Import(ImportArgs),

    /// Write the cart record as JSON
    Export(ExportArgs),

    /// List catalog products
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::cart::show(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::SetQty(args) => commands::cart::set_qty(args, &ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Checkout => commands::cart::checkout(&ctx),
        Commands::Import(args) => commands::transfer::import(args, &ctx),
        Commands::Export(args) => commands::transfer::export(args, &ctx),
        Commands::Catalog => commands::catalog::list(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
