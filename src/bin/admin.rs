//! CLI administration tool for link-market.
//!
//! Inspects the listing sheet and manages the persisted cart without going
//! through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the sheet once and summarize it
//! cargo run --bin admin -- listings
//!
//! # Show the cart
//! cargo run --bin admin -- cart list
//!
//! # Remove one item
//! cargo run --bin admin -- cart remove Xb3k9_aQ2mZp
//!
//! # Empty the cart without prompting
//! cargo run --bin admin -- cart clear --yes
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `link_market::config`); the
//! cart commands use the configured storage backend and key.

use link_market::application::services::{CartService, CatalogService};
use link_market::config::{self, Config};
use link_market::infrastructure::sheets::GvizSource;
use link_market::server::open_storage;
use link_market::web::view::{price_label, total_label};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing link-market.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Fetch the listing sheet and show a summary
    Listings,

    /// Manage the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

/// Cart subcommands.
#[derive(Subcommand)]
enum CartAction {
    /// List cart items
    List,

    /// Remove an item by id
    Remove {
        /// Item id as shown by `cart list`
        id: String,
    },

    /// Remove every item
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Listings => show_listings(&config).await?,
        Commands::Cart { action } => handle_cart_action(action, &config).await?,
    }

    Ok(())
}

/// Fetches the sheet once and prints counts and selector options.
async fn show_listings(config: &Config) -> Result<()> {
    println!("{}", "📋 Listings".bright_blue().bold());
    println!(
        "  Sheet: {} / {}",
        config.sheet_id.bright_black(),
        config.sheet_name.cyan()
    );
    println!();

    let source = GvizSource::new(
        config.sheet_endpoint.clone(),
        config.sheet_id.clone(),
        config.sheet_name.clone(),
        Duration::from_secs(config.fetch_timeout_seconds),
    )
    .context("Failed to build sheet client")?;

    let catalog = CatalogService::new(Arc::new(source))
        .load()
        .await
        .context("Failed to load listings")?;

    println!(
        "  Websites:   {}",
        catalog.websites.len().to_string().bright_white().bold()
    );
    println!(
        "  Priced:     {}",
        catalog
            .websites
            .iter()
            .filter(|site| site.price_value() > 0.0)
            .count()
            .to_string()
            .bright_white()
    );
    println!("  Categories: {}", catalog.categories.len());
    for category in &catalog.categories {
        println!("    - {}", category.cyan());
    }
    println!("  Regions:    {}", catalog.regions.len());
    for region in &catalog.regions {
        println!("    - {}", region.cyan());
    }
    println!();

    Ok(())
}

/// Dispatches cart commands against the configured storage.
async fn handle_cart_action(action: CartAction, config: &Config) -> Result<()> {
    let storage = open_storage(config).await?;
    let cart = CartService::restore(storage, config.cart_storage_key.clone()).await;

    match action {
        CartAction::List => list_cart(&cart).await,
        CartAction::Remove { id } => remove_item(&cart, &id).await,
        CartAction::Clear { yes } => clear_cart(&cart, yes).await,
    }
}

/// Prints the cart.
///
/// # Output Format
///
/// ```text
/// 🛒 Cart
///
///   ID            Domain                         Type               Price
///   ───────────────────────────────────────────────────────────────────────
///   Xb3k9_aQ2mZp  techblog.com                   Link Insertion     $120
/// ```
async fn list_cart(cart: &CartService) -> Result<()> {
    println!("{}", "🛒 Cart".bright_blue().bold());
    println!();

    let snapshot = cart.snapshot().await;

    if snapshot.items().is_empty() {
        println!("{}", "  Cart is empty".yellow());
        return Ok(());
    }

    println!(
        "  {:<13} {:<30} {:<18} {}",
        "ID".bright_white().bold(),
        "Domain".bright_white().bold(),
        "Type".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    for item in snapshot.items() {
        println!(
            "  {:<13} {:<30} {:<18} {}",
            item.id.bright_black(),
            item.domain.cyan(),
            item.product_type,
            price_label(item.price).green()
        );
    }

    println!();
    println!(
        "  Items: {}  Total: {}",
        snapshot.count().to_string().bright_white().bold(),
        total_label(snapshot.total()).bright_white().bold()
    );
    println!();

    Ok(())
}

async fn remove_item(cart: &CartService, id: &str) -> Result<()> {
    let removed = cart
        .remove(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove item: {}", e))?;

    if removed {
        println!("{}", format!("✅ Removed item {}", id).green().bold());
    } else {
        println!("{}", format!("⚠️  No item with id {}", id).yellow());
    }

    Ok(())
}

/// Empties the cart after confirmation (unless `--yes`).
async fn clear_cart(cart: &CartService, skip_confirm: bool) -> Result<()> {
    let count = cart.count().await;
    if count == 0 {
        println!("{}", "  Cart is already empty".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", count))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = cart
        .clear()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear cart: {}", e))?;

    println!("{}", format!("✅ Removed {} items", removed).green().bold());
    Ok(())
}
