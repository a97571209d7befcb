//! # Storefront Entry Point
//!
//! Headless driver: loads configuration and the catalog, then prints the
//! product list with the configured default filters.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults → TOML file → `STOREFRONT_*` env)
//! 3. Pick the catalog source and load it
//! 4. Print the listing
//!
//! ## Usage
//! ```bash
//! # Sample catalog
//! cargo run -p storefront-app
//!
//! # JSON catalog written by the seed binary
//! STOREFRONT_CATALOG_PATH=./products.json cargo run -p storefront-app
//! ```

use storefront_app::state::ConfigState;
use storefront_app::{commands, init_tracing, Storefront};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting storefront");

    let config = ConfigState::load()?;
    let app = Storefront::start(config).await?;

    let listing = commands::product::list_products(&app.catalog, &app.list);
    let navbar = commands::navbar::get_navbar(&app.config, &app.cart, &app.wishlist);

    println!("{}", navbar.store_name);
    println!("{}", "=".repeat(navbar.store_name.chars().count()));
    println!(
        "{} of {} products · categories: {}",
        listing.count,
        listing.total,
        listing.categories.join(", ")
    );
    println!();

    for product in &listing.products {
        println!(
            "  #{:<4} {:>10}  {:.1}★  {}",
            product.id,
            app.config.format_currency(product.price),
            product.rating.rate,
            product.title
        );
    }

    Ok(())
}
