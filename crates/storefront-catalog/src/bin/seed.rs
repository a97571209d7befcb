//! # Sample Catalog Writer
//!
//! Writes the built-in sample catalog to a JSON file in the public store
//! API schema, ready to be used as `catalog_path`.
//!
//! ## Usage
//! ```bash
//! # Write ./products.json (default)
//! cargo run -p storefront-catalog --bin seed
//!
//! # Custom output path
//! cargo run -p storefront-catalog --bin seed -- --out ./data/products.json
//!
//! # Overwrite an existing file
//! cargo run -p storefront-catalog --bin seed -- --force
//! ```

use std::env;
use std::path::PathBuf;

use storefront_catalog::{sample_products, CatalogSource, JsonFileCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut out = PathBuf::from("./products.json");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Storefront Sample Catalog Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --out <PATH>   Output file (default: ./products.json)");
                println!("  -f, --force        Overwrite an existing file");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Storefront Sample Catalog Writer");
    println!("================================");
    println!("Output: {}", out.display());
    println!();

    if tokio::fs::try_exists(&out).await? && !force {
        println!("⚠ {} already exists", out.display());
        println!("  Pass --force to overwrite it.");
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let products = sample_products();
    let json = serde_json::to_string_pretty(&products)?;
    tokio::fs::write(&out, json).await?;
    println!("✓ Wrote {} products", products.len());

    // Read it back through the same loader the app uses
    let catalog = JsonFileCatalog::new(&out);
    let loaded = catalog.fetch_all().await?;
    println!("✓ Verified: {} products readable", loaded.len());

    Ok(())
}
