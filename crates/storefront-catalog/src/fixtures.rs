//! # Sample Catalog
//!
//! A small catalog in the shape of the public store API, used when no
//! catalog file is configured and by the `seed` binary.
//!
//! Covers all four API categories with a spread of prices and ratings so
//! every filter and sort option has something to do.

use storefront_core::{Money, Product, ProductId, Rating};

/// (id, title, price in cents, category, rate, count)
const SAMPLE: &[(u64, &str, i64, &str, f64, u32)] = &[
    (1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", 10995, "men's clothing", 3.9, 120),
    (2, "Mens Casual Premium Slim Fit T-Shirts", 2230, "men's clothing", 4.1, 259),
    (3, "Mens Cotton Jacket", 5599, "men's clothing", 4.7, 500),
    (5, "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet", 69500, "jewelery", 4.6, 400),
    (7, "White Gold Plated Princess", 999, "jewelery", 3.0, 400),
    (9, "WD 2TB Elements Portable External Hard Drive - USB 3.0", 6400, "electronics", 3.3, 203),
    (10, "SanDisk SSD PLUS 1TB Internal SSD - SATA III 6 Gb/s", 10900, "electronics", 2.9, 470),
    (14, "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor", 99999, "electronics", 2.2, 140),
    (15, "BIYLACLESEN Women's 3-in-1 Snowboard Jacket Winter Coats", 5699, "women's clothing", 2.6, 235),
    (18, "MBJ Women's Solid Short Sleeve Boat Neck V", 985, "women's clothing", 4.7, 130),
];

/// Builds the sample catalog, in catalog order.
pub fn sample_products() -> Vec<Product> {
    SAMPLE
        .iter()
        .map(|&(id, title, cents, category, rate, count)| {
            Product::new(ProductId::new(id), title, Money::from_cents(cents), category)
                .with_description(format!("{} from the {} collection.", title, category))
                .with_image(format!("https://fakestoreapi.com/img/{}.jpg", id))
                .with_rating(Rating::new(rate, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::validation::validate_product;
    use storefront_core::{categories, max_price};

    #[test]
    fn test_sample_products_are_valid() {
        for product in sample_products() {
            assert!(validate_product(&product).is_ok(), "{}", product.title);
        }
    }

    #[test]
    fn test_sample_ids_unique() {
        let products = sample_products();
        let mut ids: Vec<u64> = products.iter().map(|p| p.id.get()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_sample_covers_categories() {
        let products = sample_products();
        assert_eq!(
            categories(&products),
            vec!["men's clothing", "jewelery", "electronics", "women's clothing"]
        );
        assert_eq!(max_price(&products), Money::from_cents(99999));
    }
}
