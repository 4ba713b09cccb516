//! Record generation, one module per entity family, run in dependency order.

mod catalog;
mod orders;
mod products;
mod stores;
mod users;

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

pub use catalog::{seed_categories, seed_colors, seed_sizes};
pub use orders::{DISCOUNT_RATES, QUANTITIES, seed_orders};
pub use products::{ProductCounts, seed_products, slugify};
pub use stores::seed_stores;
pub use users::{seed_addresses, seed_users};

use crate::{
    assets::AssetFetcher,
    error::{SeedError, SeedResult},
    fixtures::Fixtures,
    random::SeedRng,
};

/// Stock every size variation starts with.
pub const AVAILABLE_QUANTITY: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    pub user_count: usize,
    pub order_count: usize,
    pub available_quantity: i32,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            user_count: 500,
            order_count: 480,
            available_quantity: AVAILABLE_QUANTITY,
        }
    }
}

/// Ids of seeded reference rows by name. The first row wins when a name
/// repeats.
#[derive(Debug, Default)]
pub struct References {
    categories: HashMap<String, i32>,
    colors: HashMap<String, i32>,
    sizes: HashMap<String, i32>,
}

impl References {
    pub fn add_category(&mut self, name: &str, id: i32) {
        self.categories.entry(name.to_string()).or_insert(id);
    }

    pub fn add_color(&mut self, name: &str, id: i32) {
        self.colors.entry(name.to_string()).or_insert(id);
    }

    pub fn add_size(&mut self, name: &str, id: i32) {
        self.sizes.entry(name.to_string()).or_insert(id);
    }

    pub fn category(&self, name: &str) -> SeedResult<i32> {
        self.categories
            .get(name)
            .copied()
            .ok_or_else(|| SeedError::UnknownCategory(name.to_string()))
    }

    pub fn color(&self, name: &str) -> SeedResult<i32> {
        self.colors
            .get(name)
            .copied()
            .ok_or_else(|| SeedError::UnknownColor(name.to_string()))
    }

    pub fn size(&self, name: &str) -> SeedResult<i32> {
        self.sizes
            .get(name)
            .copied()
            .ok_or_else(|| SeedError::UnknownSize(name.to_string()))
    }
}

/// Row counts inserted by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub addresses: usize,
    pub categories: usize,
    pub colors: usize,
    pub sizes: usize,
    pub products: ProductCounts,
    pub stores: usize,
    pub orders: usize,
    pub order_items: usize,
}

/// Seeds every table on `db`, which must already hold an empty schema.
pub async fn run<C: ConnectionTrait>(
    db: &C,
    fixtures: &Fixtures,
    fetcher: &AssetFetcher,
    rng: &mut SeedRng,
    options: &SeedOptions,
) -> SeedResult<SeedSummary> {
    let mut summary = SeedSummary::default();
    let mut refs = References::default();

    println!("Start create sample data...");

    summary.users = seed_users(db, rng, options.user_count).await?.len();
    println!("--> Created users.");
    summary.addresses = seed_addresses(db, rng).await?;
    println!("--> Created addresses.");

    summary.categories = seed_categories(db, &fixtures.categories, &mut refs).await?;
    println!("--> Created categories.");
    summary.colors = seed_colors(db, &fixtures.colors, &mut refs).await?;
    println!("--> Created colors.");
    summary.sizes = seed_sizes(db, &fixtures.sizes, &mut refs).await?;
    println!("--> Created sizes.");
    summary.products = seed_products(
        db,
        &fixtures.products,
        &refs,
        fetcher,
        options.available_quantity,
    )
    .await?;
    println!("--> Created products.");
    summary.stores = seed_stores(db, &fixtures.stores).await?;
    println!("--> Created stores.");

    let (orders, order_items) = seed_orders(db, rng, options.order_count).await?;
    summary.orders = orders;
    summary.order_items = order_items;
    println!("--> Created orders.");

    println!("--> Done!");
    tracing::info!(?summary, "seed run finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reference_wins() {
        let mut refs = References::default();
        refs.add_category("Shirts", 1);
        refs.add_category("Shirts", 2);
        refs.add_color("Red", 3);
        refs.add_size("M", 4);

        assert_eq!(refs.category("Shirts").unwrap(), 1);
        assert_eq!(refs.color("Red").unwrap(), 3);
        assert_eq!(refs.size("M").unwrap(), 4);
    }

    #[test]
    fn missing_reference_names_the_lookup() {
        let refs = References::default();
        assert!(matches!(refs.category("Hats"), Err(SeedError::UnknownCategory(n)) if n == "Hats"));
        assert!(matches!(refs.color("Teal"), Err(SeedError::UnknownColor(n)) if n == "Teal"));
        assert!(matches!(refs.size("XXL"), Err(SeedError::UnknownSize(n)) if n == "XXL"));
    }

    #[test]
    fn default_options_match_the_reference_dataset() {
        let options = SeedOptions::default();
        assert_eq!(options.user_count, 500);
        assert_eq!(options.order_count, 480);
        assert_eq!(options.available_quantity, 20);
    }
}
