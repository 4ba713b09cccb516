use std::env;

use crate::seeders::SeedOptions;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub draft_database_url: String,
    pub seeds_glob: String,
    pub asset_cache_dir: String,
    pub user_count: usize,
    pub order_count: usize,
    pub faker_seed: u64,
    pub jitter_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let draft_database_url = env::var("DRAFT_DATABASE_URL")?;
        let seeds_glob =
            env::var("SEEDS_GLOB").unwrap_or_else(|_| "db/seeds/data/*.yml".to_string());
        let asset_cache_dir = env::var("ASSET_CACHE_DIR").unwrap_or_else(|_| "tmp".to_string());
        let defaults = SeedOptions::default();
        let user_count = parse_var("SEED_USER_COUNT").unwrap_or(defaults.user_count);
        let order_count = parse_var("SEED_ORDER_COUNT").unwrap_or(defaults.order_count);
        let faker_seed = parse_var("FAKER_SEED").unwrap_or(42);
        let jitter_seed = parse_var("JITTER_SEED");
        Ok(Self {
            database_url,
            draft_database_url,
            seeds_glob,
            asset_cache_dir,
            user_count,
            order_count,
            faker_seed,
            jitter_seed,
        })
    }

    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            user_count: self.user_count,
            order_count: self.order_count,
            ..SeedOptions::default()
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}
