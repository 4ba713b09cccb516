pub mod assets;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod fixtures;
pub mod random;
pub mod schema;
pub mod seeders;

/// Installs the fmt subscriber used by both binaries.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecommerce_seeder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
