use ecommerce_seeder::{
    assets::AssetFetcher,
    config::AppConfig,
    db::StorageTargets,
    fixtures::Fixtures,
    init_tracing,
    random::SeedRng,
    schema::reset_schema,
    seeders,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let fixtures = Fixtures::load(&config.seeds_glob)?;
    tracing::info!(
        pattern = %config.seeds_glob,
        categories = fixtures.categories.len(),
        products = fixtures.products.len(),
        stores = fixtures.stores.len(),
        "fixtures loaded"
    );

    let targets = StorageTargets::connect(&config).await?;
    reset_schema(&targets).await?;

    let fetcher = AssetFetcher::new(&config.asset_cache_dir)?;
    tracing::debug!(cache_dir = %fetcher.cache_dir().display(), "asset cache ready");

    let mut rng = SeedRng::new(config.faker_seed, config.jitter_seed);
    seeders::run(
        &targets.primary,
        &fixtures,
        &fetcher,
        &mut rng,
        &config.seed_options(),
    )
    .await?;

    Ok(())
}
