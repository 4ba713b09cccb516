use ecommerce_seeder::{config::AppConfig, db::StorageTargets, init_tracing, schema::reset_schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;
    let targets = StorageTargets::connect(&config).await?;
    reset_schema(&targets).await?;
    println!("Tables reset");
    Ok(())
}
