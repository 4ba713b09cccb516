use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};

use crate::config::AppConfig;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// The two databases a seed run writes to. The draft target mirrors the
/// primary schema and is reset together with it; records only go to primary.
#[derive(Debug, Clone)]
pub struct StorageTargets {
    pub primary: DatabaseConnection,
    pub draft: DatabaseConnection,
}

impl StorageTargets {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let primary = create_orm_conn(&config.database_url).await?;
        let draft = create_orm_conn(&config.draft_database_url).await?;
        tracing::debug!("connected to primary and draft databases");
        Ok(Self { primary, draft })
    }

    /// Targets paired with the name used in logs.
    pub fn named(&self) -> [(&'static str, &DatabaseConnection); 2] {
        [("primary", &self.primary), ("draft", &self.draft)]
    }
}
