//! Drops and recreates the seeded tables on both storage targets.

use sea_orm::{
    ConnectionTrait, DatabaseBackend, EntityTrait, Schema,
    sea_query::{Table, TableCreateStatement, TableDropStatement},
};

use crate::{db::StorageTargets, entity, error::SeedResult};

/// A table that takes part in the reset, built from its entity definition.
#[derive(Clone, Copy)]
pub struct ResetTable {
    pub name: &'static str,
    create: fn(&Schema) -> TableCreateStatement,
    drop: fn() -> TableDropStatement,
}

impl ResetTable {
    fn of<E: EntityTrait + Default>(name: &'static str) -> Self {
        Self {
            name,
            create: create_statement::<E>,
            drop: drop_statement::<E>,
        }
    }
}

fn create_statement<E: EntityTrait + Default>(schema: &Schema) -> TableCreateStatement {
    schema.create_table_from_entity(E::default())
}

fn drop_statement<E: EntityTrait + Default>() -> TableDropStatement {
    Table::drop().table(E::default()).if_exists().to_owned()
}

/// Seeded tables in dependency order: every table only references tables
/// listed before it.
pub fn tables() -> Vec<ResetTable> {
    vec![
        ResetTable::of::<entity::Users>("users"),
        ResetTable::of::<entity::Addresses>("addresses"),
        ResetTable::of::<entity::Categories>("categories"),
        ResetTable::of::<entity::Colors>("colors"),
        ResetTable::of::<entity::Sizes>("sizes"),
        ResetTable::of::<entity::Products>("products"),
        ResetTable::of::<entity::ColorVariations>("color_variations"),
        ResetTable::of::<entity::ColorVariationImages>("color_variation_images"),
        ResetTable::of::<entity::SizeVariations>("size_variations"),
        ResetTable::of::<entity::Stores>("stores"),
        ResetTable::of::<entity::Orders>("orders"),
        ResetTable::of::<entity::OrderItems>("order_items"),
    ]
}

/// Resets the primary target, then the draft target.
pub async fn reset_schema(targets: &StorageTargets) -> SeedResult<()> {
    for (label, conn) in targets.named() {
        reset_target(conn).await?;
        tracing::info!(target_db = label, "schema reset");
    }
    Ok(())
}

/// Drops every table (dependents first) and recreates them in list order.
pub async fn reset_target<C: ConnectionTrait>(conn: &C) -> SeedResult<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let tables = tables();

    for table in tables.iter().rev() {
        let mut stmt = (table.drop)();
        if backend == DatabaseBackend::Postgres {
            stmt.cascade();
        }
        conn.execute(backend.build(&stmt)).await?;
        tracing::debug!(table = table.name, "dropped table");
    }

    for table in &tables {
        conn.execute(backend.build(&(table.create)(&schema))).await?;
        tracing::debug!(table = table.name, "created table");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityName;

    #[test]
    fn names_match_entity_tables() {
        let entity_names = [
            entity::Users.table_name(),
            entity::Addresses.table_name(),
            entity::Categories.table_name(),
            entity::Colors.table_name(),
            entity::Sizes.table_name(),
            entity::Products.table_name(),
            entity::ColorVariations.table_name(),
            entity::ColorVariationImages.table_name(),
            entity::SizeVariations.table_name(),
            entity::Stores.table_name(),
            entity::Orders.table_name(),
            entity::OrderItems.table_name(),
        ];
        let names: Vec<_> = tables().iter().map(|t| t.name).collect();
        assert_eq!(names, entity_names);
    }
}
