use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set};

use super::References;
use crate::{
    entity::{categories, colors, sizes},
    error::SeedResult,
    fixtures::{CategoryFixture, ColorFixture, SizeFixture},
};

pub async fn seed_categories<C: ConnectionTrait>(
    db: &C,
    fixtures: &[CategoryFixture],
    refs: &mut References,
) -> SeedResult<usize> {
    for fixture in fixtures {
        let category = categories::ActiveModel {
            id: NotSet,
            name: Set(fixture.name.clone()),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
        refs.add_category(&category.name, category.id);
    }
    Ok(fixtures.len())
}

pub async fn seed_colors<C: ConnectionTrait>(
    db: &C,
    fixtures: &[ColorFixture],
    refs: &mut References,
) -> SeedResult<usize> {
    for fixture in fixtures {
        let color = colors::ActiveModel {
            id: NotSet,
            name: Set(fixture.name.clone()),
            code: Set(fixture.code.clone()),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
        refs.add_color(&color.name, color.id);
    }
    Ok(fixtures.len())
}

pub async fn seed_sizes<C: ConnectionTrait>(
    db: &C,
    fixtures: &[SizeFixture],
    refs: &mut References,
) -> SeedResult<usize> {
    for fixture in fixtures {
        let size = sizes::ActiveModel {
            id: NotSet,
            name: Set(fixture.name.clone()),
            code: Set(fixture.code.clone()),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
        refs.add_size(&size.name, size.id);
    }
    Ok(fixtures.len())
}
