use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set};

use crate::{entity::stores, error::SeedResult, fixtures::StoreFixture};

pub async fn seed_stores<C: ConnectionTrait>(db: &C, fixtures: &[StoreFixture]) -> SeedResult<usize> {
    for s in fixtures {
        stores::ActiveModel {
            id: NotSet,
            name: Set(s.name.clone()),
            phone: Set(s.phone.clone()),
            email: Set(s.email.clone()),
            country: Set(s.country.clone()),
            zip: Set(s.zip.clone()),
            city: Set(s.city.clone()),
            region: Set(s.region.clone()),
            address: Set(s.address.clone()),
            latitude: Set(s.latitude),
            longitude: Set(s.longitude),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
    }
    Ok(fixtures.len())
}
