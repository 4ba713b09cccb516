use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::{
    entity::{
        addresses::ActiveModel as AddressActive,
        users::{self, ActiveModel as UserActive, Gender, Model as UserModel},
        Users,
    },
    error::SeedResult,
    random::SeedRng,
};

/// Inserts `count` users with alternating gender and back-dated creation times.
pub async fn seed_users<C: ConnectionTrait>(
    db: &C,
    rng: &mut SeedRng,
    count: usize,
) -> SeedResult<Vec<UserModel>> {
    let now = Utc::now();
    let mut users = Vec::with_capacity(count);
    for i in 0..count {
        let email = rng.email();
        let name = rng.name();
        let created_at = rng.backdated(now);
        let user = create_backdated(db, email, name, Gender::for_index(i), created_at).await?;
        users.push(user);
    }
    tracing::debug!(count = users.len(), "seeded users");
    Ok(users)
}

/// Creates the user with its final `created_at` in one insert.
async fn create_backdated<C: ConnectionTrait>(
    db: &C,
    email: String,
    name: String,
    gender: Gender,
    created_at: DateTime<Utc>,
) -> SeedResult<UserModel> {
    let user = UserActive {
        id: NotSet,
        email: Set(email),
        name: Set(name),
        gender: Set(gender),
        created_at: Set(created_at.into()),
    }
    .insert(db)
    .await?;
    Ok(user)
}

/// Gives every existing user one address under their own name.
pub async fn seed_addresses<C: ConnectionTrait>(db: &C, rng: &mut SeedRng) -> SeedResult<usize> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .all(db)
        .await?;

    for user in &users {
        let phone = rng.phone();
        let city = rng.city();
        let street = rng.street_address();
        let post_code = rng.post_code();
        AddressActive {
            id: NotSet,
            user_id: Set(user.id),
            contact_name: Set(user.name.clone()),
            phone: Set(phone),
            address1: Set(format!("{street}, {city}, {post_code}")),
            city: Set(city),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
    }
    tracing::debug!(count = users.len(), "seeded addresses");
    Ok(users.len())
}
