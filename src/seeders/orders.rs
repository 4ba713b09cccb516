use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, EntityTrait, LoaderTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    entity::{
        Addresses, ColorVariations, Products, SizeVariations, Users, addresses,
        color_variations, order_items, orders, size_variations, users,
    },
    error::{SeedError, SeedResult},
    random::SeedRng,
};

/// Item quantity for order `i` is `QUANTITIES[i % 5]`.
pub const QUANTITIES: [i32; 5] = [1, 2, 3, 4, 5];

/// Discount rate (percent) for order `i` is `DISCOUNT_RATES[i % 6]`.
pub const DISCOUNT_RATES: [i32; 6] = [0, 5, 10, 15, 20, 25];

/// Creates one single-item order for each of the first `limit` users.
///
/// Items cycle through every size variation in id order; each order is dated
/// up to a day after its user. Returns `(orders, order_items)` written.
pub async fn seed_orders<C: ConnectionTrait>(
    db: &C,
    rng: &mut SeedRng,
    limit: usize,
) -> SeedResult<(usize, usize)> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .limit(limit as u64)
        .all(db)
        .await?;
    if users.is_empty() {
        return Ok((0, 0));
    }
    let addresses = users
        .load_many(
            Addresses::find().order_by_asc(addresses::Column::Id),
            db,
        )
        .await?;

    let variations = SizeVariations::find()
        .order_by_asc(size_variations::Column::Id)
        .all(db)
        .await?;
    if variations.is_empty() {
        return Err(SeedError::NoSizeVariations);
    }
    let prices = variation_prices(db, &variations).await?;

    let mut items = 0;
    for (i, (user, user_addresses)) in users.iter().zip(&addresses).enumerate() {
        let address = user_addresses
            .first()
            .ok_or(SeedError::MissingAddress { user_id: user.id })?;
        let created_at = rng.hours_after(user.created_at.with_timezone(&Utc));

        let order = orders::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            shipping_address_id: Set(address.id),
            billing_address_id: Set(address.id),
            created_at: Set(created_at.into()),
        }
        .insert(db)
        .await?;

        let slot = i % variations.len();
        order_items::ActiveModel {
            id: NotSet,
            order_id: Set(order.id),
            size_variation_id: Set(variations[slot].id),
            quantity: Set(QUANTITIES[i % QUANTITIES.len()]),
            price: Set(prices[slot]),
            discount_rate: Set(DISCOUNT_RATES[i % DISCOUNT_RATES.len()]),
            created_at: Set(created_at.into()),
        }
        .insert(db)
        .await?;
        items += 1;
    }

    tracing::debug!(orders = users.len(), items, "seeded orders");
    Ok((users.len(), items))
}

/// Price of the product owning each size variation, following
/// size variation -> color variation -> product.
async fn variation_prices<C: ConnectionTrait>(
    db: &C,
    variations: &[size_variations::Model],
) -> SeedResult<Vec<f64>> {
    let color_variations = variations.to_vec().load_one(ColorVariations, db).await?;
    let color_variations = variations
        .iter()
        .zip(color_variations)
        .map(|(sv, cv)| {
            cv.ok_or(SeedError::MissingColorVariation {
                size_variation_id: sv.id,
            })
        })
        .collect::<SeedResult<Vec<color_variations::Model>>>()?;

    let products = color_variations.load_one(Products, db).await?;
    color_variations
        .iter()
        .zip(products)
        .map(|(cv, product)| {
            product
                .map(|p| p.price)
                .ok_or(SeedError::MissingProduct {
                    color_variation_id: cv.id,
                })
        })
        .collect()
}
