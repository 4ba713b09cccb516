use thiserror::Error;

use crate::fixtures::FixtureError;

/// Errors that abort a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("ORM error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("can't find category with name = {0:?}")]
    UnknownCategory(String),

    #[error("can't find color with name = {0:?}")]
    UnknownColor(String),

    #[error("can't find size with name = {0:?}")]
    UnknownSize(String),

    #[error("user {user_id} has no address")]
    MissingAddress { user_id: i32 },

    #[error("size variation {size_variation_id} has no color variation")]
    MissingColorVariation { size_variation_id: i32 },

    #[error("color variation {color_variation_id} has no product")]
    MissingProduct { color_variation_id: i32 },

    #[error("no size variations to build order items from")]
    NoSizeVariations,
}

pub type SeedResult<T> = Result<T, SeedError>;
