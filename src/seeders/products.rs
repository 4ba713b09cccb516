use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set};

use super::References;
use crate::{
    assets::AssetFetcher,
    entity::{color_variation_images, color_variations, products, size_variations},
    error::SeedResult,
    fixtures::{ImageFixture, ProductFixture},
};

/// Rows written by [`seed_products`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductCounts {
    pub products: usize,
    pub color_variations: usize,
    pub images: usize,
    pub size_variations: usize,
}

/// Inserts each product with its color variations, their images, and one size
/// variation per (color variation, declared size) pair.
///
/// Category, color and size names must already be in `refs`. Images that
/// cannot be fetched are logged and skipped.
pub async fn seed_products<C: ConnectionTrait>(
    db: &C,
    fixtures: &[ProductFixture],
    refs: &References,
    fetcher: &AssetFetcher,
    available_quantity: i32,
) -> SeedResult<ProductCounts> {
    let mut counts = ProductCounts::default();

    for p in fixtures {
        let category_id = refs.category(&p.category_name)?;
        let slug = if p.name_with_slug.trim().is_empty() {
            slugify(&p.name)
        } else {
            p.name_with_slug.clone()
        };

        let product = products::ActiveModel {
            id: NotSet,
            category_id: Set(category_id),
            name: Set(p.name.clone()),
            slug: Set(slug),
            code: Set(p.code.clone()),
            price: Set(p.price),
            description: Set(p.description.clone()),
            made_country: Set(p.made_country.clone()),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
        counts.products += 1;

        for cv in &p.color_variations {
            let color_id = refs.color(&cv.color_name)?;
            let variation = color_variations::ActiveModel {
                id: NotSet,
                product_id: Set(product.id),
                color_id: Set(color_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await?;
            counts.color_variations += 1;

            for image in &cv.images {
                if create_image(db, fetcher, variation.id, image).await? {
                    counts.images += 1;
                }
            }

            for sv in &p.size_variations {
                let size_id = refs.size(&sv.size_name)?;
                size_variations::ActiveModel {
                    id: NotSet,
                    color_variation_id: Set(variation.id),
                    size_id: Set(size_id),
                    available_quantity: Set(available_quantity),
                    created_at: Set(Utc::now().into()),
                }
                .insert(db)
                .await?;
                counts.size_variations += 1;
            }
        }
        tracing::debug!(product = %product.name, id = product.id, "seeded product");
    }

    Ok(counts)
}

/// Returns whether an image row was written.
async fn create_image<C: ConnectionTrait>(
    db: &C,
    fetcher: &AssetFetcher,
    color_variation_id: i32,
    image: &ImageFixture,
) -> SeedResult<bool> {
    let bytes = match fetcher.fetch_bytes(&image.url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(url = %image.url, error = %err, "skipping image");
            return Ok(false);
        }
    };
    let file_name = fetcher
        .cache_path(&image.url)
        .ok()
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();

    color_variation_images::ActiveModel {
        id: NotSet,
        color_variation_id: Set(color_variation_id),
        file_name: Set(file_name),
        image: Set(bytes),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;
    Ok(true)
}

/// Lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Oxford Shirt", "oxford-shirt")]
    #[case("  Slim-fit  Chinos (Navy) ", "slim-fit-chinos-navy")]
    #[case("T-Shirt #2", "t-shirt-2")]
    #[case("***", "")]
    fn slugify_cases(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }
}
