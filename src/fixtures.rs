//! Fixture loading.
//!
//! Fixtures are YAML documents with top-level `categories`, `colors`,
//! `sizes`, `products` and `stores` sequences. Every file matching the
//! configured glob is parsed and its sections appended in path order.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid fixture pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("no fixture files match {0:?}")]
    NoFiles(String),

    #[error("cannot list fixture files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub categories: Vec<CategoryFixture>,
    pub colors: Vec<ColorFixture>,
    pub sizes: Vec<SizeFixture>,
    pub products: Vec<ProductFixture>,
    pub stores: Vec<StoreFixture>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryFixture {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorFixture {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizeFixture {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductFixture {
    #[serde(alias = "categoryname")]
    pub category_name: String,
    pub name: String,
    #[serde(alias = "namewithslug")]
    pub name_with_slug: String,
    pub code: String,
    pub price: f64,
    pub description: String,
    #[serde(alias = "madecountry")]
    pub made_country: String,
    #[serde(alias = "colorvariations")]
    pub color_variations: Vec<ColorVariationFixture>,
    #[serde(alias = "sizevariations")]
    pub size_variations: Vec<SizeVariationFixture>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorVariationFixture {
    #[serde(alias = "colorname")]
    pub color_name: String,
    pub images: Vec<ImageFixture>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageFixture {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizeVariationFixture {
    #[serde(alias = "sizename")]
    pub size_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreFixture {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub zip: String,
    pub city: String,
    pub region: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Fixtures {
    /// Loads and merges every file matching `pattern`.
    pub fn load(pattern: &str) -> Result<Self, FixtureError> {
        let paths = glob::glob(pattern).map_err(|source| FixtureError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let mut files = paths.collect::<Result<Vec<PathBuf>, _>>()?;
        if files.is_empty() {
            return Err(FixtureError::NoFiles(pattern.to_string()));
        }
        files.sort();

        let mut fixtures = Fixtures::default();
        for path in &files {
            let doc = Self::load_file(path)?;
            tracing::debug!(path = %path.display(), "loaded fixture file");
            fixtures.merge(doc);
        }
        Ok(fixtures)
    }

    /// Parses a single fixture file.
    pub fn load_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Fixtures::default());
        }
        serde_yaml::from_str(content)
    }

    /// Appends every section of `other` after this one's.
    pub fn merge(&mut self, other: Fixtures) {
        self.categories.extend(other.categories);
        self.colors.extend(other.colors);
        self.sizes.extend(other.sizes);
        self.products.extend(other.products);
        self.stores.extend(other.stores);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    const PRODUCTS: &str = r#"
products:
  - category_name: Shirts
    name: Oxford Shirt
    name_with_slug: oxford-shirt
    code: OX-1
    price: 39.5
    description: Button down
    made_country: Japan
    color_variations:
      - color_name: Red
        images:
          - url: https://example.com/images/oxford-red.jpg
    size_variations:
      - size_name: M
      - size_name: L
"#;

    #[rstest]
    fn parses_nested_product() {
        let fixtures = Fixtures::from_yaml_str(PRODUCTS).unwrap();
        assert_eq!(fixtures.products.len(), 1);

        let product = &fixtures.products[0];
        assert_eq!(product.category_name, "Shirts");
        assert_eq!(product.price, 39.5);
        assert_eq!(product.color_variations[0].color_name, "Red");
        assert_eq!(
            product.color_variations[0].images[0].url,
            "https://example.com/images/oxford-red.jpg"
        );
        assert_eq!(product.size_variations.len(), 2);
        assert!(fixtures.categories.is_empty());
    }

    #[rstest]
    fn accepts_concatenated_keys() {
        let content = r#"
products:
  - categoryname: Shirts
    name: Tee
    namewithslug: tee
    madecountry: Portugal
    colorvariations:
      - colorname: Blue
    sizevariations:
      - sizename: S
"#;
        let fixtures = Fixtures::from_yaml_str(content).unwrap();
        let product = &fixtures.products[0];
        assert_eq!(product.category_name, "Shirts");
        assert_eq!(product.name_with_slug, "tee");
        assert_eq!(product.made_country, "Portugal");
        assert_eq!(product.color_variations[0].color_name, "Blue");
        assert!(product.color_variations[0].images.is_empty());
        assert_eq!(product.size_variations[0].size_name, "S");
    }

    #[rstest]
    #[case("")]
    #[case("  \n\n")]
    fn empty_document_is_empty_fixtures(#[case] content: &str) {
        assert_eq!(Fixtures::from_yaml_str(content).unwrap(), Fixtures::default());
    }

    #[rstest]
    fn load_merges_files_in_path_order() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("b_catalog.yml"),
            "categories:\n  - name: Pants\ncolors:\n  - name: Red\n    code: '#FF0000'\n",
        )
        .unwrap();
        fs::write(dir.path().join("a_catalog.yml"), "categories:\n  - name: Shirts\n").unwrap();
        fs::write(dir.path().join("ignored.txt"), "not yaml: [").unwrap();

        let pattern = format!("{}/*.yml", dir.path().display());
        let fixtures = Fixtures::load(&pattern).unwrap();

        let names: Vec<_> = fixtures.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Shirts", "Pants"]);
        assert_eq!(fixtures.colors[0].code, "#FF0000");
    }

    #[rstest]
    fn malformed_file_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "categories: [name: ").unwrap();

        let pattern = format!("{}/*.yml", dir.path().display());
        match Fixtures::load(&pattern) {
            Err(FixtureError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[rstest]
    fn no_matching_files_is_an_error() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/*.yml", dir.path().display());
        assert!(matches!(
            Fixtures::load(&pattern),
            Err(FixtureError::NoFiles(_))
        ));
    }
}
