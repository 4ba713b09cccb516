//! Downloads remote images into a local cache directory.

use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use thiserror::Error;
use tokio::{
    fs::{self, File},
    io::{AsyncReadExt, AsyncWriteExt},
};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("asset url {0:?} has no file name")]
    MissingFileName(String),

    #[error("asset io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("asset download failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetches assets by URL, keeping one file per distinct last path segment.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    cache_dir: PathBuf,
    client: Client,
}

impl AssetFetcher {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let cache_dir = cache_dir.into();
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self {
            cache_dir,
            client: Client::new(),
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Local path an asset URL is cached under.
    pub fn cache_path(&self, url: &str) -> Result<PathBuf, AssetError> {
        Ok(self.cache_dir.join(file_name(url)?))
    }

    /// Returns the cached file for `url`, downloading it first if absent.
    pub async fn fetch(&self, url: &str) -> Result<File, AssetError> {
        let path = self.cache_path(url)?;
        if fs::try_exists(&path).await? {
            tracing::debug!(url, path = %path.display(), "asset cache hit");
            return Ok(File::open(&path).await?);
        }

        self.download(url, &path).await?;
        println!("----> Downloaded {url}");
        Ok(File::open(&path).await?)
    }

    /// Reads the whole asset for `url` into memory.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let mut file = self.fetch(url).await?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).await?;
        Ok(bytes)
    }

    async fn download(&self, url: &str, path: &Path) -> Result<(), AssetError> {
        let partial = path.with_extension(partial_extension(path));
        let result = self.stream_to(url, &partial).await;
        if result.is_err() {
            let _ = fs::remove_file(&partial).await;
            return result;
        }
        fs::rename(&partial, path).await?;
        Ok(())
    }

    async fn stream_to(&self, url: &str, partial: &Path) -> Result<(), AssetError> {
        let mut response = self.client.get(url).send().await?.error_for_status()?;
        let mut file = File::create(partial).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
}

/// Last segment of the URL path, e.g. `a.jpg` for `https://host/img/a.jpg?w=1`.
fn file_name(url: &str) -> Result<String, AssetError> {
    let parsed = Url::parse(url).map_err(|e| AssetError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AssetError::MissingFileName(url.to_string()))
}

fn partial_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.part"),
        None => "part".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[rstest]
    #[case("https://example.com/images/shirt.jpg", "shirt.jpg")]
    #[case("https://example.com/a/b/c.png?width=200#top", "c.png")]
    #[case("http://cdn.example.com/only.gif", "only.gif")]
    fn file_name_is_last_path_segment(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(file_name(url).unwrap(), expected);
    }

    #[rstest]
    #[case("https://example.com/")]
    #[case("https://example.com/images/")]
    fn file_name_rejects_urls_without_one(#[case] url: &str) {
        assert!(matches!(file_name(url), Err(AssetError::MissingFileName(_))));
    }

    #[rstest]
    fn file_name_rejects_relative_urls() {
        assert!(matches!(
            file_name("images/shirt.jpg"),
            Err(AssetError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let mut server = mockito::Server::new_async().await;
        let body = b"\x89PNG fake image bytes".to_vec();
        let mock = server
            .mock("GET", "/images/red.png")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(body.clone())
            .expect(1)
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let fetcher = AssetFetcher::new(dir.path()).unwrap();
        let url = format!("{}/images/red.png", server.url());

        let first = fetcher.fetch_bytes(&url).await.unwrap();
        let second = fetcher.fetch_bytes(&url).await.unwrap();

        assert_eq!(first, body);
        assert_eq!(second, body);
        assert!(dir.path().join("red.png").exists());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn existing_file_skips_the_network() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cached.jpg"), b"local").unwrap();

        // Nothing listens here; any request would fail.
        let fetcher = AssetFetcher::new(dir.path()).unwrap();
        let bytes = fetcher
            .fetch_bytes("http://127.0.0.1:9/images/cached.jpg")
            .await
            .unwrap();

        assert_eq!(bytes, b"local");
    }

    #[tokio::test]
    async fn failed_download_leaves_no_cache_entry() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/images/missing.jpg")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let fetcher = AssetFetcher::new(dir.path()).unwrap();
        let url = format!("{}/images/missing.jpg", server.url());

        assert!(matches!(fetcher.fetch(&url).await, Err(AssetError::Http(_))));
        assert!(!dir.path().join("missing.jpg").exists());
        assert!(!dir.path().join("missing.jpg.part").exists());
    }

    #[tokio::test]
    async fn follows_redirects() {
        let mut server = mockito::Server::new_async().await;
        let target = format!("{}/storage/blue-shirt.jpg", server.url());
        let _redirect = server
            .mock("GET", "/images/blue.jpg")
            .with_status(302)
            .with_header("location", &target)
            .create_async()
            .await;
        let _image = server
            .mock("GET", "/storage/blue-shirt.jpg")
            .with_status(200)
            .with_body("blue")
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let fetcher = AssetFetcher::new(dir.path()).unwrap();
        let bytes = fetcher
            .fetch_bytes(&format!("{}/images/blue.jpg", server.url()))
            .await
            .unwrap();

        assert_eq!(bytes, b"blue");
        assert!(dir.path().join("blue.jpg").exists());
    }
}
