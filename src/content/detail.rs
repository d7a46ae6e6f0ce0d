//! Project detail documents
//!
//! A project may point at a Markdown document through its `detailFile`.
//! Sources fetch the raw text for a detail identifier and report a missing
//! document separately from a failed fetch.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::DetailError;
use crate::helpers::encode_segment;
use crate::Portfolio;

/// Where detail documents come from
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Fetch the raw Markdown for `slug`
    async fn fetch(&self, slug: &str) -> Result<String, DetailError>;
}

/// Reads `<detail_dir>/<slug>.md`
#[derive(Debug, Clone)]
pub struct FsDetailSource {
    dir: PathBuf,
}

impl FsDetailSource {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self::from_dir(&portfolio.detail_dir)
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for `slug`, `None` if the slug cannot name a file here
    pub fn path_for(&self, slug: &str) -> Option<PathBuf> {
        if !is_valid_slug(slug) {
            return None;
        }
        Some(self.dir.join(format!("{}.md", slug)))
    }
}

#[async_trait]
impl DetailSource for FsDetailSource {
    async fn fetch(&self, slug: &str) -> Result<String, DetailError> {
        let path = self
            .path_for(slug)
            .ok_or_else(|| DetailError::NotFound(slug.to_string()))?;

        if !tokio::fs::try_exists(&path).await? {
            return Err(DetailError::NotFound(slug.to_string()));
        }

        tracing::debug!("Reading detail document {:?}", path);
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// Body of `GET /api/project/:slug`
#[derive(Debug, Deserialize)]
struct DetailResponse {
    content: String,
}

/// Fetches detail documents from a running portfolio server
#[derive(Debug, Clone)]
pub struct HttpDetailSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDetailSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, slug: &str) -> String {
        format!("{}/api/project/{}", self.base_url, encode_segment(slug))
    }
}

#[async_trait]
impl DetailSource for HttpDetailSource {
    async fn fetch(&self, slug: &str) -> Result<String, DetailError> {
        if !is_valid_slug(slug) {
            return Err(DetailError::NotFound(slug.to_string()));
        }

        let response = self.client.get(self.url_for(slug)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DetailError::NotFound(slug.to_string()));
        }
        if !status.is_success() {
            return Err(DetailError::Transport(format!(
                "unexpected status {} for {}",
                status, slug
            )));
        }

        let body: DetailResponse = response.json().await?;
        Ok(body.content)
    }
}

/// Slugs address a single file: no separators, no parent references
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && !slug.contains("..")
        && !slug.contains('/')
        && !slug.contains('\\')
        && !slug.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source_with(files: &[(&str, &str)]) -> (TempDir, FsDetailSource) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let source = FsDetailSource::from_dir(dir.path());
        (dir, source)
    }

    #[tokio::test]
    async fn test_fetch_existing_document() {
        let (_dir, source) = source_with(&[("secure-api.md", "# Secure API\n")]);
        let content = source.fetch("secure-api").await.unwrap();
        assert_eq!(content, "# Secure API\n");
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let (_dir, source) = source_with(&[]);
        let err = source.fetch("nope").await.unwrap_err();
        assert!(matches!(err, DetailError::NotFound(slug) if slug == "nope"));
    }

    #[tokio::test]
    async fn test_traversal_is_not_found() {
        let (_dir, source) = source_with(&[("a.md", "a")]);
        for slug in ["../a", "..", "", "sub/a", "a\\b"] {
            let err = source.fetch(slug).await.unwrap_err();
            assert!(matches!(err, DetailError::NotFound(_)), "slug {:?}", slug);
        }
    }

    #[tokio::test]
    async fn test_unreadable_document_is_transport_error() {
        let (dir, source) = source_with(&[]);
        fs::create_dir(dir.path().join("broken.md")).unwrap();
        let err = source.fetch("broken").await.unwrap_err();
        assert!(matches!(err, DetailError::Transport(_)));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("secure-api"));
        assert!(is_valid_slug("v1.2-notes"));
        assert!(!is_valid_slug("../etc/passwd"));
        assert!(!is_valid_slug("a/b"));
        assert!(!is_valid_slug(""));
    }

    #[tokio::test]
    async fn test_http_source_unreachable_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpDetailSource::new(&format!("http://{}", addr));
        let err = source.fetch("secure-api").await.unwrap_err();
        assert!(matches!(err, DetailError::Transport(_)));
    }
}
