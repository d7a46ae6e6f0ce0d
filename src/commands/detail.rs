//! Fetch and render one project detail document

use anyhow::Result;

use crate::content::{DetailSource, FsDetailSource, HttpDetailSource, MarkdownRenderer};
use crate::view::{DetailPanel, DetailState};
use crate::Portfolio;

/// Print the rendered detail for `slug`
///
/// Reads from the local detail directory, or from a running portfolio
/// server when `remote` is given.
pub async fn run(portfolio: &Portfolio, slug: &str, remote: Option<&str>) -> Result<()> {
    let html = match remote {
        Some(url) => {
            tracing::debug!("Fetching {:?} from {}", slug, url);
            render(&HttpDetailSource::new(url), slug).await?
        }
        None => render(&FsDetailSource::new(portfolio), slug).await?,
    };

    println!("{}", html);
    Ok(())
}

/// Load `slug` through the detail panel and return its HTML
pub async fn render(source: &dyn DetailSource, slug: &str) -> Result<String> {
    let renderer = MarkdownRenderer::new();
    let mut panel = DetailPanel::new();

    match panel.load(slug, source, &renderer).await {
        DetailState::Loaded { html, .. } => Ok(html.clone()),
        DetailState::NotFound { .. } => anyhow::bail!("Project not found: {}", slug),
        DetailState::Error { reason, .. } => {
            anyhow::bail!("Failed to load project details: {}", reason)
        }
        state => anyhow::bail!("Unexpected detail state: {:?}", state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_render_local_detail() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("demo.md"), "# Demo\n\n- one\n- two").unwrap();
        let source = FsDetailSource::from_dir(dir.path());

        let html = render(&source, "demo").await.unwrap();
        assert_eq!(html, "<h1>Demo</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
    }

    #[tokio::test]
    async fn test_render_missing_detail() {
        let dir = TempDir::new().unwrap();
        let source = FsDetailSource::from_dir(dir.path());

        let err = render(&source, "ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Project not found: ghost");
    }
}
