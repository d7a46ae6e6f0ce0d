//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Portfolio;

/// Remove the generated site
pub fn run(portfolio: &Portfolio) -> Result<()> {
    if portfolio.public_dir.exists() {
        fs::remove_dir_all(&portfolio.public_dir)?;
        tracing::info!("Deleted: {:?}", portfolio.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", portfolio.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public_dir() {
        let dir = TempDir::new().unwrap();
        let portfolio = Portfolio::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(portfolio.public_dir.join("api")).unwrap();
        fs::write(portfolio.public_dir.join("index.html"), "<html></html>").unwrap();

        run(&portfolio).unwrap();
        assert!(!portfolio.public_dir.exists());

        // Cleaning twice is fine
        run(&portfolio).unwrap();
    }
}
