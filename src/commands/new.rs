//! Scaffold a new project detail document

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::detail::is_valid_slug;
use crate::Portfolio;

/// Create `<detail_dir>/<slug>.md` for a project title
///
/// The slug comes from `path` when given, otherwise from the title.
pub fn create_detail(portfolio: &Portfolio, title: &str, path: Option<&str>) -> Result<PathBuf> {
    let slug = match path {
        Some(p) => p.trim_end_matches(".md").to_string(),
        None => slug::slugify(title),
    };

    if !is_valid_slug(&slug) {
        anyhow::bail!("Invalid detail name: {:?}", slug);
    }

    fs::create_dir_all(&portfolio.detail_dir)?;
    let file_path = portfolio.detail_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "# {}\n\nWhat the project does and why it exists.\n\n## Features\n\n- \n",
        title
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);
    println!(
        "Reference it from projects.json with \"detailFile\": \"{}.md\"",
        slug
    );

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn portfolio(dir: &TempDir) -> Portfolio {
        Portfolio::with_config(dir.path(), SiteConfig::default())
    }

    #[test]
    fn test_create_detail_slugifies_title() {
        let dir = TempDir::new().unwrap();
        let portfolio = portfolio(&dir);

        let path = create_detail(&portfolio, "My Secure API!", None).unwrap();
        assert_eq!(path, portfolio.detail_dir.join("my-secure-api.md"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# My Secure API!\n"));
    }

    #[test]
    fn test_create_detail_with_path() {
        let dir = TempDir::new().unwrap();
        let portfolio = portfolio(&dir);

        let path = create_detail(&portfolio, "Whatever", Some("custom.md")).unwrap();
        assert_eq!(path, portfolio.detail_dir.join("custom.md"));
    }

    #[test]
    fn test_create_detail_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let portfolio = portfolio(&dir);

        create_detail(&portfolio, "Twice", None).unwrap();
        assert!(create_detail(&portfolio, "Twice", None).is_err());
    }

    #[test]
    fn test_create_detail_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let portfolio = portfolio(&dir);

        assert!(create_detail(&portfolio, "x", Some("../escape")).is_err());
    }
}
