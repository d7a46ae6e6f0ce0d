//! Render a Markdown document to HTML

use anyhow::Result;
use std::io::Read;
use std::path::Path;

use crate::content::MarkdownRenderer;

/// Render `file`, or standard input when no file is given
pub fn run(file: Option<&Path>) -> Result<()> {
    let markdown = read_input(file)?;
    println!("{}", MarkdownRenderer::new().render(&markdown));
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "# Title").unwrap();

        let markdown = read_input(Some(file.path())).unwrap();
        assert_eq!(MarkdownRenderer::new().render(&markdown), "<h1>Title</h1>");
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input(Some(Path::new("/nonexistent/doc.md"))).is_err());
    }
}
