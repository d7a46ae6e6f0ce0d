//! State of the portfolio page itself

use crate::content::{ContentLoader, PortfolioData};
use crate::error::LoadError;

/// Reason shown to the visitor when the aggregate could not be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load portfolio data.";

/// What the page currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PageState {
    #[default]
    Loading,
    Loaded(PortfolioData),
    Failed(String),
}

impl PageState {
    /// Run one aggregate load and turn the outcome into a page state
    pub async fn load(loader: &ContentLoader) -> Self {
        Self::from_result(loader.load().await)
    }

    /// Convert a load result, logging the failure cause
    pub fn from_result(result: Result<PortfolioData, LoadError>) -> Self {
        match result {
            Ok(data) => PageState::Loaded(data),
            Err(e) => {
                tracing::error!("Error loading data: {}", e.cause);
                PageState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn data(&self) -> Option<&PortfolioData> {
        match self {
            PageState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PageState::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadCause;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_loading() {
        assert_eq!(PageState::default(), PageState::Loading);
        assert!(PageState::default().data().is_none());
    }

    #[test]
    fn test_from_ok() {
        let state = PageState::from_result(Ok(PortfolioData::default()));
        assert!(state.data().is_some());
        assert!(!state.is_failed());
    }

    #[test]
    fn test_from_err() {
        let err = LoadError::from(LoadCause::Read {
            path: PathBuf::from("data/career.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        let state = PageState::from_result(Err(err));
        assert_eq!(state, PageState::Failed(LOAD_FAILED_MESSAGE.to_string()));
        assert!(state.is_failed());
    }

    #[tokio::test]
    async fn test_load_from_missing_dir_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let loader = ContentLoader::from_dir(dir.path().join("nope"));
        assert!(PageState::load(&loader).await.is_failed());
    }
}
