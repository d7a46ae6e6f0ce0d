//! Content loader - reads the three JSON collections from the data directory

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::{CareerItem, PortfolioData, Project, SkillsData};
use crate::error::{LoadCause, LoadError};
use crate::Portfolio;

pub const SKILLS_FILE: &str = "skills.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const CAREER_FILE: &str = "career.json";

/// Loads the portfolio aggregate from `<data_dir>/{skills,projects,career}.json`
pub struct ContentLoader {
    data_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader for a portfolio site
    pub fn new(portfolio: &Portfolio) -> Self {
        Self::from_dir(&portfolio.data_dir)
    }

    /// Create a loader reading from an explicit directory
    pub fn from_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory the collections are read from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read all three collections concurrently
    ///
    /// Any read or parse failure fails the whole load; there are no
    /// partial results.
    pub async fn load(&self) -> Result<PortfolioData, LoadError> {
        let (skills, projects, career) = tokio::try_join!(
            read_json::<SkillsData>(self.data_dir.join(SKILLS_FILE)),
            read_json::<Vec<Project>>(self.data_dir.join(PROJECTS_FILE)),
            read_json::<Vec<CareerItem>>(self.data_dir.join(CAREER_FILE)),
        )?;

        tracing::debug!(
            "Loaded {} projects and {} career items from {:?}",
            projects.len(),
            career.len(),
            self.data_dir
        );

        Ok(PortfolioData {
            skills,
            projects,
            career,
        })
    }

    /// Synchronous variant of [`ContentLoader::load`] for CLI commands
    pub fn load_blocking(&self) -> Result<PortfolioData, LoadError> {
        let skills = read_json_blocking(&self.data_dir.join(SKILLS_FILE))?;
        let projects = read_json_blocking(&self.data_dir.join(PROJECTS_FILE))?;
        let career = read_json_blocking(&self.data_dir.join(CAREER_FILE))?;

        Ok(PortfolioData {
            skills,
            projects,
            career,
        })
    }
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, LoadCause> {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => parse_json(path, &content),
        Err(source) => Err(LoadCause::Read { path, source }),
    }
}

fn read_json_blocking<T: DeserializeOwned>(path: &Path) -> Result<T, LoadCause> {
    match fs::read_to_string(path) {
        Ok(content) => parse_json(path.to_path_buf(), &content),
        Err(source) => Err(LoadCause::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_json<T: DeserializeOwned>(path: PathBuf, content: &str) -> Result<T, LoadCause> {
    serde_json::from_str(content).map_err(|source| LoadCause::Parse { path, source })
}
