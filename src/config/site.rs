//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub author: String,
    pub description: String,
    pub language: String,

    // URL
    pub root: String,

    // About section
    #[serde(default)]
    pub about: AboutConfig,

    // Social links
    #[serde(default)]
    pub social: SocialConfig,

    // Directory
    pub data_dir: String,
    pub detail_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: String::new(),
            author: "John Doe".to_string(),
            description: String::new(),
            language: "en".to_string(),

            root: "/".to_string(),

            about: AboutConfig::default(),
            social: SocialConfig::default(),

            data_dir: "data".to_string(),
            detail_dir: "data/projects".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            server: ServerConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// About Me section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub paragraphs: Vec<String>,
    pub location: String,
    pub education: String,
}

/// Social links shown in the hero and footer. Empty entries are not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub github: String,
    pub twitter: String,
    pub website: String,
    pub email: String,
}

/// Defaults for `serve`, overridable from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
