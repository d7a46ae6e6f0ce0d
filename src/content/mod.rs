//! Content module - portfolio data, detail documents and Markdown rendering

pub mod detail;
pub mod loader;
mod markdown;
mod model;

pub use detail::{DetailSource, FsDetailSource, HttpDetailSource};
pub use loader::ContentLoader;
pub use markdown::{MarkdownRenderer, CONVERSION_FAILED_PLACEHOLDER, NO_CONTENT_PLACEHOLDER};
pub use model::{CareerItem, Certification, PortfolioData, Project, Skill, SkillsData};
