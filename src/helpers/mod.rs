//! Helper functions shared by the Markdown renderer, templates and commands

mod html;
mod url;

pub use html::*;
pub use url::*;
