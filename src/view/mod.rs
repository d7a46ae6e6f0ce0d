//! View state - what the page and the detail panel currently show

mod detail;
mod glyph;
mod page;

pub use detail::{DetailEvent, DetailPanel, DetailRequest, DetailState};
pub use glyph::Glyph;
pub use page::{PageState, LOAD_FAILED_MESSAGE};
