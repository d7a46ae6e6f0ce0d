//! Built-in page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::view::Glyph;

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Disable autoescaping: the generator escapes content fields itself and
        // rendered Markdown, glyphs and URLs must pass through untouched
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("portfolio/layout.html")),
            ("index.html", include_str!("portfolio/index.html")),
            ("loading.html", include_str!("portfolio/loading.html")),
            ("error.html", include_str!("portfolio/error.html")),
            ("detail.html", include_str!("portfolio/detail.html")),
            // Partials
            (
                "partials/style.html",
                include_str!("portfolio/partials/style.html"),
            ),
            ("partials/nav.html", include_str!("portfolio/partials/nav.html")),
            (
                "partials/social.html",
                include_str!("portfolio/partials/social.html"),
            ),
            (
                "partials/skills.html",
                include_str!("portfolio/partials/skills.html"),
            ),
            (
                "partials/projects.html",
                include_str!("portfolio/partials/projects.html"),
            ),
            (
                "partials/career.html",
                include_str!("portfolio/partials/career.html"),
            ),
            (
                "partials/footer.html",
                include_str!("portfolio/partials/footer.html"),
            ),
            (
                "partials/script.html",
                include_str!("portfolio/partials/script.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("glyph", glyph_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: icon identifier to inline SVG
fn glyph_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = tera::try_get_value!("glyph", "value", String, value);
    Ok(tera::Value::String(Glyph::from_name(&name).svg()))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };

    Ok(tera::Value::String(crate::helpers::truncate(
        &s,
        length,
        Some("…"),
    )))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub tagline: String,
    pub author: String,
    pub description: String,
    pub language: String,
    pub root: String,
    pub about: AboutData,
    pub social: Vec<SocialLink>,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutData {
    pub paragraphs: Vec<String>,
    pub location: String,
    pub education: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroupData {
    pub id: String,
    pub title: String,
    pub skills: Vec<SkillData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillData {
    pub name: String,
    pub icon: String,
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationData {
    pub name: String,
    pub icon: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub detail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerData {
    pub date: String,
    pub title: String,
    pub description: String,
    /// `left` for even positions, `right` for odd ones
    pub side: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FloatingGlyph {
    pub icon: String,
    pub left: u32,
    pub top: u32,
    pub delay: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailData {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    /// One of `idle`, `loading`, `loaded`, `not-found`, `error`
    pub status: String,
    pub html: String,
    pub message: String,
    pub retry_url: String,
}
