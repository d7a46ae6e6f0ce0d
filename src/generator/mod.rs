//! Generator module - renders the portfolio page and detail fragments
//!
//! The same rendering is used by the server (per request) and by the static
//! generator (written to the public directory).

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{
    DetailSource, MarkdownRenderer, PortfolioData, Project, NO_CONTENT_PLACEHOLDER,
};
use crate::error::DetailError;
use crate::helpers::{
    encode_segment, html_escape as esc, is_external, level_percent, mail_href, url_for,
};
use crate::templates::{
    AboutData, CareerData, CertificationData, DetailData, FloatingGlyph, ProjectData,
    SiteData, SkillData, SkillGroupData, SocialLink, TemplateRenderer,
};
use crate::view::{DetailPanel, DetailState, Glyph, PageState};
use crate::Portfolio;

/// Message shown in the detail panel when a fetch failed
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load project details.";

/// Body of `api/project/<slug>.json`
#[derive(Debug, Serialize)]
pub struct DetailDocument<'a> {
    pub content: &'a str,
}

/// Renders pages with the built-in templates
pub struct Generator {
    portfolio: Portfolio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(portfolio: &Portfolio) -> Result<Self> {
        Ok(Self {
            portfolio: portfolio.clone(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
        })
    }

    pub fn markdown(&self) -> &MarkdownRenderer {
        &self.markdown
    }

    /// URL of the detail fragment for a slug
    pub fn detail_url(&self, slug: &str) -> String {
        url_for(
            &self.portfolio.config,
            &format!("project/{}.html", encode_segment(slug)),
        )
    }

    /// Render the page for the given state
    pub fn render_page(&self, state: &PageState) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &self.build_site_data());

        match state {
            PageState::Loading => self.renderer.render("loading.html", &context),
            PageState::Failed(message) => {
                context.insert("message", &esc(message));
                self.renderer.render("error.html", &context)
            }
            PageState::Loaded(data) => {
                context.insert("skill_groups", &build_skill_groups(data));
                context.insert("certifications", &build_certifications(data));
                context.insert("projects", &self.build_projects(data));
                context.insert("career", &build_career(data));
                context.insert("floating", &build_floating());
                self.renderer.render("index.html", &context)
            }
        }
    }

    /// Render the detail panel fragment for a project
    ///
    /// `project` may be absent when a document exists for a slug no project
    /// refers to; the slug is used as the title then.
    pub fn render_detail(
        &self,
        slug: &str,
        project: Option<&Project>,
        state: &DetailState,
    ) -> Result<String> {
        let (status, html, message) = match state {
            DetailState::Idle => ("idle", String::new(), String::new()),
            DetailState::Loading { .. } => ("loading", String::new(), String::new()),
            DetailState::Loaded { html, .. } => ("loaded", html.clone(), String::new()),
            DetailState::NotFound { .. } => {
                ("not-found", NO_CONTENT_PLACEHOLDER.to_string(), String::new())
            }
            DetailState::Error { .. } => {
                ("error", String::new(), DETAIL_FAILED_MESSAGE.to_string())
            }
        };

        let detail = DetailData {
            title: esc(project.map(|p| p.title.as_str()).unwrap_or(slug)),
            description: project.map(|p| esc(&p.description)).unwrap_or_default(),
            tags: project.map(|p| escape_all(&p.tags)).unwrap_or_default(),
            github_url: project.and_then(|p| p.github_url.as_deref().map(esc)),
            live_url: project.and_then(|p| p.live_url.as_deref().map(esc)),
            status: status.to_string(),
            html,
            message,
            retry_url: esc(&self.detail_url(slug)),
        };

        let mut context = Context::new();
        context.insert("detail", &detail);
        self.renderer.render("detail.html", &context)
    }

    /// Write the whole site to the public directory
    pub async fn generate(&self, data: &PortfolioData, source: &dyn DetailSource) -> Result<()> {
        let public_dir = &self.portfolio.public_dir;
        fs::create_dir_all(public_dir)?;

        self.copy_static_assets()?;

        let state = PageState::Loaded(data.clone());
        write_file(&public_dir.join("index.html"), &self.render_page(&state)?)?;
        write_file(
            &public_dir.join("api/data.json"),
            &serde_json::to_string_pretty(data)?,
        )?;

        for project in &data.projects {
            let Some(slug) = project.detail_slug() else {
                continue;
            };

            // One fetch feeds both the JSON document and the fragment
            let mut panel = DetailPanel::new();
            let request = panel.begin(slug);
            let result = match source.fetch(slug).await {
                Ok(content) => {
                    write_file(
                        &public_dir.join(format!("api/project/{}.json", slug)),
                        &serde_json::to_string(&DetailDocument { content: &content })?,
                    )?;
                    Ok(content)
                }
                Err(DetailError::NotFound(missing)) => {
                    tracing::warn!(
                        "Project {:?} refers to missing detail document {:?}",
                        project.title,
                        slug
                    );
                    Err(DetailError::NotFound(missing))
                }
                Err(e) => return Err(e.into()),
            };
            panel.complete(request.completion(result, &self.markdown));

            let fragment = self.render_detail(slug, Some(project), panel.state())?;
            write_file(
                &public_dir.join(format!("project/{}.html", slug)),
                &fragment,
            )?;
        }

        tracing::info!(
            "Generated page with {} projects into {:?}",
            data.projects.len(),
            public_dir
        );

        Ok(())
    }

    /// Copy everything under the static directory into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.portfolio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(static_dir)?;
            let target = self.portfolio.public_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            tracing::debug!("Copied {:?}", relative);
        }

        Ok(())
    }

    /// Build site data for templates
    fn build_site_data(&self) -> SiteData {
        let config = &self.portfolio.config;

        let social = [
            ("GitHub", config.social.github.clone()),
            ("Twitter", config.social.twitter.clone()),
            ("Website", config.social.website.clone()),
            ("Email", mail_href(&config.social.email)),
        ]
        .into_iter()
        .filter(|(_, href)| !href.is_empty())
        .map(|(name, href)| SocialLink {
            name: name.to_string(),
            external: is_external(&href),
            href: esc(&href),
        })
        .collect();

        SiteData {
            title: esc(&config.title),
            tagline: esc(&config.tagline),
            author: esc(&config.author),
            description: esc(&config.description),
            language: esc(&config.language),
            root: esc(&url_for(config, "")),
            about: AboutData {
                paragraphs: escape_all(&config.about.paragraphs),
                location: esc(&config.about.location),
                education: esc(&config.about.education),
            },
            social,
            year: chrono::Local::now().year(),
        }
    }

    fn build_projects(&self, data: &PortfolioData) -> Vec<ProjectData> {
        data.projects
            .iter()
            .map(|p| ProjectData {
                title: esc(&p.title),
                description: esc(&p.description),
                tags: escape_all(&p.tags),
                github_url: p.github_url.as_deref().map(esc),
                live_url: p.live_url.as_deref().map(esc),
                detail_url: p.detail_slug().map(|slug| esc(&self.detail_url(slug))),
            })
            .collect()
    }
}

fn build_skill_groups(data: &PortfolioData) -> Vec<SkillGroupData> {
    let skills = &data.skills;
    [
        ("languages", "Languages", &skills.languages),
        ("frameworks", "Frameworks & Libraries", &skills.frameworks),
        ("tools", "Tools", &skills.tools),
    ]
    .into_iter()
    .map(|(id, title, items)| SkillGroupData {
        id: id.to_string(),
        title: title.to_string(),
        skills: items
            .iter()
            .map(|s| SkillData {
                name: esc(&s.name),
                icon: s.icon.clone(),
                level: level_percent(s.level.as_ref()),
            })
            .collect(),
    })
    .collect()
}

fn build_certifications(data: &PortfolioData) -> Vec<CertificationData> {
    data.skills
        .certifications
        .iter()
        .map(|c| CertificationData {
            name: esc(&c.name),
            icon: c.icon.clone(),
            date: esc(&c.date),
        })
        .collect()
}

fn build_career(data: &PortfolioData) -> Vec<CareerData> {
    data.career
        .iter()
        .enumerate()
        .map(|(i, item)| CareerData {
            date: esc(&item.date),
            title: esc(&item.title),
            description: esc(&item.description),
            side: if i % 2 == 0 { "left" } else { "right" }.to_string(),
        })
        .collect()
}

/// Background layer: three glyphs on a fixed diagonal
fn build_floating() -> Vec<FloatingGlyph> {
    [Glyph::Code, Glyph::Database, Glyph::Shield]
        .into_iter()
        .enumerate()
        .map(|(i, glyph)| {
            let i = i as u32;
            FloatingGlyph {
                icon: glyph.name().to_string(),
                left: 20 + i * 30,
                top: 20 + i * 25,
                delay: i * 2,
            }
        })
        .collect()
}

fn escape_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| esc(s)).collect()
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
