//! List site content

use anyhow::Result;
use std::collections::BTreeSet;
use walkdir::WalkDir;

use crate::content::{ContentLoader, PortfolioData};
use crate::helpers::level_percent;
use crate::Portfolio;

/// Detail documents compared with the projects referring to them
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DetailReport {
    /// Slugs with a document on disk
    pub present: Vec<String>,
    /// Slugs referenced by a project but missing on disk
    pub missing: Vec<String>,
    /// Documents on disk that no project refers to
    pub orphaned: Vec<String>,
}

/// List site content by type
pub fn run(portfolio: &Portfolio, content_type: &str) -> Result<()> {
    let data = ContentLoader::new(portfolio).load_blocking()?;

    match content_type {
        "skill" | "skills" => {
            let skills = &data.skills;
            for (title, items) in [
                ("Languages", &skills.languages),
                ("Frameworks & Libraries", &skills.frameworks),
                ("Tools", &skills.tools),
            ] {
                println!("{} ({}):", title, items.len());
                for skill in items {
                    match level_percent(skill.level.as_ref()) {
                        Some(level) => println!("  {} [{}%]", skill.name, level),
                        None => println!("  {}", skill.name),
                    }
                }
            }
            println!("Certifications ({}):", skills.certifications.len());
            for cert in &skills.certifications {
                println!("  {} - {}", cert.date, cert.name);
            }
        }
        "project" | "projects" => {
            println!("Projects ({}):", data.projects.len());
            for project in &data.projects {
                match project.detail_slug() {
                    Some(slug) => println!("  {} [{}]", project.title, slug),
                    None => println!("  {}", project.title),
                }
            }
        }
        "career" => {
            println!("Career ({}):", data.career.len());
            for item in &data.career {
                println!("  {} - {}", item.date, item.title);
            }
        }
        "detail" | "details" => {
            let report = check_details(portfolio, &data);
            println!("Detail documents ({}):", report.present.len());
            for slug in &report.present {
                println!("  {}", slug);
            }
            if !report.missing.is_empty() {
                println!("Missing ({}):", report.missing.len());
                for slug in &report.missing {
                    println!("  {}", slug);
                }
            }
            if !report.orphaned.is_empty() {
                println!("Orphaned ({}):", report.orphaned.len());
                for slug in &report.orphaned {
                    println!("  {}", slug);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: skills, projects, career, details",
                content_type
            );
        }
    }

    Ok(())
}

/// Cross-check the detail directory against the projects' references
pub fn check_details(portfolio: &Portfolio, data: &PortfolioData) -> DetailReport {
    let on_disk: BTreeSet<String> = WalkDir::new(&portfolio.detail_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let name = e.file_name().to_str()?;
            name.strip_suffix(".md").map(str::to_string)
        })
        .collect();

    let referenced: BTreeSet<String> = data
        .projects
        .iter()
        .filter_map(|p| p.detail_slug())
        .map(str::to_string)
        .collect();

    DetailReport {
        present: on_disk.iter().cloned().collect(),
        missing: referenced.difference(&on_disk).cloned().collect(),
        orphaned: on_disk.difference(&referenced).cloned().collect(),
    }
}
