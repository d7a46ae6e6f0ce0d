//! Portfolio content models

use serde::{Deserialize, Serialize};

/// A single skill card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Icon identifier, resolved through [`crate::view::Glyph`]
    pub icon: String,
    /// Proficiency, nominally 0-100; kept as written and clamped when rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<serde_json::Number>,
}

/// A certification entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub icon: String,
    /// Free-form date label
    pub date: String,
}

/// Skills grouped under the fixed set of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsData {
    pub languages: Vec<Skill>,
    pub frameworks: Vec<Skill>,
    pub tools: Vec<Skill>,
    pub certifications: Vec<Certification>,
}

/// A project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    /// Filename (or slug) of the Markdown detail document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_file: Option<String>,
}

impl Project {
    /// Detail identifier used to address the Markdown document
    ///
    /// `"secure-api.md"` and `"secure-api"` both yield `"secure-api"`.
    pub fn detail_slug(&self) -> Option<&str> {
        let file = self.detail_file.as_deref()?.trim();
        let slug = file.strip_suffix(".md").unwrap_or(file);
        if slug.is_empty() {
            None
        } else {
            Some(slug)
        }
    }
}

/// One entry of the career timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerItem {
    pub date: String,
    pub title: String,
    pub description: String,
}

/// Everything the page needs, loaded as one unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub skills: SkillsData,
    pub projects: Vec<Project>,
    pub career: Vec<CareerItem>,
}

impl PortfolioData {
    /// Find the project whose detail document is addressed by `slug`
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.detail_slug() == Some(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioData {
        PortfolioData {
            skills: SkillsData {
                languages: vec![Skill {
                    name: "Python".to_string(),
                    icon: "Code".to_string(),
                    level: Some(85.into()),
                }],
                frameworks: vec![Skill {
                    name: "Django".to_string(),
                    icon: "Database".to_string(),
                    level: None,
                }],
                tools: Vec::new(),
                certifications: vec![Certification {
                    name: "Fundamental IT Engineer".to_string(),
                    icon: "Award".to_string(),
                    date: "2023".to_string(),
                }],
            },
            projects: vec![Project {
                title: "Secure API".to_string(),
                description: "A hardened REST API".to_string(),
                tags: vec!["Python".to_string(), "Security".to_string()],
                github_url: Some("https://github.com/example/secure-api".to_string()),
                live_url: None,
                detail_file: Some("secure-api.md".to_string()),
            }],
            career: vec![CareerItem {
                date: "2022".to_string(),
                title: "Entered college".to_string(),
                description: "Started studying computer science".to_string(),
            }],
        }
    }

    #[test]
    fn test_round_trip_identity() {
        let data = sample();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: PortfolioData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let project = &json["projects"][0];
        assert_eq!(project["githubUrl"], "https://github.com/example/secure-api");
        assert_eq!(project["detailFile"], "secure-api.md");
        assert!(project.get("liveUrl").is_none());
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let project: Project =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        assert!(project.tags.is_empty());
        assert!(project.github_url.is_none());
    }

    #[test]
    fn test_tags_must_be_a_list() {
        let single = serde_json::from_str::<Project>(
            r#"{"title": "T", "description": "D", "tags": "Rust"}"#,
        );
        assert!(single.is_err());
    }

    #[test]
    fn test_skill_level_is_kept_verbatim() {
        for json in [
            r#"{"name":"Go","icon":"Code","level":85.5}"#,
            r#"{"name":"Go","icon":"Code","level":300}"#,
            r#"{"name":"Go","icon":"Code"}"#,
        ] {
            let skill: Skill = serde_json::from_str(json).unwrap();
            assert_eq!(serde_json::to_string(&skill).unwrap(), json);
        }
    }

    #[test]
    fn test_missing_skill_categories_default_to_empty() {
        let skills: SkillsData = serde_json::from_str(r#"{"languages": []}"#).unwrap();
        assert!(skills.frameworks.is_empty());
        assert!(skills.tools.is_empty());
        assert!(skills.certifications.is_empty());
    }

    #[test]
    fn test_detail_slug() {
        let mut project = sample().projects.remove(0);
        assert_eq!(project.detail_slug(), Some("secure-api"));

        project.detail_file = Some("secure-api".to_string());
        assert_eq!(project.detail_slug(), Some("secure-api"));

        project.detail_file = Some(".md".to_string());
        assert_eq!(project.detail_slug(), None);

        project.detail_file = None;
        assert_eq!(project.detail_slug(), None);
    }

    #[test]
    fn test_project_by_slug() {
        let data = sample();
        assert_eq!(
            data.project_by_slug("secure-api").map(|p| p.title.as_str()),
            Some("Secure API")
        );
        assert!(data.project_by_slug("missing").is_none());
    }
}
