//! Static portfolio content and the queries the page runs over it.
//!
//! The records ship inside the binary (`content/portfolio.json`) and are
//! decoded once at startup. They are never mutated afterwards.

pub mod links;
pub mod view;

use serde::Deserialize;
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Portfolio {
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    #[default]
    Completed,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub long_description: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Ordered `(key, value)` pairs; keys go through the metric label table.
    #[serde(default)]
    pub metrics: Vec<(String, String)>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub year: String,
    #[serde(default)]
    pub status: Status,
    pub client: String,
    pub role: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == *category,
        }
    }
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(PORTFOLIO_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;

        let mut seen = std::collections::HashSet::new();
        for project in &portfolio.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }

        Ok(portfolio)
    }

    pub fn filtered(&self, filter: &Filter) -> Vec<&Project> {
        self.projects.iter().filter(|project| filter.matches(project)).collect()
    }

    pub fn count(&self, filter: &Filter) -> usize {
        self.projects.iter().filter(|project| filter.matches(project)).count()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_decodes() {
        let portfolio = Portfolio::load().expect("bundled content is valid");

        assert_eq!(portfolio.projects.len(), 6);
        assert!(!portfolio.experience.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.certifications.is_empty());
        assert_eq!(portfolio.projects[0].metrics[0], ("efficiency".to_string(), "95%".to_string()));
        assert_eq!(portfolio.projects[0].status, Status::Active);
    }

    #[test]
    fn filter_matches_category_exactly() {
        let portfolio = Portfolio::load().expect("bundled content is valid");

        let automation = portfolio.filtered(&Filter::from_key("automation"));
        assert_eq!(automation.len(), 2);
        assert!(automation.iter().all(|project| project.category == "automation"));

        assert_eq!(portfolio.filtered(&Filter::All).len(), portfolio.projects.len());
        assert!(portfolio.filtered(&Filter::from_key("Automation")).is_empty());
    }

    #[test]
    fn empty_category_yields_empty_gallery() {
        let portfolio = Portfolio::load().expect("bundled content is valid");

        assert!(portfolio.filtered(&Filter::from_key("robotics")).is_empty());
        assert_eq!(portfolio.count(&Filter::from_key("robotics")), 0);
    }

    #[test]
    fn malformed_content_is_an_error() {
        let result = Portfolio::from_json("{\"projects\": [{\"id\": \"one\"}]}");
        assert!(matches!(result, Err(ContentError::Decode(_))));
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let project = r#"{"id": 4, "title": "t", "short_title": "t", "description": "d",
            "long_description": "l", "category": "ml", "year": "2024", "client": "c", "role": "r"}"#;
        let raw = format!("{{\"projects\": [{project}, {project}]}}");

        assert!(matches!(Portfolio::from_json(&raw), Err(ContentError::DuplicateProject(4))));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let portfolio = Portfolio::from_json("{}").expect("empty document is valid");
        assert_eq!(portfolio, Portfolio::default());
    }
}
