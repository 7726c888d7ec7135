use super::{Filter, Portfolio, Project, Status};

const CARD_ACHIEVEMENTS: usize = 2;
const CARD_TECH_TAGS: usize = 4;
const CARD_STAGGER_MS: usize = 100;
const DEFAULT_TECH_ICON: &str = "fas fa-cog";

pub const FILTERS: [(&str, &str, &str); 6] = [
    ("all", "All", "fas fa-th"),
    ("automation", "Automation", "fas fa-robot"),
    ("ml", "Machine Learning", "fas fa-brain"),
    ("mining", "Mining", "fas fa-hard-hat"),
    ("software", "Software", "fas fa-code"),
    ("optimization", "Optimization", "fas fa-project-diagram"),
];

pub fn category_name(key: &str) -> &str {
    match key {
        "automation" => "Automation",
        "ml" => "Machine Learning",
        "mining" => "Mining",
        "software" => "Software",
        "optimization" => "Optimization",
        other => other,
    }
}

pub fn metric_label(key: &str) -> &str {
    match key {
        "efficiency" => "Efficiency",
        "accuracy" => "Accuracy",
        "timesSaved" | "timeSaved" => "Time Saved",
        "roi" => "ROI",
        "costReduction" => "Cost Reduction",
        "dataPoints" => "Data Points",
        "trainingTime" => "Training Time",
        "compliance" => "Compliance",
        "calculations" => "Calculations",
        "uptime" => "Uptime",
        "responseTime" => "Response Time",
        "users" => "Users",
        "dataSync" => "Sync",
        "standards" => "Standards",
        "dailyReports" => "Daily Reports",
        "errorRate" => "Error Rate",
        "optimization" => "Optimization",
        "iterations" => "Iterations",
        "variables" => "Variables",
        "runtime" => "Runtime",
        other => other,
    }
}

pub fn tech_icon(tech: &str) -> &'static str {
    match tech {
        "Python" => "fab fa-python",
        "C#" => "fas fa-code",
        ".NET" | "Azure" => "fab fa-microsoft",
        "JavaScript" => "fab fa-js",
        "React" => "fab fa-react",
        "TensorFlow" => "fas fa-brain",
        "MySQL" => "fas fa-database",
        "Git" => "fab fa-git",
        "GitHub" => "fab fa-github",
        "Docker" => "fab fa-docker",
        "AWS" => "fab fa-aws",
        _ => DEFAULT_TECH_ICON,
    }
}

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Active => "In progress",
        Status::Completed => "Completed",
    }
}

pub fn status_class(status: Status) -> &'static str {
    match status {
        Status::Active => "active",
        Status::Completed => "completed",
    }
}

/// Placeholder links (`#`, empty) are treated as absent.
fn real_link(link: Option<&String>) -> Option<String> {
    link.map(|value| value.trim())
        .filter(|value| !value.is_empty() && *value != "#")
        .map(ToString::to_string)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterButton {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub active: bool,
}

pub fn filter_buttons(portfolio: &Portfolio, current: &Filter) -> Vec<FilterButton> {
    FILTERS
        .iter()
        .map(|&(key, label, icon)| {
            let filter = Filter::from_key(key);
            FilterButton {
                key,
                label,
                icon,
                count: portfolio.count(&filter),
                active: filter == *current,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    pub short_title: String,
    pub category: String,
    pub description: String,
    pub featured: bool,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub achievements: Vec<String>,
    pub tech_tags: Vec<String>,
    pub more_tech: Option<usize>,
    pub year: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub delay_ms: usize,
}

impl ProjectCard {
    pub fn new(project: &Project, index: usize) -> Self {
        let hidden_tech = project.technologies.len().saturating_sub(CARD_TECH_TAGS);

        Self {
            id: project.id,
            title: project.title.clone(),
            short_title: project.short_title.clone(),
            category: project.category.clone(),
            description: project.description.clone(),
            featured: project.featured,
            github: real_link(project.github.as_ref()),
            demo: real_link(project.demo.as_ref()),
            achievements: project.achievements.iter().take(CARD_ACHIEVEMENTS).cloned().collect(),
            tech_tags: project.technologies.iter().take(CARD_TECH_TAGS).cloned().collect(),
            more_tech: (hidden_tech > 0).then_some(hidden_tech),
            year: project.year.clone(),
            status_label: status_label(project.status),
            status_class: status_class(project.status),
            delay_ms: index * CARD_STAGGER_MS,
        }
    }
}

pub fn gallery(portfolio: &Portfolio, filter: &Filter) -> Vec<ProjectCard> {
    portfolio
        .filtered(filter)
        .into_iter()
        .enumerate()
        .map(|(index, project)| ProjectCard::new(project, index))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TechItem {
    pub name: String,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub title: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub year: String,
    pub featured: bool,
    pub role: String,
    pub client: String,
    pub category: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub metrics: Vec<MetricRow>,
    pub technologies: Vec<TechItem>,
    pub images: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl ProjectDetail {
    pub fn new(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            status_label: status_label(project.status),
            status_class: status_class(project.status),
            year: project.year.clone(),
            featured: project.featured,
            role: project.role.clone(),
            client: project.client.clone(),
            category: category_name(&project.category).to_string(),
            description: project.long_description.trim().to_string(),
            achievements: project.achievements.clone(),
            metrics: project
                .metrics
                .iter()
                .map(|(key, value)| MetricRow {
                    label: metric_label(key).to_string(),
                    value: value.clone(),
                })
                .collect(),
            technologies: project
                .technologies
                .iter()
                .map(|name| TechItem {
                    name: name.clone(),
                    icon: tech_icon(name),
                })
                .collect(),
            images: project.images.clone(),
            github: real_link(project.github.as_ref()),
            demo: real_link(project.demo.as_ref()),
        }
    }
}
