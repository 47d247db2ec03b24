//! Skill category and project filter selection.

use serde::{Deserialize, Serialize};

use crate::domain::content::{Project, Skill, SkillCategory};

pub const DEFAULT_SKILL_CATEGORY: &str = "Frontend";

/// A project filter tab.
///
/// `AiMl` also matches tags containing the literals `AI` or
/// `Machine Learning`. Those two comparisons are case-sensitive while the
/// plain tag comparison is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    AiMl,
    Tag(String),
}

impl ProjectFilter {
    pub fn parse(label: &str) -> Self {
        match label {
            "all" => ProjectFilter::All,
            "AI/ML" => ProjectFilter::AiMl,
            other => ProjectFilter::Tag(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::AiMl => "AI/ML",
            ProjectFilter::Tag(tag) => tag,
        }
    }

    /// Tab caption; `all` is shown as "All Projects".
    pub fn title(&self) -> &str {
        match self {
            ProjectFilter::All => "All Projects",
            other => other.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::AiMl => project.tags.iter().any(|tag| {
                contains_ignore_case(tag, "AI/ML")
                    || tag.contains("AI")
                    || tag.contains("Machine Learning")
            }),
            ProjectFilter::Tag(filter) => project
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag, filter)),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The fixed filter tabs, in display order.
pub fn project_filters() -> Vec<ProjectFilter> {
    ["all", "Next.js", "AI/ML", "Python", "Full-Stack", "E-commerce"]
        .into_iter()
        .map(ProjectFilter::parse)
        .collect()
}

pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Skills registered under `label`; empty for an unknown label.
pub fn skills_for<'a>(categories: &'a [SkillCategory], label: &str) -> &'a [Skill] {
    categories
        .iter()
        .find(|category| category.label == label)
        .map(|category| category.skills.as_slice())
        .unwrap_or_default()
}
