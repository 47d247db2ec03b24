//! Portfolio content
//!
//! Everything shown on the pages is loaded once at startup into a single
//! immutable [`Content`] value and handed to the presentation layer by
//! reference. No validation is performed: duplicate names or tags are
//! tolerated and links are opaque strings.

use std::path::PathBuf;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Subject line used by the "Hire Me" mail link.
pub const HIRE_ME_SUBJECT: &str = "Hiring Inquiry";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Free text such as "2021 - 2024" or "Current"
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Decorative gradient token, e.g. "from-blue-500 to-purple-600"
    #[serde(default)]
    pub color: String,
}

impl Project {
    /// Image reference relative to the public asset root.
    pub fn image_path(&self) -> &str {
        self.image.strip_prefix("/public").unwrap_or(&self.image)
    }

    /// Split tags into the first `limit` and the number hidden behind "+N more".
    pub fn visible_tags(&self, limit: usize) -> (&[String], usize) {
        if self.tags.len() <= limit {
            (&self.tags, 0)
        } else {
            (&self.tags[..limit], self.tags.len() - limit)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Opaque icon key, rendered as-is when present
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A downloadable document referenced by path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub path: PathBuf,
    pub download_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// `mailto:` link with a percent-encoded "Hiring Inquiry" subject.
    pub fn hire_me_link(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.email,
            utf8_percent_encode(HIRE_ME_SUBJECT, NON_ALPHANUMERIC)
        )
    }

    /// First name, used by the greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub resume: ResumeDocument,
}

impl Content {
    pub fn category_labels(&self) -> Vec<String> {
        self.skill_categories
            .iter()
            .map(|category| category.label.clone())
            .collect()
    }

    /// Projects shown in the home page's featured strip.
    pub fn featured_projects(&self, count: usize) -> &[Project] {
        &self.projects[..count.min(self.projects.len())]
    }

    pub fn social(&self, label: &str) -> Option<&SocialLink> {
        self.profile
            .socials
            .iter()
            .find(|link| link.label.eq_ignore_ascii_case(label))
    }
}
