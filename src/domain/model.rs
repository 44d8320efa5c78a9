use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_ACHIEVEMENT_DESCRIPTION: &str = "Professional Achievement";

/// Page sections the host UI can reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Achievements,
    Contact,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Project tabs shown on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    #[default]
    Fullstack,
    MachineLearning,
    Research,
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectCategory::Fullstack => "Fullstack",
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::Research => "Research",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub category: ProjectCategory,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub project_link: Option<String>,
    #[serde(default)]
    pub source_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    Award,
    Certification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub title: String,
    #[serde(default = "default_achievement_description")]
    pub description: String,
}

fn default_achievement_description() -> String {
    DEFAULT_ACHIEVEMENT_DESCRIPTION.to_string()
}

impl AchievementEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            title: title.into(),
            description: if description.trim().is_empty() {
                default_achievement_description()
            } else {
                description
            },
        }
    }

    /// Awards are recognised by title only; everything else counts as a certification.
    pub fn kind(&self) -> AchievementKind {
        let title = self.title.to_lowercase();
        if title.contains("runner") || title.contains("it olympiad") {
            AchievementKind::Award
        } else {
            AchievementKind::Certification
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub role: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// The portfolio owner as quoted by the canned section sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub headline: String,
    #[serde(default)]
    pub featured_skills: Vec<String>,
}
