use crate::domain::model::{AchievementEntry, ProjectEntry, Section};
use serde::Serialize;

/// Number of technologies shown on a chat project card.
pub const CARD_TECHNOLOGY_LIMIT: usize = 4;

/// Number of matched skills named in an affirmative answer.
pub const SKILL_DISPLAY_LIMIT: usize = 5;

/// Number of certifications listed in an achievements answer.
pub const CERTIFICATION_DISPLAY_LIMIT: usize = 4;

/// Compact project reference rendered as a clickable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub technologies: Vec<String>,
}

impl From<&ProjectEntry> for ProjectCard {
    fn from(project: &ProjectEntry) -> Self {
        Self {
            id: project.id.clone(),
            icon: project.icon.clone(),
            title: project.title.clone(),
            technologies: project
                .technologies
                .iter()
                .take(CARD_TECHNOLOGY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

/// What the responder decided, before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    SkillFound {
        term: String,
        skills: Vec<String>,
    },
    SkillNotListed {
        term: String,
    },
    ProjectMatches {
        term: String,
        projects: Vec<ProjectCard>,
    },
    Achievements {
        certification_count: usize,
        certifications: Vec<AchievementEntry>,
        awards: Vec<AchievementEntry>,
    },
    AchievementsSummary,
    SectionOverview {
        section: Section,
    },
    Greeting,
    Fallback,
}

impl Reply {
    /// Skills named in the answer, capped for display.
    pub fn displayed_skills(&self) -> &[String] {
        match self {
            Reply::SkillFound { skills, .. } => &skills[..skills.len().min(SKILL_DISPLAY_LIMIT)],
            _ => &[],
        }
    }

    pub fn project_refs(&self) -> Vec<String> {
        match self {
            Reply::ProjectMatches { projects, .. } => projects.iter().map(|p| p.id.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// Sections whose overview sentence says "check out my <Section> section".
    pub fn navigation_hint(&self) -> Option<Section> {
        match self {
            Reply::SectionOverview { section } => match section {
                Section::About | Section::Skills | Section::Projects | Section::Contact => {
                    Some(*section)
                }
                Section::Experience | Section::Achievements => None,
            },
            _ => None,
        }
    }
}

/// The result of handling one query. There is no error case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsePayload {
    pub reply: Reply,
    pub markup: String,
    pub text: String,
    pub project_refs: Vec<String>,
    pub navigate_to: Option<Section>,
}

impl ResponsePayload {
    pub fn is_fallback(&self) -> bool {
        matches!(self.reply, Reply::Fallback)
    }
}
