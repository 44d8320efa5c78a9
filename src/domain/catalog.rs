use crate::domain::model::{
    AchievementEntry, AchievementKind, ExperienceEntry, Profile, ProjectCategory, ProjectEntry,
};
use crate::utils::text::contains_either_way;
use serde::Serialize;
use std::collections::HashSet;

/// Declared skill tags merged with every project technology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Dedup is on the literal string, so "Vue.js" and "vue.js" both survive.
    pub fn collect(tags: &[String], projects: &ProjectCatalog) -> Self {
        let mut seen = HashSet::new();
        let skills = tags
            .iter()
            .chain(projects.iter().flat_map(|p| p.technologies.iter()))
            .filter(|skill| seen.insert(skill.as_str()))
            .cloned()
            .collect();
        Self { skills }
    }

    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(Into::into)
            .filter(|skill: &String| seen.insert(skill.clone()))
            .collect();
        Self { skills }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills related to `term` in either direction, in catalog order.
    pub fn find_matching(&self, term: &str) -> Vec<&str> {
        let term = term.to_lowercase();
        self.iter()
            .filter(|skill| contains_either_way(&skill.to_lowercase(), &term))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectCatalog {
    entries: Vec<ProjectEntry>,
}

impl ProjectCatalog {
    pub fn new(entries: Vec<ProjectEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectEntry> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn in_category(&self, category: ProjectCategory) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.iter().filter(move |p| p.category == category)
    }

    /// Lowercased technologies of all projects, deduplicated.
    pub fn technology_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|p| p.technologies.iter())
            .map(|t| t.to_lowercase())
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }

    /// Projects whose technologies relate to `keyword` either way, or whose
    /// title or description contains it.
    pub fn search(&self, keyword: &str) -> Vec<&ProjectEntry> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|p| {
                p.technologies
                    .iter()
                    .any(|t| contains_either_way(&t.to_lowercase(), &keyword))
                    || p.title.to_lowercase().contains(&keyword)
                    || p.description.to_lowercase().contains(&keyword)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AchievementCatalog {
    entries: Vec<AchievementEntry>,
}

impl AchievementCatalog {
    pub fn new(entries: Vec<AchievementEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AchievementEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn of_kind(&self, kind: AchievementKind) -> impl Iterator<Item = &AchievementEntry> {
        self.entries.iter().filter(move |a| a.kind() == kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceCatalog {
    entries: Vec<ExperienceEntry>,
}

impl ExperienceCatalog {
    pub fn new(entries: Vec<ExperienceEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExperienceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ExperienceEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Everything a single `respond` call reads. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs<'a> {
    pub profile: &'a Profile,
    pub skills: &'a SkillCatalog,
    pub projects: &'a ProjectCatalog,
    pub achievements: &'a AchievementCatalog,
}
