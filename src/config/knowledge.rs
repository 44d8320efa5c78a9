use crate::core::responder;
use crate::domain::catalog::{
    AchievementCatalog, Catalogs, ExperienceCatalog, ProjectCatalog, SkillCatalog,
};
use crate::domain::model::{AchievementEntry, ExperienceEntry, Profile, ProjectEntry};
use crate::domain::reply::ResponsePayload;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_KNOWLEDGE: &str = include_str!("../../data/portfolio.toml");

/// On-disk layout of a knowledge file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    pub profile: Profile,
    #[serde(default)]
    pub skills: SkillsConfig,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub achievements: Vec<AchievementEntry>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Read-only catalogs for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    profile: Profile,
    skill_tags: Vec<String>,
    projects: ProjectCatalog,
    achievements: AchievementCatalog,
    experiences: ExperienceCatalog,
}

impl KnowledgeBase {
    pub fn new(
        profile: Profile,
        skill_tags: Vec<String>,
        projects: Vec<ProjectEntry>,
        achievements: Vec<AchievementEntry>,
        experiences: Vec<ExperienceEntry>,
    ) -> Self {
        Self {
            profile,
            skill_tags,
            projects: ProjectCatalog::new(projects),
            achievements: AchievementCatalog::new(achievements),
            experiences: ExperienceCatalog::new(experiences),
        }
    }

    /// The knowledge base compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_KNOWLEDGE)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        let knowledge = Self::from_toml_str(&content)?;
        tracing::info!(
            "📚 Loaded knowledge base from {} ({} projects, {} achievements, {} experiences)",
            path.as_ref().display(),
            knowledge.projects.len(),
            knowledge.achievements.len(),
            knowledge.experiences.len()
        );
        Ok(knowledge)
    }

    /// Parses a knowledge file, then expands `${VAR}` inside string values only.
    /// Keys and TOML syntax are never rewritten, so a variable holding quotes or
    /// newlines cannot break the parse. Unset variables stay as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: toml::Table =
            toml::from_str(content).map_err(|e| PortfolioError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        for (_, value) in table.iter_mut() {
            Self::substitute_env_vars(value);
        }

        let file: KnowledgeFile =
            toml::Value::Table(table)
                .try_into()
                .map_err(|e: toml::de::Error| PortfolioError::ConfigValidationError {
                    field: "toml_parsing".to_string(),
                    message: format!("TOML parsing error: {}", e),
                })?;

        Ok(Self::from(file))
    }

    fn substitute_env_vars(value: &mut toml::Value) {
        static ENV_VAR_RE: OnceCell<Regex> = OnceCell::new();

        match value {
            toml::Value::String(text) => {
                let re = ENV_VAR_RE
                    .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));
                if re.is_match(text) {
                    *text = re
                        .replace_all(text, |caps: &regex::Captures| {
                            let var_name = &caps[1];
                            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                        })
                        .into_owned();
                }
            }
            toml::Value::Array(items) => items.iter_mut().for_each(Self::substitute_env_vars),
            toml::Value::Table(table) => table.iter_mut().for_each(|(_, v)| Self::substitute_env_vars(v)),
            _ => {}
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skill_tags(&self) -> &[String] {
        &self.skill_tags
    }

    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    pub fn achievements(&self) -> &AchievementCatalog {
        &self.achievements
    }

    pub fn experiences(&self) -> &ExperienceCatalog {
        &self.experiences
    }

    /// Skill tags merged with project technologies. Built fresh on each call.
    pub fn skill_catalog(&self) -> SkillCatalog {
        SkillCatalog::collect(&self.skill_tags, &self.projects)
    }

    pub fn project(&self, id: &str) -> Result<&ProjectEntry> {
        self.projects
            .get(id)
            .ok_or_else(|| PortfolioError::UnknownEntryError {
                kind: "project",
                id: id.to_string(),
            })
    }

    pub fn experience(&self, id: &str) -> Result<&ExperienceEntry> {
        self.experiences
            .get(id)
            .ok_or_else(|| PortfolioError::UnknownEntryError {
                kind: "experience",
                id: id.to_string(),
            })
    }

    /// Answer one chat query against this knowledge base.
    pub fn respond(&self, raw_query: &str) -> ResponsePayload {
        let skills = self.skill_catalog();
        let catalogs = Catalogs {
            profile: &self.profile,
            skills: &skills,
            projects: &self.projects,
            achievements: &self.achievements,
        };
        responder::respond(raw_query, &catalogs)
    }
}

/// Placeholder links such as "#" mean "no link".
fn real_link(link: Option<String>) -> Option<String> {
    link.filter(|l| {
        let l = l.trim();
        !l.is_empty() && l != "#"
    })
}

impl From<KnowledgeFile> for KnowledgeBase {
    fn from(file: KnowledgeFile) -> Self {
        let projects = file
            .projects
            .into_iter()
            .map(|p| ProjectEntry {
                project_link: real_link(p.project_link),
                source_link: real_link(p.source_link),
                ..p
            })
            .collect();
        let achievements = file
            .achievements
            .into_iter()
            .map(|a| AchievementEntry::new(a.title, a.description))
            .collect();
        let experiences = file
            .experiences
            .into_iter()
            .map(|e| ExperienceEntry {
                logo: real_link(e.logo),
                ..e
            })
            .collect();

        Self::new(file.profile, file.skills.tags, projects, achievements, experiences)
    }
}

impl Validate for KnowledgeBase {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_non_empty_string("profile.short_name", &self.profile.short_name)?;

        for tag in &self.skill_tags {
            validation::validate_non_empty_string("skills.tags", tag)?;
        }

        validation::validate_unique_ids("project", "projects.id", self.projects.iter().map(|p| p.id.as_str()))?;
        for project in self.projects.iter() {
            validation::validate_non_empty_string("projects.title", &project.title)?;
            if let Some(link) = &project.project_link {
                validation::validate_url("projects.project_link", link)?;
            }
            if let Some(link) = &project.source_link {
                validation::validate_url("projects.source_link", link)?;
            }
        }

        for achievement in self.achievements.iter() {
            validation::validate_non_empty_string("achievements.title", &achievement.title)?;
        }

        validation::validate_unique_ids(
            "experience",
            "experiences.id",
            self.experiences.iter().map(|e| e.id.as_str()),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[profile]
name = "Ada Example"
short_name = "Ada"
headline = "a software engineer"

[skills]
tags = ["Python", "Laravel"]

[[projects]]
id = "fs1"
title = "Marketplace"
icon = "fas fa-couch"
description = "Furniture marketplace"
technologies = ["Laravel", "Vue.js"]
project_link = "https://example.com/"
source_link = "#"

[[achievements]]
title = "Runner-up, IT Olympiad 2019"
"##;

    #[test]
    fn test_parse_minimal_knowledge() {
        let knowledge = KnowledgeBase::from_toml_str(MINIMAL).unwrap();
        assert_eq!(knowledge.profile().short_name, "Ada");
        assert_eq!(knowledge.projects().len(), 1);
        assert!(knowledge.experiences().is_empty());

        let project = knowledge.project("fs1").unwrap();
        assert_eq!(project.project_link.as_deref(), Some("https://example.com/"));
        assert_eq!(project.source_link, None);

        let achievement = knowledge.achievements().iter().next().unwrap();
        assert_eq!(achievement.description, "Professional Achievement");
        assert!(knowledge.validate().is_ok());
    }

    #[test]
    fn test_skill_catalog_is_rebuilt_from_projects() {
        let knowledge = KnowledgeBase::from_toml_str(MINIMAL).unwrap();
        let skills: Vec<String> = knowledge.skill_catalog().iter().map(str::to_string).collect();
        assert_eq!(skills, vec!["Python", "Laravel", "Vue.js"]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_CHAT_TEST_OWNER", "Grace Example");

        let content = MINIMAL.replace("Ada Example", "${PORTFOLIO_CHAT_TEST_OWNER}");
        let knowledge = KnowledgeBase::from_toml_str(&content).unwrap();
        assert_eq!(knowledge.profile().name, "Grace Example");

        std::env::remove_var("PORTFOLIO_CHAT_TEST_OWNER");
    }

    #[test]
    fn test_env_value_with_quotes_and_newlines_stays_a_string() {
        std::env::set_var("PORTFOLIO_CHAT_TEST_HEADLINE", "a \"quoted\"\nengineer");

        let content = MINIMAL.replace("a software engineer", "${PORTFOLIO_CHAT_TEST_HEADLINE}");
        let knowledge = KnowledgeBase::from_toml_str(&content).unwrap();
        assert_eq!(knowledge.profile().headline, "a \"quoted\"\nengineer");

        std::env::remove_var("PORTFOLIO_CHAT_TEST_HEADLINE");
    }

    #[test]
    fn test_env_vars_expand_inside_arrays() {
        std::env::set_var("PORTFOLIO_CHAT_TEST_TAG", "Rust");

        let content = MINIMAL.replace(r#"tags = ["Python", "Laravel"]"#, r#"tags = ["${PORTFOLIO_CHAT_TEST_TAG}"]"#);
        let knowledge = KnowledgeBase::from_toml_str(&content).unwrap();
        assert_eq!(knowledge.skill_tags(), ["Rust"]);

        std::env::remove_var("PORTFOLIO_CHAT_TEST_TAG");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let content = MINIMAL.replace("Ada Example", "${PORTFOLIO_CHAT_SURELY_UNSET}");
        let knowledge = KnowledgeBase::from_toml_str(&content).unwrap();
        assert_eq!(knowledge.profile().name, "${PORTFOLIO_CHAT_SURELY_UNSET}");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = KnowledgeBase::from_toml_str("[profile\nname = 1").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_duplicate_project_ids_fail_validation() {
        let content = MINIMAL.replace(
            "[[achievements]]",
            "[[projects]]\nid = \"fs1\"\ntitle = \"Again\"\nicon = \"fas fa-x\"\ndescription = \"dup\"\n\n[[achievements]]",
        );
        let knowledge = KnowledgeBase::from_toml_str(&content).unwrap();
        assert!(matches!(
            knowledge.validate(),
            Err(PortfolioError::DuplicateEntryError { kind: "project", .. })
        ));
    }

    #[test]
    fn test_bad_link_fails_validation() {
        let content = MINIMAL.replace("https://example.com/", "ftp://example.com/");
        let knowledge = KnowledgeBase::from_toml_str(&content).unwrap();
        assert!(knowledge.validate().is_err());
    }

    #[test]
    fn test_unknown_ids() {
        let knowledge = KnowledgeBase::from_toml_str(MINIMAL).unwrap();
        assert!(matches!(
            knowledge.project("nope"),
            Err(PortfolioError::UnknownEntryError { kind: "project", .. })
        ));
        assert!(knowledge.experience("exp1").is_err());
    }

    #[test]
    fn test_builtin_knowledge_is_valid() {
        let knowledge = KnowledgeBase::builtin().unwrap();
        assert!(knowledge.validate().is_ok());
        assert!(!knowledge.projects().is_empty());
        assert!(knowledge.achievements().is_empty());
        assert!(!knowledge.experiences().is_empty());
    }
}
