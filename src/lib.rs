pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::{ChatSession, OutputFormat};
pub use config::KnowledgeBase;
pub use crate::core::responder::{respond, Responder};
pub use domain::catalog::{AchievementCatalog, Catalogs, ProjectCatalog, SkillCatalog};
pub use domain::model::{AchievementEntry, AchievementKind, Profile, ProjectEntry, Section};
pub use domain::reply::{Reply, ResponsePayload};
pub use utils::error::{PortfolioError, Result};
