pub mod detail;
pub mod matching;
pub mod render;
pub mod responder;
pub mod rules;

pub use crate::domain::catalog::{AchievementCatalog, Catalogs, ProjectCatalog, SkillCatalog};
pub use crate::domain::ports::{Rule, RuleOutcome};
pub use crate::domain::reply::{Reply, ResponsePayload};
pub use crate::utils::error::Result;
