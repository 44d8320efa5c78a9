#[cfg(feature = "cli")]
pub mod cli;
pub mod knowledge;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use knowledge::{KnowledgeBase, KnowledgeFile};
