use crate::app::output::OutputFormat;
use crate::domain::model::ProjectCategory;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

/// Longest presentation delay accepted for `chat`.
pub const MAX_REPLY_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-chat")]
#[command(about = "Rule-based portfolio assistant: ask about skills, projects and achievements")]
pub struct CliConfig {
    /// Knowledge base TOML file (defaults to the built-in portfolio)
    #[arg(long, env = "PORTFOLIO_KNOWLEDGE")]
    pub knowledge: Option<String>,

    /// How replies are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Answer a single question
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Interactive session on stdin; `exit` or `quit` ends it
    Chat {
        /// Pause before each reply, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Show one project in full
    Project { id: String },
    /// Show one experience entry in full
    Experience { id: String },
    /// List projects in display order
    Projects {
        #[arg(long, value_enum)]
        category: Option<ProjectCategory>,
    },
    /// List every known skill
    Skills,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.knowledge {
            validation::validate_path("knowledge", path)?;
            validation::validate_file_extension("knowledge", path, &["toml"])?;
        }

        if let Command::Chat { delay_ms } = &self.command {
            validation::validate_range("delay_ms", *delay_ms, 0, MAX_REPLY_DELAY_MS)?;
        }

        Ok(())
    }
}
