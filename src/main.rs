use clap::Parser;
use portfolio_chat::app::output;
use portfolio_chat::utils::{logger, validation::Validate};
use portfolio_chat::{ChatSession, CliConfig, Command, KnowledgeBase, PortfolioError};
use std::io::{self, BufWriter, Write};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // Logging
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn load_knowledge(config: &CliConfig) -> Result<KnowledgeBase, PortfolioError> {
    let knowledge = match &config.knowledge {
        Some(path) => KnowledgeBase::from_file(path)?,
        None => {
            tracing::debug!("Using built-in knowledge base");
            KnowledgeBase::builtin()?
        }
    };
    knowledge.validate()?;
    Ok(knowledge)
}

fn run(config: &CliConfig) -> Result<(), PortfolioError> {
    let knowledge = load_knowledge(config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &config.command {
        Command::Ask { query } => {
            let payload = knowledge.respond(&query.join(" "));
            output::write_payload(&mut out, &payload, config.format)?;
        }
        Command::Chat { delay_ms } => {
            let session = ChatSession::new(&knowledge, config.format)
                .with_reply_delay(Duration::from_millis(*delay_ms));
            session.run(io::stdin().lock(), &mut out)?;
        }
        Command::Project { id } => {
            output::write_project(&mut out, knowledge.project(id)?, config.format)?;
        }
        Command::Experience { id } => {
            output::write_experience(&mut out, knowledge.experience(id)?, config.format)?;
        }
        Command::Projects { category } => match category {
            Some(category) => {
                output::write_project_list(&mut out, knowledge.projects().in_category(*category), config.format)?
            }
            None => output::write_project_list(&mut out, knowledge.projects().iter(), config.format)?,
        },
        Command::Skills => {
            let skills = knowledge.skill_catalog();
            output::write_skills(&mut out, skills.iter(), config.format)?;
        }
    }

    out.flush()?;
    Ok(())
}
