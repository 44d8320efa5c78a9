use anyhow::Result;
use portfolio_chat::utils::validation::Validate;
use portfolio_chat::{KnowledgeBase, PortfolioError, Reply};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const KNOWLEDGE: &str = r#"
[profile]
name = "Ada Example"
short_name = "Ada"
headline = "a software engineer"

[skills]
tags = ["Rust", "Python"]

[[projects]]
id = "cli1"
title = "Log Shipper"
icon = "fas fa-terminal"
description = "Ships logs from edge devices"
technologies = ["Rust", "Tokio"]
project_link = "https://example.com/log-shipper"
source_link = "https://github.com/example/log-shipper"

[[experiences]]
id = "exp1"
role = "Systems Engineer"
company = "Example Corp"
duration = "2021 - Present"
responsibilities = ["Owned the ingestion pipeline"]
technologies = ["Rust"]
"#;

#[test]
fn test_load_knowledge_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(KNOWLEDGE.as_bytes())?;

    let knowledge = KnowledgeBase::from_file(file.path())?;
    knowledge.validate()?;

    assert_eq!(knowledge.profile().name, "Ada Example");
    assert_eq!(knowledge.project("cli1")?.title, "Log Shipper");
    assert_eq!(knowledge.experience("exp1")?.company, "Example Corp");
    assert_eq!(knowledge.skill_catalog().len(), 3);
    Ok(())
}

#[test]
fn test_loaded_knowledge_drives_responses() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("portfolio.toml");
    std::fs::write(&path, KNOWLEDGE)?;

    let knowledge = KnowledgeBase::from_file(&path)?;
    let payload = knowledge.respond("Have you worked with Tokio?");
    assert!(matches!(payload.reply, Reply::SkillFound { .. }));

    let payload = knowledge.respond("rust projects");
    assert_eq!(payload.project_refs, vec!["cli1"]);
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = KnowledgeBase::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, PortfolioError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_blank_skill_tag_fails_validation() -> Result<()> {
    let knowledge = KnowledgeBase::from_toml_str(&KNOWLEDGE.replace(r#""Python""#, r#""  ""#))?;
    assert!(matches!(
        knowledge.validate(),
        Err(PortfolioError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_profile_is_rejected() {
    let without_profile = KNOWLEDGE.replace("[profile]", "[owner]");
    let err = KnowledgeBase::from_toml_str(&without_profile).unwrap_err();
    assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
}
