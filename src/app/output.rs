use crate::core::detail;
use crate::domain::model::{ExperienceEntry, ProjectEntry};
use crate::domain::reply::{ProjectCard, ResponsePayload};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

pub fn write_payload<W: Write>(out: &mut W, payload: &ResponsePayload, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", payload.text)?;
            if let Some(section) = payload.navigate_to {
                writeln!(out, "→ Opening the {} section", section)?;
            }
        }
        OutputFormat::Html => writeln!(out, "{}", payload.markup)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(payload)?)?,
    }
    Ok(())
}

pub fn write_project<W: Write>(out: &mut W, project: &ProjectEntry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", detail::project_text(project))?,
        OutputFormat::Html => writeln!(out, "{}", detail::project_markup(project)?)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(project)?)?,
    }
    Ok(())
}

pub fn write_experience<W: Write>(
    out: &mut W,
    experience: &ExperienceEntry,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", detail::experience_text(experience))?,
        OutputFormat::Html => writeln!(out, "{}", detail::experience_markup(experience)?)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(experience)?)?,
    }
    Ok(())
}

pub fn write_project_list<'a, W, I>(out: &mut W, projects: I, format: OutputFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ProjectEntry>,
{
    match format {
        OutputFormat::Json => {
            let cards: Vec<ProjectCard> = projects.into_iter().map(ProjectCard::from).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
        }
        OutputFormat::Html => {
            for project in projects {
                writeln!(out, "{}", detail::project_markup(project)?)?;
            }
        }
        OutputFormat::Text => {
            for project in projects {
                writeln!(
                    out,
                    "[{}] {} ({}): {}",
                    project.id,
                    project.title,
                    project.category,
                    project.technologies.join(", ")
                )?;
            }
        }
    }
    Ok(())
}

pub fn write_skills<'a, W, I>(out: &mut W, skills: I, format: OutputFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    match format {
        OutputFormat::Json => {
            let skills: Vec<&str> = skills.into_iter().collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&skills)?)?;
        }
        OutputFormat::Text | OutputFormat::Html => {
            for skill in skills {
                writeln!(out, "{}", skill)?;
            }
        }
    }
    Ok(())
}
