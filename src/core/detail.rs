//! Detail views for a single project or experience, the content the page
//! shows in its modal dialogs.

use crate::domain::model::{ExperienceEntry, ProjectEntry};
use crate::utils::error::Result;
use askama::Template;

#[derive(Template)]
#[template(path = "detail/project.html")]
struct ProjectDetailTemplate<'a> {
    project: &'a ProjectEntry,
}

#[derive(Template)]
#[template(path = "detail/experience.html")]
struct ExperienceDetailTemplate<'a> {
    experience: &'a ExperienceEntry,
}

pub fn project_markup(project: &ProjectEntry) -> Result<String> {
    Ok(ProjectDetailTemplate { project }.render()?)
}

pub fn experience_markup(experience: &ExperienceEntry) -> Result<String> {
    Ok(ExperienceDetailTemplate { experience }.render()?)
}

fn push_list(text: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    text.push_str(&format!("\n\n{heading}:"));
    for item in items {
        text.push_str(&format!("\n  - {item}"));
    }
}

pub fn project_text(project: &ProjectEntry) -> String {
    let mut text = format!(
        "{} [{}]\n{}\n\n{}",
        project.title, project.id, project.category, project.description
    );
    push_list(&mut text, "Key Features", &project.features);
    if !project.technologies.is_empty() {
        text.push_str(&format!("\n\nTechnologies: {}", project.technologies.join(", ")));
    }
    if let Some(link) = &project.project_link {
        text.push_str(&format!("\nLive Project: {link}"));
    }
    if let Some(link) = &project.source_link {
        text.push_str(&format!("\nSource Code: {link}"));
    }
    text
}

pub fn experience_text(experience: &ExperienceEntry) -> String {
    let mut text = format!(
        "{} at {} ({})",
        experience.role, experience.company, experience.duration
    );
    push_list(&mut text, "Responsibilities", &experience.responsibilities);
    if !experience.technologies.is_empty() {
        text.push_str(&format!(
            "\n\nTechnologies: {}",
            experience.technologies.join(", ")
        ));
    }
    push_list(&mut text, "Key Achievements", &experience.achievements);
    text
}
