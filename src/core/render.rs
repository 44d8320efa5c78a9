//! Turns a [`Reply`] into the HTML fragment the page embeds and a plain-text
//! rendition for terminals. Every dynamic string goes through askama's HTML
//! escaper, so catalog text and query terms can't inject markup.

use crate::domain::model::{AchievementEntry, Profile, Section};
use crate::domain::reply::{ProjectCard, Reply};
use crate::utils::error::Result;
use crate::utils::text::capitalize_first;
use askama::Template;

pub const ACHIEVEMENTS_SUMMARY: &str = "I'm proud of my achievements including prestigious certifications and awards. Visit my Achievements section to see more!";

pub const EXPERIENCE_OVERVIEW: &str = "I have extensive experience working with various companies and technologies. Visit my Experience section to learn about my professional journey!";

pub const PROJECTS_OVERVIEW: &str = "I've worked on exciting projects including AI systems, enterprise applications, and research work. Check out my Projects section for details!";

pub const CONTACT_OVERVIEW: &str = "You can reach me through various channels! Check out my Contact section for all the ways to connect with me.";

pub const FALLBACK_MARKUP: &str = "That's an interesting question! Try asking about specific skills (e.g., <em>'Do you know Python?'</em>), filter projects by technology (e.g., <em>'Laravel projects'</em>), or explore different sections using the tabs above.";

pub const FALLBACK_TEXT: &str = "That's an interesting question! Try asking about specific skills (e.g., 'Do you know Python?'), filter projects by technology (e.g., 'Laravel projects'), or explore different sections using the tabs above.";

#[derive(Template)]
#[template(path = "chat/skill_found.html")]
struct SkillFoundTemplate<'a> {
    skills: String,
    first: &'a str,
}

#[derive(Template)]
#[template(path = "chat/skill_not_listed.html")]
struct SkillNotListedTemplate {
    term: String,
}

#[derive(Template)]
#[template(path = "chat/project_matches.html")]
struct ProjectMatchesTemplate<'a> {
    count: usize,
    term: &'a str,
    cards: &'a [ProjectCard],
}

#[derive(Template)]
#[template(path = "chat/achievements.html")]
struct AchievementsTemplate<'a> {
    certification_count: usize,
    certifications: &'a [AchievementEntry],
    awards: &'a [AchievementEntry],
}

#[derive(Template)]
#[template(path = "chat/about.html")]
struct AboutTemplate<'a> {
    name: &'a str,
    headline: &'a str,
}

#[derive(Template)]
#[template(path = "chat/skills_overview.html")]
struct SkillsOverviewTemplate {
    featured: String,
}

#[derive(Template)]
#[template(path = "chat/greeting.html")]
struct GreetingTemplate<'a> {
    short_name: &'a str,
}

/// HTML fragment for a reply.
pub fn reply_markup(reply: &Reply, profile: &Profile) -> Result<String> {
    let markup = match reply {
        Reply::SkillFound { skills, .. } => SkillFoundTemplate {
            skills: reply.displayed_skills().join(", "),
            first: skills.first().map(String::as_str).unwrap_or_default(),
        }
        .render()?,
        Reply::SkillNotListed { term } => SkillNotListedTemplate {
            term: capitalize_first(term),
        }
        .render()?,
        Reply::ProjectMatches { term, projects } => ProjectMatchesTemplate {
            count: projects.len(),
            term,
            cards: projects,
        }
        .render()?,
        Reply::Achievements {
            certification_count,
            certifications,
            awards,
        } => AchievementsTemplate {
            certification_count: *certification_count,
            certifications,
            awards,
        }
        .render()?,
        Reply::AchievementsSummary => ACHIEVEMENTS_SUMMARY.to_string(),
        Reply::SectionOverview { section } => section_markup(*section, profile)?,
        Reply::Greeting => GreetingTemplate {
            short_name: &profile.short_name,
        }
        .render()?,
        Reply::Fallback => FALLBACK_MARKUP.to_string(),
    };
    Ok(markup)
}

fn section_markup(section: Section, profile: &Profile) -> Result<String> {
    let markup = match section {
        Section::About => AboutTemplate {
            name: &profile.name,
            headline: &profile.headline,
        }
        .render()?,
        Section::Skills => SkillsOverviewTemplate {
            featured: profile.featured_skills.join(", "),
        }
        .render()?,
        Section::Experience => EXPERIENCE_OVERVIEW.to_string(),
        Section::Projects => PROJECTS_OVERVIEW.to_string(),
        Section::Achievements => ACHIEVEMENTS_SUMMARY.to_string(),
        Section::Contact => CONTACT_OVERVIEW.to_string(),
    };
    Ok(markup)
}

/// Plain-text rendition of a reply.
pub fn reply_text(reply: &Reply, profile: &Profile) -> String {
    match reply {
        Reply::SkillFound { skills, .. } => format!(
            "Yes! I have expertise in {}. This is part of my professional skill set. \
             Feel free to ask about my projects using {} or explore my Skills section for more!",
            reply.displayed_skills().join(", "),
            skills.first().map(String::as_str).unwrap_or_default()
        ),
        Reply::SkillNotListed { term } => format!(
            "Not currently. {} is not listed in my current skill set. However, I'm always \
             expanding my knowledge! Explore my Skills section to see what I specialize in.",
            capitalize_first(term)
        ),
        Reply::ProjectMatches { term, projects } => {
            let mut text = format!("Found {} project(s) related to {}:", projects.len(), term);
            for card in projects {
                text.push_str(&format!(
                    "\n  [{}] {} ({})",
                    card.id,
                    card.title,
                    card.technologies.join(" · ")
                ));
            }
            text.push_str("\nAsk for any project by id to see full details.");
            text
        }
        Reply::Achievements {
            certification_count,
            certifications,
            awards,
        } => {
            let mut text = String::from("My Certifications & Awards:");
            if !certifications.is_empty() {
                text.push_str(&format!("\nCertifications ({certification_count})"));
                for item in certifications {
                    text.push_str(&format!("\n  - {} ({})", item.title, item.description));
                }
            }
            if !awards.is_empty() {
                text.push_str("\nAwards");
                for item in awards {
                    text.push_str(&format!("\n  - {} ({})", item.title, item.description));
                }
            }
            text.push_str("\nVisit my Achievements section to see my complete credentials!");
            text
        }
        Reply::AchievementsSummary => ACHIEVEMENTS_SUMMARY.to_string(),
        Reply::SectionOverview { section } => section_text(*section, profile),
        Reply::Greeting => format!(
            "Hello! I'm the AI assistant for {}'s portfolio. Ask me about specific skills \
             (e.g., 'Do you know AWS?'), search projects by technology (e.g., 'Vue projects'), \
             or explore sections using the tabs above!",
            profile.short_name
        ),
        Reply::Fallback => FALLBACK_TEXT.to_string(),
    }
}

fn section_text(section: Section, profile: &Profile) -> String {
    match section {
        Section::About => format!(
            "I'm {}, {}. Feel free to check out my About section for more details!",
            profile.name, profile.headline
        ),
        Section::Skills if profile.featured_skills.is_empty() => {
            "I have a broad technical skill set! Check out my Skills section to see my full tech stack."
                .to_string()
        }
        Section::Skills => format!(
            "I have expertise in {}, and more! Check out my Skills section to see my full tech stack.",
            profile.featured_skills.join(", ")
        ),
        Section::Experience => EXPERIENCE_OVERVIEW.to_string(),
        Section::Projects => PROJECTS_OVERVIEW.to_string(),
        Section::Achievements => ACHIEVEMENTS_SUMMARY.to_string(),
        Section::Contact => CONTACT_OVERVIEW.to_string(),
    }
}
