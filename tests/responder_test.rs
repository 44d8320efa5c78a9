use anyhow::Result;
use portfolio_chat::{
    respond, AchievementCatalog, Catalogs, KnowledgeBase, ProjectCatalog, Reply, Section,
    SkillCatalog,
};

const FIXTURE: &str = r#"
[profile]
name = "Ada Example"
short_name = "Ada"
headline = "a software engineer who builds AI products"
featured_skills = ["Python", "JavaScript"]

[skills]
tags = ["Python", "JavaScript", "Machine Learning"]

[[projects]]
id = "web1"
title = "Marketplace"
icon = "fas fa-couch"
description = "Furniture marketplace for designers"
technologies = ["Laravel", "Vue.js", "MySQL"]

[[projects]]
id = "cloud1"
title = "Hotel Hub"
icon = "fas fa-hotel"
description = "Guest data platform"
technologies = ["Laravel", "AWS", "DynamoDB"]

[[projects]]
id = "ml1"
title = "Edge Assistant"
icon = "fas fa-microchip"
category = "machine-learning"
description = "Offline retrieval augmented generation"
technologies = ["FastAPI", "Ollama", "Docker"]

[[achievements]]
title = "AWS Certified Developer"
description = "Amazon Web Services"

[[achievements]]
title = "Runner-up, IT Olympiad 2019"
description = "ICT Division"
"#;

fn knowledge() -> KnowledgeBase {
    KnowledgeBase::from_toml_str(FIXTURE).expect("fixture parses")
}

#[test]
fn test_every_query_gets_a_non_empty_reply() {
    let knowledge = knowledge();
    let queries = [
        "",
        "   ",
        "?!?",
        "do you know",
        "x",
        "Tell me something completely unrelated",
        "projects",
        "🦀🦀🦀",
    ];
    for query in queries {
        let payload = knowledge.respond(query);
        assert!(!payload.markup.is_empty(), "empty markup for {query:?}");
        assert!(!payload.text.is_empty(), "empty text for {query:?}");
    }
    assert!(knowledge.respond("").is_fallback());
}

#[test]
fn test_known_skill_is_confirmed() {
    let payload = knowledge().respond("Do you know Python?");
    match &payload.reply {
        Reply::SkillFound { skills, .. } => assert_eq!(skills, &vec!["Python".to_string()]),
        other => panic!("unexpected reply: {other:?}"),
    }
    assert!(payload.markup.contains("Python"));
    assert!(payload.text.starts_with("Yes!"));
}

#[test]
fn test_unknown_skill_is_denied_by_name() {
    let profile = knowledge().profile().clone();
    let skills = SkillCatalog::from_skills(["Rust", "Go"]);
    let projects = ProjectCatalog::default();
    let achievements = AchievementCatalog::default();
    let catalogs = Catalogs {
        profile: &profile,
        skills: &skills,
        projects: &projects,
        achievements: &achievements,
    };

    let payload = respond("Do you know Python?", &catalogs);
    assert!(matches!(payload.reply, Reply::SkillNotListed { .. }));
    assert!(payload.markup.contains("<strong>Python</strong>"));
    assert!(payload.text.contains("Python is not listed"));
}

#[test]
fn test_term_inside_skill_matches() {
    match knowledge().respond("do you know script?").reply {
        Reply::SkillFound { skills, .. } => assert_eq!(skills, vec!["JavaScript"]),
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn test_skill_inside_term_matches() {
    match knowledge().respond("Are you skilled in JavaScript frameworks?").reply {
        Reply::SkillFound { term, skills } => {
            assert_eq!(term, "javascript frameworks");
            assert_eq!(skills, vec!["JavaScript"]);
        }
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn test_vue_projects_finds_the_single_vue_project() -> Result<()> {
    let payload = knowledge().respond("Vue projects");
    match &payload.reply {
        Reply::ProjectMatches { term, projects } => {
            assert_eq!(term, "vue");
            assert_eq!(projects.len(), 1);
        }
        other => panic!("unexpected reply: {other:?}"),
    }
    assert_eq!(payload.project_refs, vec!["web1"]);
    assert!(payload.markup.contains("Found <strong>1</strong> project(s)"));
    assert!(payload.markup.contains(r#"data-project-id="web1""#));

    let json = serde_json::to_value(&payload)?;
    assert_eq!(json["reply"]["kind"], "project_matches");
    assert_eq!(json["project_refs"][0], "web1");
    Ok(())
}

#[test]
fn test_bare_technology_name_searches_projects() {
    let payload = knowledge().respond("AWS");
    assert_eq!(payload.project_refs, vec!["cloud1"]);
}

#[test]
fn test_show_me_projects_is_not_a_filter() {
    let payload = knowledge().respond("show me projects");
    assert_eq!(
        payload.reply,
        Reply::SectionOverview {
            section: Section::Projects
        }
    );
    assert_eq!(payload.navigate_to, Some(Section::Projects));
    assert!(!payload.text.contains("Found"));
}

#[test]
fn test_unmatched_filter_falls_through_to_sections() {
    let payload = knowledge().respond("kotlin projects");
    assert_eq!(payload.navigate_to, Some(Section::Projects));
}

#[test]
fn test_achievements_are_split_into_awards_and_certifications() {
    let payload = knowledge().respond("Show me your achievements");
    match &payload.reply {
        Reply::Achievements {
            certification_count,
            certifications,
            awards,
        } => {
            assert_eq!(*certification_count, 1);
            assert_eq!(certifications[0].title, "AWS Certified Developer");
            assert_eq!(awards[0].title, "Runner-up, IT Olympiad 2019");
        }
        other => panic!("unexpected reply: {other:?}"),
    }
    assert!(payload.markup.contains("Certifications (1)"));
    assert_eq!(payload.navigate_to, None);
}

#[test]
fn test_skill_phrasing_outranks_achievement_keywords() {
    let payload = knowledge().respond("Do you have any certifications?");
    assert!(matches!(payload.reply, Reply::SkillNotListed { .. }));
}

#[test]
fn test_section_keywords_and_greeting() {
    let knowledge = knowledge();

    let about = knowledge.respond("Who are you?");
    assert_eq!(about.navigate_to, Some(Section::About));
    assert!(about.text.contains("Ada Example"));

    let experience = knowledge.respond("Where did you work before?");
    assert_eq!(
        experience.reply,
        Reply::SectionOverview {
            section: Section::Experience
        }
    );
    assert_eq!(experience.navigate_to, None);

    let greeting = knowledge.respond("hello");
    assert_eq!(greeting.reply, Reply::Greeting);
    assert!(greeting.text.contains("Ada's portfolio"));
}

#[test]
fn test_responses_are_idempotent() {
    let knowledge = knowledge();
    for query in ["Vue projects", "do you know rust", "awards", "hey"] {
        assert_eq!(knowledge.respond(query), knowledge.respond(query));
    }
}

#[test]
fn test_matching_ignores_case() {
    let knowledge = knowledge();
    let replies: Vec<Reply> = ["Do you know PYTHON", "do you know python", "Do You Know PyThOn"]
        .iter()
        .map(|q| knowledge.respond(q).reply)
        .collect();
    assert!(replies.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(matches!(replies[0], Reply::SkillFound { .. }));
}

#[test]
fn test_markup_never_echoes_raw_tags() {
    let payload = knowledge().respond("do you know <b>rust</b>?");
    assert!(matches!(payload.reply, Reply::SkillNotListed { .. }));
    assert!(!payload.markup.contains("<b>"));
}

#[test]
fn test_builtin_knowledge_answers() {
    let knowledge = KnowledgeBase::builtin().expect("builtin knowledge parses");

    assert!(matches!(
        knowledge.respond("Do you know AWS?").reply,
        Reply::SkillFound { .. }
    ));
    assert!(knowledge.respond("Laravel projects").project_refs.len() > 5);
    let achievements = knowledge.respond("What certifications do you have?");
    assert_eq!(achievements.reply, Reply::AchievementsSummary);
    assert!(achievements.text.contains("Achievements section"));
}
