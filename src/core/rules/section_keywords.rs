use crate::domain::catalog::Catalogs;
use crate::domain::model::Section;
use crate::domain::ports::{Rule, RuleOutcome};
use crate::domain::reply::Reply;

/// Checked in order; the first section with a keyword in the query wins.
const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (Section::About, &["about", "who"]),
    (Section::Skills, &["skill", "technology", "tech stack"]),
    (Section::Experience, &["experience", "work"]),
    (Section::Projects, &["project"]),
    (Section::Contact, &["contact", "reach", "email"]),
];

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];

/// Plain substring checks, so "this" counts as "hi".
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionKeywordRule;

impl Rule for SectionKeywordRule {
    fn name(&self) -> &'static str {
        "section_keywords"
    }

    fn evaluate(&self, query: &str, _catalogs: &Catalogs<'_>) -> RuleOutcome {
        let section = SECTION_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
            .map(|(section, _)| *section);

        if let Some(section) = section {
            return RuleOutcome::Reply(Reply::SectionOverview { section });
        }

        if GREETING_KEYWORDS.iter().any(|k| query.contains(k)) {
            return RuleOutcome::Reply(Reply::Greeting);
        }

        RuleOutcome::FallThrough
    }
}
