use super::MIN_TERM_LEN;
use crate::core::matching::{MatchResult, TermExtractor};
use crate::domain::catalog::Catalogs;
use crate::domain::ports::{Rule, RuleOutcome};
use crate::domain::reply::{ProjectCard, Reply};
use crate::utils::text::{char_len, clean_term, contains_either_way};

const PROJECT_PATTERNS: &[&str] = &[
    r"projects?\s+(?:on|with|using|in|about|related to|for)\s+(.+?)[?.!]?\s*$",
    r"(?:show|list|find|get|display)\s+(?:me\s+)?(?:your\s+)?projects?\s+(?:on|with|using|in|about|for)\s+(.+?)[?.!]?\s*$",
    r"(?:show|list|find|get|display)\s+(?:me\s+)?(.+?)\s+projects?[?.!]?\s*$",
    r"^(.+?)\s+projects?[?.!]?\s*$",
];

/// Words a project phrasing can capture that never name a technology.
const GENERIC_PROJECT_TERMS: &[&str] = &[
    "your", "the", "all", "some", "any", "my", "his", "her", "show", "me", "what", "about",
    "those", "these",
];

/// Queries this short may name a technology on their own ("aws", "web3.js").
const BARE_WORD_MAX_WORDS: usize = 3;

/// "Vue projects", "projects using AWS" and bare technology names.
#[derive(Debug, Clone)]
pub struct ProjectFilterRule {
    extractor: TermExtractor,
}

impl Default for ProjectFilterRule {
    fn default() -> Self {
        Self {
            extractor: TermExtractor::new(PROJECT_PATTERNS),
        }
    }
}

impl ProjectFilterRule {
    fn bare_technology_word(query: &str, catalogs: &Catalogs<'_>) -> Option<String> {
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() || words.len() > BARE_WORD_MAX_WORDS {
            return None;
        }

        let technologies = catalogs.projects.technology_tags();
        words
            .into_iter()
            .map(clean_term)
            .filter(|word| char_len(word) >= MIN_TERM_LEN)
            .find(|word| technologies.iter().any(|tech| contains_either_way(tech, word)))
    }
}

impl Rule for ProjectFilterRule {
    fn name(&self) -> &'static str {
        "project_filter"
    }

    fn evaluate(&self, query: &str, catalogs: &Catalogs<'_>) -> RuleOutcome {
        let term = match self.extractor.extract(query) {
            MatchResult::Matched(term) if !term.is_empty() => Some(term),
            _ => Self::bare_technology_word(query, catalogs),
        };

        let Some(term) = term else {
            return RuleOutcome::FallThrough;
        };

        if char_len(&term) < MIN_TERM_LEN || GENERIC_PROJECT_TERMS.contains(&term.as_str()) {
            tracing::debug!(term = %term, "project term too short or generic");
            return RuleOutcome::FallThrough;
        }

        let projects: Vec<ProjectCard> = catalogs
            .projects
            .search(&term)
            .into_iter()
            .map(ProjectCard::from)
            .collect();

        tracing::debug!(term = %term, matches = projects.len(), "project filter resolved");
        if projects.is_empty() {
            RuleOutcome::FallThrough
        } else {
            RuleOutcome::Reply(Reply::ProjectMatches { term, projects })
        }
    }
}
