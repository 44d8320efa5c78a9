use crate::utils::text::clean_term;
use regex::Regex;

/// Result of running a term extractor over a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Matched(String),
}

impl MatchResult {
    pub fn term(&self) -> Option<&str> {
        match self {
            MatchResult::Matched(term) => Some(term),
            MatchResult::NoMatch => None,
        }
    }
}

/// Ordered phrasings, each capturing the trailing term in group 1.
/// The first pattern that matches decides the term; later patterns are not tried.
#[derive(Debug, Clone)]
pub struct TermExtractor {
    patterns: Vec<Regex>,
}

impl TermExtractor {
    pub fn new(patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).expect("valid term pattern"))
            .collect();
        Self { patterns }
    }

    pub fn extract(&self, query: &str) -> MatchResult {
        for (index, pattern) in self.patterns.iter().enumerate() {
            if let Some(captures) = pattern.captures(query) {
                let raw = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
                let term = clean_term(raw);
                tracing::debug!(pattern = index, term = %term, "term pattern matched");
                return MatchResult::Matched(term);
            }
        }
        MatchResult::NoMatch
    }
}
