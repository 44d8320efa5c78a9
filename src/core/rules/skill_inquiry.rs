use super::MIN_TERM_LEN;
use crate::core::matching::{MatchResult, TermExtractor};
use crate::domain::catalog::Catalogs;
use crate::domain::ports::{Rule, RuleOutcome};
use crate::domain::reply::Reply;
use crate::utils::text::char_len;

const SKILL_PATTERNS: &[&str] = &[
    r"(?:do you have|have you got)\s+(?:any\s+)?(?:skills?|knowledge|expertise|experience)\s+(?:in|on|of|with|about)\s+(.+?)[?.!]?\s*$",
    r"(?:are you)\s+(?:skilled|experienced|proficient|good|expert)\s+(?:in|at|with)\s+(.+?)[?.!]?\s*$",
    r"(?:can you)\s+(?:work with|use|code in|develop (?:in|with))\s+(.+?)[?.!]?\s*$",
    r"(?:have you)\s+(?:worked with|used|learned)\s+(.+?)[?.!]?\s*$",
    r"(?:knowledge|expertise|skill)\s+(?:in|on|of|with)\s+(.+?)[?.!]?\s*$",
    r"(?:do you|you)\s+(?:know|have)\s+(.+?)[?.!]?\s*$",
];

/// Terms too vague to look up as a specific skill.
const GENERIC_SKILL_TERMS: &[&str] = &[
    "coding",
    "programming",
    "anything",
    "everything",
    "nothing",
    "something",
    "skills",
    "technologies",
    "any skill",
    "any technology",
];

/// "Do you know X?" style questions answered from the skill catalog.
#[derive(Debug, Clone)]
pub struct SkillInquiryRule {
    extractor: TermExtractor,
}

impl Default for SkillInquiryRule {
    fn default() -> Self {
        Self {
            extractor: TermExtractor::new(SKILL_PATTERNS),
        }
    }
}

impl Rule for SkillInquiryRule {
    fn name(&self) -> &'static str {
        "skill_inquiry"
    }

    fn evaluate(&self, query: &str, catalogs: &Catalogs<'_>) -> RuleOutcome {
        let term = match self.extractor.extract(query) {
            MatchResult::Matched(term) => term,
            MatchResult::NoMatch => return RuleOutcome::FallThrough,
        };

        // A rejected term abandons the whole rule, not just the pattern.
        if char_len(&term) < MIN_TERM_LEN || GENERIC_SKILL_TERMS.contains(&term.as_str()) {
            tracing::debug!(term = %term, "skill term too short or generic");
            return RuleOutcome::FallThrough;
        }

        let skills: Vec<String> = catalogs
            .skills
            .find_matching(&term)
            .into_iter()
            .map(str::to_string)
            .collect();

        tracing::debug!(term = %term, matches = skills.len(), "skill inquiry resolved");
        if skills.is_empty() {
            RuleOutcome::Reply(Reply::SkillNotListed { term })
        } else {
            RuleOutcome::Reply(Reply::SkillFound { term, skills })
        }
    }
}
