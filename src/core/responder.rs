use crate::core::render::{self, FALLBACK_MARKUP};
use crate::core::rules::{AchievementRule, ProjectFilterRule, SectionKeywordRule, SkillInquiryRule};
use crate::domain::catalog::Catalogs;
use crate::domain::ports::{Rule, RuleOutcome};
use crate::domain::reply::{Reply, ResponsePayload};
use crate::utils::text::normalize;
use once_cell::sync::Lazy;

static DEFAULT_RESPONDER: Lazy<Responder> = Lazy::new(Responder::default);

/// Ordered rule chain. The first rule that replies wins; if none does the
/// fallback sentence is returned.
pub struct Responder {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(vec![
            Box::new(SkillInquiryRule::default()),
            Box::new(ProjectFilterRule::default()),
            Box::new(AchievementRule),
            Box::new(SectionKeywordRule),
        ])
    }
}

impl Responder {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Classify the query. Never fails.
    pub fn classify(&self, raw_query: &str, catalogs: &Catalogs<'_>) -> Reply {
        let query = normalize(raw_query);
        for rule in &self.rules {
            match rule.evaluate(&query, catalogs) {
                RuleOutcome::Reply(reply) => {
                    tracing::debug!(rule = rule.name(), "rule answered");
                    return reply;
                }
                RuleOutcome::FallThrough => {
                    tracing::trace!(rule = rule.name(), "rule fell through");
                }
            }
        }
        tracing::debug!("no rule answered, using fallback");
        Reply::Fallback
    }

    pub fn respond(&self, raw_query: &str, catalogs: &Catalogs<'_>) -> ResponsePayload {
        let reply = self.classify(raw_query, catalogs);

        let markup = render::reply_markup(&reply, catalogs.profile).unwrap_or_else(|e| {
            tracing::error!("❌ Failed to render reply markup: {}", e);
            FALLBACK_MARKUP.to_string()
        });
        let text = render::reply_text(&reply, catalogs.profile);

        ResponsePayload {
            project_refs: reply.project_refs(),
            navigate_to: reply.navigation_hint(),
            reply,
            markup,
            text,
        }
    }
}

/// Answer one query with the standard rule chain.
pub fn respond(raw_query: &str, catalogs: &Catalogs<'_>) -> ResponsePayload {
    DEFAULT_RESPONDER.respond(raw_query, catalogs)
}
