use crate::domain::catalog::Catalogs;
use crate::domain::reply::Reply;

/// Outcome of evaluating one rule against a normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Reply(Reply),
    FallThrough,
}

/// One step of the responder chain. Rules are evaluated in order and the
/// first `RuleOutcome::Reply` wins.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, query: &str, catalogs: &Catalogs<'_>) -> RuleOutcome;
}
