use crate::domain::catalog::Catalogs;
use crate::domain::model::AchievementKind;
use crate::domain::ports::{Rule, RuleOutcome};
use crate::domain::reply::{Reply, CERTIFICATION_DISPLAY_LIMIT};

const ACHIEVEMENT_KEYWORDS: &[&str] = &[
    "achievement",
    "award",
    "recogni",
    "accomplishment",
    "certification",
    "certif",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementRule;

impl Rule for AchievementRule {
    fn name(&self) -> &'static str {
        "achievements"
    }

    fn evaluate(&self, query: &str, catalogs: &Catalogs<'_>) -> RuleOutcome {
        if !ACHIEVEMENT_KEYWORDS.iter().any(|k| query.contains(k)) {
            return RuleOutcome::FallThrough;
        }

        let achievements = catalogs.achievements;
        if achievements.is_empty() {
            return RuleOutcome::Reply(Reply::AchievementsSummary);
        }

        let certification_count = achievements.of_kind(AchievementKind::Certification).count();
        let certifications = achievements
            .of_kind(AchievementKind::Certification)
            .take(CERTIFICATION_DISPLAY_LIMIT)
            .cloned()
            .collect();
        let awards = achievements.of_kind(AchievementKind::Award).cloned().collect();

        RuleOutcome::Reply(Reply::Achievements {
            certification_count,
            certifications,
            awards,
        })
    }
}
