pub mod achievements;
pub mod project_filter;
pub mod section_keywords;
pub mod skill_inquiry;

pub use achievements::AchievementRule;
pub use project_filter::ProjectFilterRule;
pub use section_keywords::SectionKeywordRule;
pub use skill_inquiry::SkillInquiryRule;

/// Shortest term worth matching against a catalog.
pub const MIN_TERM_LEN: usize = 2;
