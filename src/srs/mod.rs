pub mod intervals;
pub mod mastery;
pub mod priority;
pub mod scheduler;

pub use intervals::{interval_hours, next_level, REVIEW_INTERVAL_HOURS};
pub use mastery::{mastery_score, qualifies_as_mastered};
pub use priority::{priority_score, rank_due_reviews};
pub use scheduler::{schedule_next_review, ScheduledReview};
