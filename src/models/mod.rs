pub mod level;
pub mod record;
pub mod summary;

pub use level::Level;
pub use record::ActivityRecord;
pub use summary::{PromotionSummary, Totals};

/// Ordered sequence of records; always persisted as a whole.
pub type Dataset = Vec<ActivityRecord>;
