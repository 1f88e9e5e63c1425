mod assessment;
mod component;

pub use assessment::{AssessmentInfo, ExpenseBreakdown};
pub use component::{Component, UNKNOWN_CATEGORY};
