pub mod parser;
pub mod template;
pub mod types;
pub use types::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Session document with multi-format support (JSON, YAML, TOML).
///
/// One document describes everything an assessment session captures: the
/// engagement metadata, the baseline financials, the component inventory,
/// and the category-to-revenue-impact mapping. Reports are recomputed from
/// this document on every pass; nothing derived is stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema, Default)]
#[serde(deny_unknown_fields)]
pub struct SessionDocument {
    /// Engagement metadata (client, analyst, date, scope)
    #[serde(default)]
    pub assessment: Option<AssessmentInfo>,

    /// Annual baseline revenue in dollars
    #[serde(default)]
    pub baseline_revenue: f64,

    /// Total IT expense in dollars
    #[serde(default)]
    pub it_expense: f64,

    /// Optional expense breakdown by cost area
    #[serde(default)]
    pub expenses: ExpenseBreakdown,

    /// IT asset inventory
    #[serde(default)]
    pub components: Vec<Component>,

    /// Category name -> revenue impact percentage (0-100 expected).
    /// `None` means the mapping step has not run yet, which is reported as
    /// a warning downstream, not an error.
    #[serde(default)]
    pub category_revenue_impact: Option<HashMap<String, f64>>,

    /// Category name -> total spend in dollars, for the financial snapshot
    #[serde(default)]
    pub category_spend: HashMap<String, f64>,
}

impl SessionDocument {
    /// Impact percentage for a category; map misses and an unpopulated map
    /// both read as 0. Zeroing unmapped categories is the documented policy.
    pub fn impact_pct(&self, category: &str) -> f64 {
        self.category_revenue_impact
            .as_ref()
            .and_then(|m| m.get(category))
            .copied()
            .unwrap_or(0.0)
    }
}
