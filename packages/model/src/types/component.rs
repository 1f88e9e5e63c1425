use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category assigned to components that were never mapped.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One IT asset record as entered on the mapping page.
///
/// `risk_score` and `revenue_impact_pct` are optional because inventory
/// entry happens before scoring; incomplete records read as 0 through the
/// lenient accessors below rather than erroring. Names are not guaranteed
/// unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Component {
    pub name: String,

    /// Grouping key into the category impact map
    #[serde(default)]
    pub category: Option<String>,

    /// Annual spend in dollars
    #[serde(default)]
    pub spend: f64,

    /// Base risk score, 0-10 by convention (not enforced)
    #[serde(default)]
    pub risk_score: Option<f64>,

    /// Revenue impact percentage attached per-component, 0-100 expected
    #[serde(default)]
    pub revenue_impact_pct: Option<f64>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            spend: 0.0,
            risk_score: None,
            revenue_impact_pct: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_spend(mut self, spend: f64) -> Self {
        self.spend = spend;
        self
    }

    pub fn with_risk_score(mut self, score: f64) -> Self {
        self.risk_score = Some(score);
        self
    }

    pub fn with_revenue_impact_pct(mut self, pct: f64) -> Self {
        self.revenue_impact_pct = Some(pct);
        self
    }

    /// Lenient read: unscored components count as zero risk.
    pub fn risk_score_or_zero(&self) -> f64 {
        self.risk_score.unwrap_or(0.0)
    }

    /// Lenient read: components without an impact percentage count as zero.
    pub fn impact_pct_or_zero(&self) -> f64 {
        self.revenue_impact_pct.unwrap_or(0.0)
    }

    /// Lenient read: unmapped components land in the "Unknown" category.
    pub fn category_or_unknown(&self) -> &str {
        self.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }
}
