//! Category-level aggregation over scored components.
//!
//! Every pass is total: score, group, sum, done. Nothing is mutated
//! incrementally, so there is no stale derived state to invalidate.

use crate::calculator;
use itrm_model::Component;
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw risk score at or above which a component counts as high risk.
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 7.0;

/// One component with its derived revenue-at-risk, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRisk {
    pub name: String,
    pub category: String,
    pub spend: f64,
    pub risk_score: f64,
    pub revenue_impact_pct: f64,
    pub revenue_at_risk_pct: f64,
}

impl ComponentRisk {
    pub fn from_component(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            category: component.category_or_unknown().to_string(),
            spend: component.spend,
            risk_score: component.risk_score_or_zero(),
            revenue_impact_pct: component.impact_pct_or_zero(),
            revenue_at_risk_pct: calculator::revenue_at_risk(component),
        }
    }
}

/// Score a whole inventory. Derived values live on these rows only; the
/// source components are never written back to.
pub fn score_components(components: &[Component]) -> Vec<ComponentRisk> {
    components.iter().map(ComponentRisk::from_component).collect()
}

/// Aggregate row for one category, with members retained for drill-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub category: String,
    /// Sum of member revenue-at-risk percentages
    pub total_risk: f64,
    pub members: Vec<ComponentRisk>,
}

impl CategoryAggregate {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Partition scored components by category. Every row lands in exactly one
/// aggregate; `BTreeMap` keeps category order deterministic.
pub fn aggregate_by_category(rows: &[ComponentRisk]) -> BTreeMap<String, CategoryAggregate> {
    let mut aggregates: BTreeMap<String, CategoryAggregate> = BTreeMap::new();

    for row in rows {
        let entry = aggregates
            .entry(row.category.clone())
            .or_insert_with(|| CategoryAggregate {
                category: row.category.clone(),
                total_risk: 0.0,
                members: Vec::new(),
            });
        entry.total_risk += row.revenue_at_risk_pct;
        entry.members.push(row.clone());
    }

    aggregates
}

/// Summary scalars over all category aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryTotals {
    pub total_components: usize,
    /// Sum of every component's revenue-at-risk
    pub total_risk: f64,
    /// Unweighted mean of per-category totals: a one-component category and
    /// a fifty-component category weigh the same
    pub avg_risk: f64,
}

pub fn summary_totals(aggregates: &BTreeMap<String, CategoryAggregate>) -> SummaryTotals {
    let total_components = aggregates.values().map(CategoryAggregate::member_count).sum();
    let total_risk: f64 = aggregates.values().map(|a| a.total_risk).sum();
    let avg_risk = if aggregates.is_empty() {
        0.0
    } else {
        total_risk / aggregates.len() as f64
    };

    SummaryTotals {
        total_components,
        total_risk,
        avg_risk,
    }
}

/// Components at or above the raw-score threshold. Filtering is on the base
/// risk score, not the derived revenue-at-risk percentage.
pub fn filter_high_risk(rows: &[ComponentRisk], threshold: f64) -> Vec<&ComponentRisk> {
    rows.iter().filter(|r| r.risk_score >= threshold).collect()
}
