//! Component-level revenue-at-risk report (the simulator page).

use domain::aggregate::{
    self, CategoryAggregate, ComponentRisk, SummaryTotals, DEFAULT_HIGH_RISK_THRESHOLD,
};
use domain::session::SessionContext;
use domain::RiskError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Everything the simulator page renders from one recomputation pass.
///
/// Recoverable upstream gaps land in `warnings`; the report itself is
/// always produced so the caller decides presentation.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentRiskReport {
    pub rows: Vec<ComponentRisk>,
    pub aggregates: BTreeMap<String, CategoryAggregate>,
    pub summary: SummaryTotals,
    pub high_risk: Vec<ComponentRisk>,
    pub high_risk_threshold: f64,
    pub warnings: Vec<String>,
}

/// One full pass: score every component, partition by category, summarize,
/// and pull out the high-risk list.
pub fn build_component_risk_report(
    ctx: &SessionContext,
    threshold: Option<f64>,
) -> ComponentRiskReport {
    let threshold = threshold.unwrap_or(DEFAULT_HIGH_RISK_THRESHOLD);
    let mut warnings = Vec::new();

    if ctx.components().is_empty() {
        warnings.push(RiskError::NoComponents.to_string());
    }

    let rows = aggregate::score_components(ctx.components());
    let aggregates = aggregate::aggregate_by_category(&rows);
    let summary = aggregate::summary_totals(&aggregates);
    let high_risk: Vec<ComponentRisk> = aggregate::filter_high_risk(&rows, threshold)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        session_id = %ctx.id(),
        components = summary.total_components,
        categories = aggregates.len(),
        "component risk report built"
    );

    ComponentRiskReport {
        rows,
        aggregates,
        summary,
        high_risk,
        high_risk_threshold: threshold,
        warnings,
    }
}
