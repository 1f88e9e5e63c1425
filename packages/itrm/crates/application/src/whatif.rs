//! Baseline-revenue what-if report under per-category adjustments.

use domain::session::SessionContext;
use domain::simulate::{self, SimulatedCategoryRisk};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct WhatIfReport {
    pub baseline_revenue: f64,
    pub rows: Vec<SimulatedCategoryRisk>,
    pub total_components: usize,
    /// Sum of adjusted risk dollars across categories
    pub total_risk: f64,
    /// Unweighted mean of adjusted risk dollars across categories
    pub avg_risk: f64,
    pub warnings: Vec<String>,
}

/// Simulate every mapped category at its adjustment percentage (0 where
/// none was given). An unpopulated impact map yields an empty simulation
/// with a warning, never a failure.
pub fn build_whatif_report(
    ctx: &SessionContext,
    adjustments: &HashMap<String, f64>,
    revenue_override: Option<f64>,
) -> WhatIfReport {
    let mut warnings = Vec::new();

    let empty = HashMap::new();
    let impact_map = match ctx.impact_percentages() {
        Ok(map) => map,
        Err(err) => {
            warnings.push(err.to_string());
            &empty
        }
    };

    let baseline_revenue = revenue_override.unwrap_or_else(|| ctx.baseline_revenue());
    let rows = simulate::simulate_categories(baseline_revenue, impact_map, adjustments);

    for category in adjustments.keys() {
        if !impact_map.contains_key(category) {
            warnings.push(format!(
                "Adjustment for unmapped category ignored: {category}"
            ));
        }
    }

    let total_risk: f64 = rows.iter().map(|r| r.adjusted_risk).sum();
    let avg_risk = if rows.is_empty() {
        0.0
    } else {
        total_risk / rows.len() as f64
    };

    debug!(
        session_id = %ctx.id(),
        categories = rows.len(),
        baseline_revenue,
        "what-if report built"
    );

    WhatIfReport {
        baseline_revenue,
        rows,
        total_components: ctx.components().len(),
        total_risk,
        avg_risk,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itrm_model::SessionDocument;
    use pretty_assertions::assert_eq;

    fn session() -> SessionContext {
        let mut document = SessionDocument::default();
        document.baseline_revenue = 100_000_000.0;

        let mut impact = HashMap::new();
        impact.insert("Cybersecurity".to_string(), 25.0);
        impact.insert("BC/DR".to_string(), 18.0);
        document.category_revenue_impact = Some(impact);

        SessionContext::new(document)
    }

    #[test]
    fn test_whatif_with_adjustments() {
        let mut adjustments = HashMap::new();
        adjustments.insert("Cybersecurity".to_string(), -20.0);

        let report = build_whatif_report(&session(), &adjustments, None);

        assert_eq!(report.rows.len(), 2);
        let cyber = report
            .rows
            .iter()
            .find(|r| r.category == "Cybersecurity")
            .unwrap();
        assert_eq!(cyber.baseline_risk, 25_000_000.0);
        assert_eq!(cyber.adjusted_risk, 20_000_000.0);

        // 20M + 18M
        assert_eq!(report.total_risk, 38_000_000.0);
        assert_eq!(report.avg_risk, 19_000_000.0);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_revenue_override() {
        let report = build_whatif_report(&session(), &HashMap::new(), Some(200_000_000.0));
        let cyber = report
            .rows
            .iter()
            .find(|r| r.category == "Cybersecurity")
            .unwrap();
        assert_eq!(cyber.baseline_risk, 50_000_000.0);
    }

    #[test]
    fn test_unpopulated_impact_map_yields_warning_not_error() {
        let ctx = SessionContext::new(SessionDocument::default());
        let report = build_whatif_report(&ctx, &HashMap::new(), None);

        assert!(report.rows.is_empty());
        assert_eq!(report.total_risk, 0.0);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_unmapped_adjustment_is_flagged() {
        let mut adjustments = HashMap::new();
        adjustments.insert("Telecom".to_string(), 10.0);

        let report = build_whatif_report(&session(), &adjustments, None);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("Telecom")));
    }
}
