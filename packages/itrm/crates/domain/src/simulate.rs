//! Baseline-revenue what-if arithmetic.
//!
//! Baseline risk per category: baseline_revenue * impact_pct / 100.
//! An adjustment percentage then scales that baseline: at -100% the
//! simulated value is exactly 0. Values below -100% are accepted and go
//! negative; the interactive surface clamps its sliders to [-100, 100] but
//! the arithmetic itself does not.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// `base * (1 + adjustment_pct / 100)` over the full numeric range.
pub fn apply_adjustment(base: f64, adjustment_pct: f64) -> f64 {
    base * (1.0 + adjustment_pct / 100.0)
}

/// Baseline revenue-at-risk dollars per mapped category.
pub fn baseline_risk_by_category(
    baseline_revenue: f64,
    impact_map: &HashMap<String, f64>,
) -> BTreeMap<String, f64> {
    impact_map
        .iter()
        .map(|(category, impact_pct)| (category.clone(), baseline_revenue * impact_pct / 100.0))
        .collect()
}

/// One category's simulation row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedCategoryRisk {
    pub category: String,
    pub baseline_risk: f64,
    pub adjustment_pct: f64,
    pub adjusted_risk: f64,
}

/// Simulate every mapped category; categories without an entry in
/// `adjustments` run at 0%. Rows come back in category order.
pub fn simulate_categories(
    baseline_revenue: f64,
    impact_map: &HashMap<String, f64>,
    adjustments: &HashMap<String, f64>,
) -> Vec<SimulatedCategoryRisk> {
    baseline_risk_by_category(baseline_revenue, impact_map)
        .into_iter()
        .map(|(category, baseline_risk)| {
            let adjustment_pct = adjustments.get(&category).copied().unwrap_or(0.0);
            SimulatedCategoryRisk {
                adjusted_risk: apply_adjustment(baseline_risk, adjustment_pct),
                category,
                baseline_risk,
                adjustment_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_identities() {
        for base in [0.0, 1.0, 2_500_000.0, 1e9] {
            assert_eq!(apply_adjustment(base, -100.0), 0.0);
            assert_eq!(apply_adjustment(base, 0.0), base);
        }
        assert_eq!(apply_adjustment(200.0, 50.0), 300.0);
        // Below -100% is accepted and goes negative
        assert_eq!(apply_adjustment(100.0, -150.0), -50.0);
    }

    #[test]
    fn test_baseline_risk_per_category() {
        let mut impact_map = HashMap::new();
        impact_map.insert("Cybersecurity".to_string(), 25.0);
        impact_map.insert("BC/DR".to_string(), 18.0);

        let baseline = baseline_risk_by_category(100_000_000.0, &impact_map);
        assert_eq!(baseline["Cybersecurity"], 25_000_000.0);
        assert_eq!(baseline["BC/DR"], 18_000_000.0);
    }

    #[test]
    fn test_simulation_rows_sorted_and_defaulted() {
        let mut impact_map = HashMap::new();
        impact_map.insert("Telecom".to_string(), 10.0);
        impact_map.insert("Hardware".to_string(), 20.0);

        let mut adjustments = HashMap::new();
        adjustments.insert("Telecom".to_string(), -50.0);

        let rows = simulate_categories(1_000_000.0, &impact_map, &adjustments);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Hardware");
        assert_eq!(rows[0].adjustment_pct, 0.0);
        assert_eq!(rows[0].adjusted_risk, 200_000.0);
        assert_eq!(rows[1].category, "Telecom");
        assert_eq!(rows[1].adjusted_risk, 50_000.0);
    }
}
