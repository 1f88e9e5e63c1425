//! Per-component risk arithmetic.
//!
//! Formulas:
//! 1. Revenue at risk (%): impact_pct * risk_score / 100
//!    - How much revenue exposure one component carries.
//! 2. Adjusted risk score: risk_score * (1 + category_impact_pct / 100)
//!    - Base score scaled by how revenue-critical its category is.
//!
//! Both are pure reads over the component and the impact map; missing
//! fields and map misses count as 0.

use itrm_model::Component;
use std::collections::HashMap;

/// Round half-away-from-zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Revenue-at-risk percentage for one component, rounded to 2 decimals.
pub fn revenue_at_risk(component: &Component) -> f64 {
    let exposure = component.impact_pct_or_zero() * component.risk_score_or_zero() / 100.0;
    round_to(exposure, 2)
}

/// Risk score adjusted by the component's category impact, rounded to
/// 1 decimal. Categories absent from the map contribute no adjustment.
pub fn adjusted_risk_score(component: &Component, impact_map: &HashMap<String, f64>) -> f64 {
    let impact_pct = impact_map
        .get(component.category_or_unknown())
        .copied()
        .unwrap_or(0.0);
    round_to(component.risk_score_or_zero() * (1.0 + impact_pct / 100.0), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_at_risk_formula() {
        let c = Component::new("NetApp")
            .with_risk_score(8.0)
            .with_revenue_impact_pct(25.0);
        assert_eq!(revenue_at_risk(&c), 2.0);

        let c = Component::new("VMware")
            .with_risk_score(7.0)
            .with_revenue_impact_pct(33.3);
        // 33.3 * 7 / 100 = 2.331 -> 2.33
        assert_eq!(revenue_at_risk(&c), 2.33);
    }

    #[test]
    fn test_revenue_at_risk_defaults_missing_fields_to_zero() {
        assert_eq!(revenue_at_risk(&Component::new("unscored")), 0.0);

        let only_impact = Component::new("half").with_revenue_impact_pct(40.0);
        assert_eq!(revenue_at_risk(&only_impact), 0.0);
    }

    #[test]
    fn test_adjusted_score_scales_by_category_impact() {
        let mut map = HashMap::new();
        map.insert("Cybersecurity".to_string(), 25.0);

        let c = Component::new("Firewall")
            .with_category("Cybersecurity")
            .with_risk_score(6.0);
        assert_eq!(adjusted_risk_score(&c, &map), 7.5);
    }

    #[test]
    fn test_adjusted_score_map_miss_leaves_score_unchanged() {
        let map = HashMap::new();
        let c = Component::new("Switch")
            .with_category("Telecom")
            .with_risk_score(4.2);
        assert_eq!(adjusted_risk_score(&c, &map), 4.2);
    }

    #[test]
    fn test_adjusted_score_rounds_to_one_decimal() {
        let mut map = HashMap::new();
        map.insert("Hardware".to_string(), 17.0);

        let c = Component::new("SAN")
            .with_category("Hardware")
            .with_risk_score(7.0);
        // 7 * 1.17 = 8.19 -> 8.2
        assert_eq!(adjusted_risk_score(&c, &map), 8.2);
    }
}
