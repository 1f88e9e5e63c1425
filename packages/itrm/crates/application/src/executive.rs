//! Executive dashboard report: adjusted risk scores, category heatmap,
//! financial snapshot, and inferred focus areas.

use domain::calculator;
use domain::session::SessionContext;
use domain::RiskError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Traffic-light band for the average adjusted risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Green,
    Amber,
    Red,
}

impl RiskBand {
    /// Green below 4, amber below 7, red at 7 and above.
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            RiskBand::Green
        } else if score < 7.0 {
            RiskBand::Amber
        } else {
            RiskBand::Red
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::Green => write!(f, "Green"),
            RiskBand::Amber => write!(f, "Amber"),
            RiskBand::Red => write!(f, "Red"),
        }
    }
}

/// One component with its category-adjusted risk score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedComponentRow {
    pub name: String,
    pub category: String,
    pub spend: f64,
    pub risk_score: f64,
    pub adjusted_risk_score: f64,
}

/// Mean adjusted score per category (the heatmap bars).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHeatmapRow {
    pub category: String,
    pub avg_adjusted_score: f64,
}

/// Category spend exposed to its revenue impact percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySnapshotRow {
    pub category: String,
    pub spend: f64,
    pub revenue_impact_pct: f64,
    pub revenue_at_risk_dollars: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveReport {
    /// Total IT expense; falls back to the summed expense breakdown when
    /// the headline figure was not entered
    pub total_it_spend: f64,
    /// IT spend as a percentage of baseline revenue (0 when no revenue)
    pub it_spend_to_revenue_pct: f64,
    pub adjusted_rows: Vec<AdjustedComponentRow>,
    pub average_adjusted_risk: f64,
    pub band: RiskBand,
    pub heatmap: Vec<CategoryHeatmapRow>,
    pub snapshot: Vec<CategorySnapshotRow>,
    pub total_revenue_at_risk_dollars: f64,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn build_executive_report(ctx: &SessionContext) -> ExecutiveReport {
    let mut warnings = Vec::new();

    // An unpopulated impact map zeroes every adjustment rather than failing
    // the page.
    let empty = HashMap::new();
    let impact_map = match ctx.impact_percentages() {
        Ok(map) => map,
        Err(err) => {
            warnings.push(err.to_string());
            &empty
        }
    };

    if ctx.components().is_empty() {
        warnings.push(RiskError::NoComponents.to_string());
    }

    let adjusted_rows: Vec<AdjustedComponentRow> = ctx
        .components()
        .iter()
        .map(|c| AdjustedComponentRow {
            name: c.name.clone(),
            category: c.category_or_unknown().to_string(),
            spend: c.spend,
            risk_score: c.risk_score_or_zero(),
            adjusted_risk_score: calculator::adjusted_risk_score(c, impact_map),
        })
        .collect();

    let average_adjusted_risk = if adjusted_rows.is_empty() {
        0.0
    } else {
        adjusted_rows.iter().map(|r| r.adjusted_risk_score).sum::<f64>()
            / adjusted_rows.len() as f64
    };

    let document = ctx.document();
    let total_it_spend = if document.it_expense > 0.0 {
        document.it_expense
    } else {
        document.expenses.total()
    };
    let it_spend_to_revenue_pct = if ctx.baseline_revenue() > 0.0 {
        total_it_spend / ctx.baseline_revenue() * 100.0
    } else {
        0.0
    };

    let heatmap = heatmap_rows(&adjusted_rows);
    let (snapshot, total_revenue_at_risk_dollars) = financial_snapshot(ctx, impact_map);

    if snapshot.is_empty() {
        warnings.push(
            "Missing data: define category spend and revenue impact for the financial snapshot."
                .to_string(),
        );
    }

    let recommendations = infer_recommendations(ctx, impact_map);

    debug!(
        session_id = %ctx.id(),
        components = adjusted_rows.len(),
        avg_adjusted_risk = average_adjusted_risk,
        "executive report built"
    );

    ExecutiveReport {
        band: RiskBand::from_score(average_adjusted_risk),
        total_it_spend,
        it_spend_to_revenue_pct,
        adjusted_rows,
        average_adjusted_risk,
        heatmap,
        snapshot,
        total_revenue_at_risk_dollars,
        recommendations,
        warnings,
    }
}

fn heatmap_rows(rows: &[AdjustedComponentRow]) -> Vec<CategoryHeatmapRow> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = sums.entry(&row.category).or_insert((0.0, 0));
        entry.0 += row.adjusted_risk_score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(category, (sum, count))| CategoryHeatmapRow {
            category: category.to_string(),
            avg_adjusted_score: sum / count as f64,
        })
        .collect()
}

fn financial_snapshot(
    ctx: &SessionContext,
    impact_map: &HashMap<String, f64>,
) -> (Vec<CategorySnapshotRow>, f64) {
    let spend_by_category: BTreeMap<&String, &f64> = ctx.category_spend().iter().collect();

    let rows: Vec<CategorySnapshotRow> = spend_by_category
        .into_iter()
        .map(|(category, spend)| {
            let impact_pct = impact_map.get(category).copied().unwrap_or(0.0);
            CategorySnapshotRow {
                category: category.clone(),
                spend: *spend,
                revenue_impact_pct: impact_pct,
                revenue_at_risk_dollars: spend * impact_pct / 100.0,
            }
        })
        .collect();

    let total = rows.iter().map(|r| r.revenue_at_risk_dollars).sum();
    (rows, total)
}

/// Focus areas inferred from the session: the highest-spend category and
/// the highest revenue-impact category.
fn infer_recommendations(ctx: &SessionContext, impact_map: &HashMap<String, f64>) -> Vec<String> {
    let mut recommendations = Vec::new();

    let mut spend_totals: HashMap<&str, f64> = HashMap::new();
    for c in ctx.components() {
        *spend_totals.entry(c.category_or_unknown()).or_insert(0.0) += c.spend;
    }
    if let Some((category, _)) = spend_totals
        .iter()
        .filter(|(_, spend)| **spend > 0.0)
        .max_by(|a, b| a.1.total_cmp(b.1))
    {
        recommendations.push(format!(
            "Evaluate optimization opportunities in high-spend area: {category}"
        ));
    }

    if let Some((category, _)) = impact_map.iter().max_by(|a, b| a.1.total_cmp(b.1)) {
        recommendations.push(format!(
            "Ensure resilience in high revenue-impact category: {category}"
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use itrm_model::{Component, SessionDocument};
    use pretty_assertions::assert_eq;

    fn sample_session() -> SessionContext {
        let mut document = SessionDocument::default();
        document.baseline_revenue = 100_000_000.0;
        document.it_expense = 12_000_000.0;
        document.components = vec![
            Component::new("Firewall")
                .with_category("Cybersecurity")
                .with_spend(1_400_000.0)
                .with_risk_score(6.0),
            Component::new("Backup")
                .with_category("BC/DR")
                .with_spend(800_000.0)
                .with_risk_score(4.0),
        ];

        let mut impact = HashMap::new();
        impact.insert("Cybersecurity".to_string(), 25.0);
        impact.insert("BC/DR".to_string(), 18.0);
        document.category_revenue_impact = Some(impact);

        document
            .category_spend
            .insert("Cybersecurity".to_string(), 1_400_000.0);
        document
            .category_spend
            .insert("BC/DR".to_string(), 800_000.0);

        SessionContext::new(document)
    }

    #[test]
    fn test_adjusted_scores_and_average() {
        let report = build_executive_report(&sample_session());

        // 6 * 1.25 = 7.5; 4 * 1.18 = 4.72 -> 4.7
        assert_eq!(report.adjusted_rows[0].adjusted_risk_score, 7.5);
        assert_eq!(report.adjusted_rows[1].adjusted_risk_score, 4.7);
        assert!((report.average_adjusted_risk - 6.1).abs() < 1e-9);
        assert_eq!(report.band, RiskBand::Amber);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_financial_snapshot_dollars() {
        let report = build_executive_report(&sample_session());

        let cyber = report
            .snapshot
            .iter()
            .find(|r| r.category == "Cybersecurity")
            .unwrap();
        assert_eq!(cyber.revenue_at_risk_dollars, 350_000.0);

        // 350_000 + 144_000
        assert_eq!(report.total_revenue_at_risk_dollars, 494_000.0);
    }

    #[test]
    fn test_recommendations_name_top_categories() {
        let report = build_executive_report(&sample_session());
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("high-spend area: Cybersecurity")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("high revenue-impact category: Cybersecurity")));
    }

    #[test]
    fn test_missing_impact_map_warns_and_zeroes_adjustment() {
        let mut document = SessionDocument::default();
        document.components =
            vec![Component::new("Switch").with_category("Telecom").with_risk_score(5.0)];
        let report = build_executive_report(&SessionContext::new(document));

        assert_eq!(report.adjusted_rows[0].adjusted_risk_score, 5.0);
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn test_it_spend_kpis() {
        let report = build_executive_report(&sample_session());
        assert_eq!(report.total_it_spend, 12_000_000.0);
        assert!((report.it_spend_to_revenue_pct - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_it_spend_falls_back_to_expense_breakdown() {
        let mut document = SessionDocument::default();
        document.expenses.hardware = 2_500_000.0;
        document.expenses.telecom = 700_000.0;
        let report = build_executive_report(&SessionContext::new(document));

        assert_eq!(report.total_it_spend, 3_200_000.0);
        // No baseline revenue entered, so the ratio reads as zero
        assert_eq!(report.it_spend_to_revenue_pct, 0.0);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RiskBand::from_score(3.9), RiskBand::Green);
        assert_eq!(RiskBand::from_score(4.0), RiskBand::Amber);
        assert_eq!(RiskBand::from_score(6.9), RiskBand::Amber);
        assert_eq!(RiskBand::from_score(7.0), RiskBand::Red);
    }
}
