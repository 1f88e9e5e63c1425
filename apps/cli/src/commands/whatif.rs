use crate::ui;
use anyhow::{Context, Result};
use clap::Parser;
use itrm::application::build_whatif_report;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct WhatIfCommand {
    /// Session file or directory (defaults to the current directory)
    #[arg(short, long)]
    pub session: Option<PathBuf>,

    /// Per-category adjustment, repeatable: --adjust "Cybersecurity=-25"
    #[arg(short, long = "adjust", value_name = "CATEGORY=PCT")]
    pub adjustments: Vec<String>,

    /// Baseline revenue override in dollars
    #[arg(short, long)]
    pub revenue: Option<f64>,
}

impl WhatIfCommand {
    pub fn execute(self) -> Result<()> {
        let ctx = super::resolve_session(self.session.as_ref())?;
        let adjustments = parse_adjustments(&self.adjustments)?;
        let report = build_whatif_report(&ctx, &adjustments, self.revenue);

        for warning in &report.warnings {
            ui::warn(warning);
        }

        if report.rows.is_empty() {
            ui::info("No valid simulation data to display.");
            return Ok(());
        }

        ui::metric("Baseline Revenue", ui::money(report.baseline_revenue));
        ui::metric("Total Components", report.total_components.to_string());
        ui::metric("Total Simulated Revenue at Risk", ui::money(report.total_risk));
        ui::metric("Average Category Risk", ui::money(report.avg_risk));

        ui::heading("Risk Simulation by Category");
        let mut table = ui::table(&["Category", "Baseline Risk", "Adjustment %", "Adjusted Risk"]);
        for row in &report.rows {
            table.add_row(vec![
                row.category.clone(),
                ui::money(row.baseline_risk),
                format!("{:+.0}%", row.adjustment_pct),
                ui::money(row.adjusted_risk),
            ]);
        }
        println!("{table}");

        Ok(())
    }
}

/// Parse repeated `CATEGORY=PCT` arguments. Later repeats of the same
/// category win.
fn parse_adjustments(args: &[String]) -> Result<HashMap<String, f64>> {
    let mut adjustments = HashMap::new();
    for arg in args {
        let (category, pct) = arg
            .split_once('=')
            .with_context(|| format!("Expected CATEGORY=PCT, got: {arg}"))?;
        let pct: f64 = pct
            .trim()
            .parse()
            .with_context(|| format!("Invalid adjustment percentage in: {arg}"))?;
        adjustments.insert(category.trim().to_string(), pct);
    }
    Ok(adjustments)
}
