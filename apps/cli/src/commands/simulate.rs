use crate::ui;
use anyhow::Result;
use clap::Parser;
use itrm::application::build_component_risk_report;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct SimulateCommand {
    /// Session file or directory (defaults to the current directory)
    #[arg(short, long)]
    pub session: Option<PathBuf>,

    /// High-risk score threshold override
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

impl SimulateCommand {
    pub fn execute(self) -> Result<()> {
        let ctx = super::resolve_session(self.session.as_ref())?;
        let report = build_component_risk_report(&ctx, self.threshold);

        for warning in &report.warnings {
            ui::warn(warning);
        }

        ui::metric("Total Components", report.summary.total_components.to_string());
        ui::metric("Total Revenue at Risk", ui::pct(report.summary.total_risk));
        ui::metric("Average Category Risk", ui::pct(report.summary.avg_risk));

        ui::heading("Component-Level Revenue at Risk");
        let mut table = ui::table(&[
            "Name",
            "Category",
            "Spend",
            "Risk Score",
            "Revenue Impact %",
            "Revenue at Risk %",
        ]);
        for row in &report.rows {
            table.add_row(vec![
                row.name.clone(),
                row.category.clone(),
                ui::money(row.spend),
                format!("{:.0}", row.risk_score),
                format!("{:.1}%", row.revenue_impact_pct),
                ui::pct(row.revenue_at_risk_pct),
            ]);
        }
        println!("{table}");

        ui::heading("Risk Summary by Category");
        let mut table = ui::table(&["Category", "Total Revenue at Risk %", "# of Components"]);
        for aggregate in report.aggregates.values() {
            table.add_row(vec![
                aggregate.category.clone(),
                ui::pct(aggregate.total_risk),
                aggregate.member_count().to_string(),
            ]);
        }
        println!("{table}");

        if report.high_risk.is_empty() {
            ui::info(format!(
                "No components above risk score threshold ({})",
                report.high_risk_threshold
            ));
        } else {
            ui::heading(&format!(
                "High-Risk Components (Score >= {})",
                report.high_risk_threshold
            ));
            let mut table = ui::table(&["Name", "Category", "Risk Score", "Revenue at Risk %"]);
            for row in &report.high_risk {
                table.add_row(vec![
                    row.name.clone(),
                    row.category.clone(),
                    format!("{:.0}", row.risk_score),
                    ui::pct(row.revenue_at_risk_pct),
                ]);
            }
            println!("{table}");
        }

        Ok(())
    }
}
