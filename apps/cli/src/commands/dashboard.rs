use crate::ui;
use anyhow::Result;
use clap::Parser;
use console::style;
use itrm::application::{build_executive_report, RiskBand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct DashboardCommand {
    /// Session file or directory (defaults to the current directory)
    #[arg(short, long)]
    pub session: Option<PathBuf>,
}

impl DashboardCommand {
    pub fn execute(self) -> Result<()> {
        let ctx = super::resolve_session(self.session.as_ref())?;
        let report = build_executive_report(&ctx);

        for warning in &report.warnings {
            ui::warn(warning);
        }

        if let Some(assessment) = &ctx.document().assessment {
            ui::metric("Client", assessment.client_name.clone());
            ui::metric("Assessment Date", assessment.assessment_date.to_string());
        }

        ui::metric("Total IT Spend", ui::money(report.total_it_spend));
        ui::metric(
            "IT Spend / Revenue",
            format!("{:.2}%", report.it_spend_to_revenue_pct),
        );

        ui::heading("Adjusted Component Risk Scores");
        let mut table = ui::table(&["Name", "Category", "Spend", "Risk Score", "Adjusted Risk Score"]);
        for row in &report.adjusted_rows {
            table.add_row(vec![
                row.name.clone(),
                row.category.clone(),
                ui::money(row.spend),
                format!("{:.0}", row.risk_score),
                format!("{:.1}", row.adjusted_risk_score),
            ]);
        }
        println!("{table}");

        let band = match report.band {
            RiskBand::Green => style("Green").green(),
            RiskBand::Amber => style("Amber").yellow(),
            RiskBand::Red => style("Red").red(),
        };
        ui::metric(
            "Average Adjusted Risk",
            format!("{:.1} ({band})", report.average_adjusted_risk),
        );

        ui::heading("Risk Heatmap by Category");
        let mut table = ui::table(&["Category", "Avg Adjusted Risk Score"]);
        for row in &report.heatmap {
            table.add_row(vec![row.category.clone(), format!("{:.1}", row.avg_adjusted_score)]);
        }
        println!("{table}");

        if !report.snapshot.is_empty() {
            ui::heading("Financial Summary Snapshot");
            let mut table =
                ui::table(&["Category", "Spend", "Revenue Impact %", "Revenue at Risk"]);
            for row in &report.snapshot {
                table.add_row(vec![
                    row.category.clone(),
                    ui::money(row.spend),
                    format!("{:.1}%", row.revenue_impact_pct),
                    ui::money(row.revenue_at_risk_dollars),
                ]);
            }
            println!("{table}");
            ui::metric(
                "Total Revenue at Risk",
                ui::money(report.total_revenue_at_risk_dollars),
            );
        }

        if report.recommendations.is_empty() {
            ui::info("No strategic insights currently inferred. Complete the mappings first.");
        } else {
            ui::heading("Inferred Strategic Focus Areas");
            for recommendation in &report.recommendations {
                println!("  - {recommendation}");
            }
        }

        Ok(())
    }
}
