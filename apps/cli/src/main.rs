pub mod commands;
pub mod ui;

use clap::{Parser, Subcommand};
use commands::{
    dashboard::DashboardCommand, schema::SchemaCommand, simulate::SimulateCommand,
    template::TemplateCommand, whatif::WhatIfCommand,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "itrm")]
#[command(about = "IT financial risk reporting from a session document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Component-level revenue-at-risk report
    Simulate(SimulateCommand),
    /// Executive dashboard: adjusted scores, heatmap, financial snapshot
    Dashboard(DashboardCommand),
    /// Baseline-revenue what-if simulation
    Whatif(WhatIfCommand),
    /// Write the blank CSV input template
    Template(TemplateCommand),
    /// Emit the JSON Schema of the session document
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(cmd) => cmd.execute(),
        Commands::Dashboard(cmd) => cmd.execute(),
        Commands::Whatif(cmd) => cmd.execute(),
        Commands::Template(cmd) => cmd.execute(),
        Commands::Schema(cmd) => cmd.execute(),
    }
}
