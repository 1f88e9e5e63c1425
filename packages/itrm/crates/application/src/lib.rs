pub mod executive;
pub mod report;
pub mod session_loader;
pub mod whatif;

pub use executive::{build_executive_report, ExecutiveReport, RiskBand};
pub use report::{build_component_risk_report, ComponentRiskReport};
pub use session_loader::{load_session_dir, load_session_file};
pub use whatif::{build_whatif_report, WhatIfReport};
