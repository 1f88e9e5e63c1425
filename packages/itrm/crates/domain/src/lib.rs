pub mod aggregate;
pub mod calculator;
pub mod error;
pub mod session;
pub mod simulate;

pub use error::RiskError;
pub use session::SessionContext;
