use thiserror::Error;

/// Recoverable conditions surfaced by the calculation layer.
///
/// Callers decide presentation: report builders fold these into warnings on
/// the report value rather than failing the whole pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RiskError {
    /// The category impact mapping step has not run yet.
    #[error("revenue impact percentages not available; assign impact values on the component mapping page first")]
    ImpactMapUnavailable,

    /// The component inventory is empty.
    #[error("no components loaded yet")]
    NoComponents,
}
