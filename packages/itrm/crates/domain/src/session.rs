//! Explicit session context.
//!
//! All session-scoped state is an owned value passed into each calculation
//! call; there is no ambient registry to reach into by key. The context
//! lives exactly as long as the assessment session and nothing survives it.

use crate::error::RiskError;
use chrono::{DateTime, Utc};
use itrm_model::{Component, SessionDocument};
use std::collections::HashMap;
use uuid::Uuid;

/// Session-scoped state: the component inventory, the category impact map,
/// and the baseline revenue, under one session id.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: Uuid,
    opened_at: DateTime<Utc>,
    document: SessionDocument,
}

impl SessionContext {
    pub fn new(document: SessionDocument) -> Self {
        Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            document,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn document(&self) -> &SessionDocument {
        &self.document
    }

    /// Component registry read interface.
    pub fn components(&self) -> &[Component] {
        &self.document.components
    }

    /// Category impact map read interface. Unavailable until the mapping
    /// step has populated it upstream.
    pub fn impact_percentages(&self) -> Result<&HashMap<String, f64>, RiskError> {
        self.document
            .category_revenue_impact
            .as_ref()
            .ok_or(RiskError::ImpactMapUnavailable)
    }

    pub fn baseline_revenue(&self) -> f64 {
        self.document.baseline_revenue
    }

    /// Category spend read interface, for the financial snapshot.
    pub fn category_spend(&self) -> &HashMap<String, f64> {
        &self.document.category_spend
    }
}
