use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Engagement metadata captured on the input form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct AssessmentInfo {
    pub client_name: String,

    #[serde(default)]
    pub analyst_name: String,

    pub assessment_date: NaiveDate,

    #[serde(default)]
    pub assessment_scope: String,
}

/// Optional IT expense breakdown by cost area, in dollars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema, Default)]
pub struct ExpenseBreakdown {
    #[serde(default)]
    pub hardware: f64,
    #[serde(default)]
    pub software: f64,
    #[serde(default)]
    pub cybersecurity: f64,
    #[serde(default)]
    pub maintenance: f64,
    #[serde(default)]
    pub telecom: f64,
    #[serde(default)]
    pub personnel: f64,
    #[serde(default, rename = "bcdr")]
    pub bc_dr: f64,
}

impl ExpenseBreakdown {
    pub fn total(&self) -> f64 {
        self.hardware
            + self.software
            + self.cybersecurity
            + self.maintenance
            + self.telecom
            + self.personnel
            + self.bc_dr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_total() {
        let expenses = ExpenseBreakdown {
            hardware: 2_500_000.0,
            software: 1_800_000.0,
            cybersecurity: 1_400_000.0,
            ..Default::default()
        };
        assert_eq!(expenses.total(), 5_700_000.0);
    }
}
