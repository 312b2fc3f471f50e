use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Acquisition and operating figures supplied by the investor for one analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    pub purchase_price: f64,
    pub acquisition_costs: f64,
    /// Renovation and furnishing.
    pub renovation_cost: f64,
    pub annual_operating_expenses: f64,
}

impl InvestmentInputs {
    /// Every amount must be a finite number ≥ 0, and so must their total.
    /// The first offending field is reported.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("purchase_price", self.purchase_price),
            ("acquisition_costs", self.acquisition_costs),
            ("renovation_cost", self.renovation_cost),
            ("annual_operating_expenses", self.annual_operating_expenses),
        ] {
            if !value.is_finite() {
                return Err(DomainError::invalid_input(
                    field,
                    format!("must be a finite amount, got {value}"),
                ));
            }
            if value < 0.0 {
                return Err(DomainError::invalid_input(field, format!("must be >= 0, got {value}")));
            }
        }
        let total = self.total_investment();
        if !total.is_finite() {
            return Err(DomainError::invalid_input(
                "total_investment",
                "sum of purchase, acquisition and renovation costs overflows",
            ));
        }
        Ok(())
    }

    pub fn total_investment(&self) -> f64 {
        self.purchase_price + self.acquisition_costs + self.renovation_cost
    }
}
