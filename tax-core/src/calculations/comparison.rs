//! Side-by-side comparison of the two regimes for the same inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::engine::TaxEngine;
use crate::models::{AgeCategory, DeductionInput, TaxComputationResult, TaxRegime};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub old: TaxComputationResult,
    pub new: TaxComputationResult,

    /// Regime with the lower total tax. Ties go to the new regime, which
    /// needs no deduction paperwork.
    pub recommended: TaxRegime,

    /// Absolute difference in total tax between the two regimes.
    pub savings: Decimal,
}

impl RegimeComparison {
    pub fn result_for(
        &self,
        regime: TaxRegime,
    ) -> &TaxComputationResult {
        match regime {
            TaxRegime::Old => &self.old,
            TaxRegime::New => &self.new,
        }
    }
}

impl TaxEngine {
    /// Runs [`TaxEngine::compute`] under both regimes.
    pub fn compare_regimes(
        &self,
        gross_income: Decimal,
        deductions: &DeductionInput,
        age: AgeCategory,
    ) -> RegimeComparison {
        let old = self.compute(gross_income, deductions, TaxRegime::Old, age);
        let new = self.compute(gross_income, deductions, TaxRegime::New, age);

        let recommended = if old.total_tax < new.total_tax {
            TaxRegime::Old
        } else {
            TaxRegime::New
        };
        let savings = (old.total_tax - new.total_tax).abs();

        RegimeComparison {
            old,
            new,
            recommended,
            savings,
        }
    }
}
