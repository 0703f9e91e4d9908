//! Progressive tax computation.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total deductions for the regime |
//! | 2    | Taxable income (gross - deductions, minimum 0) |
//! | 3    | Slab tax (marginal walk over the bracket table) |
//! | 4    | Cess (slab tax × cess rate) |
//! | 5    | Total tax (slab tax + cess) |
//! | 6    | Net income (gross - total tax) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::TaxEngine;
//! use tax_core::{AgeCategory, DeductionInput, TaxRegime};
//!
//! let engine = TaxEngine::default();
//! let result = engine.compute(
//!     dec!(1000000),
//!     &DeductionInput::default(),
//!     TaxRegime::Old,
//!     AgeCategory::Below60,
//! );
//!
//! assert_eq!(result.tax_amount, dec!(112500));
//! assert_eq!(result.cess, dec!(4500));
//! assert_eq!(result.total_tax, dec!(117000));
//! assert_eq!(result.net_income, dec!(883000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::bracket_table::brackets_for;
use crate::calculations::common::max;
use crate::calculations::deductions::DeductionAggregator;
use crate::input::TaxRequest;
use crate::models::{AgeCategory, DeductionInput, EngineConfig, TaxComputationResult, TaxRegime};

/// Stateless calculator. Holds only its configuration, so one instance can
/// serve any number of requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxEngine {
    config: EngineConfig,
}

impl TaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes tax, cess and net income.
    ///
    /// Never fails: negative gross income is treated as zero and deduction
    /// amounts are clamped by the aggregator.
    pub fn compute(
        &self,
        gross_income: Decimal,
        deductions: &DeductionInput,
        regime: TaxRegime,
        age: AgeCategory,
    ) -> TaxComputationResult {
        let gross_income = max(gross_income, Decimal::ZERO);
        let total_deductions = DeductionAggregator::new(&self.config).aggregate(deductions, regime);
        let taxable_income = self.taxable_income(gross_income, total_deductions);
        let tax_amount = self.tax_on(taxable_income, regime, age);
        let cess = self.cess(tax_amount);
        let total_tax = tax_amount + cess;
        let net_income = gross_income - total_tax;

        debug!(
            %regime,
            %age,
            %gross_income,
            %taxable_income,
            %total_tax,
            "computed tax"
        );

        TaxComputationResult {
            gross_income,
            total_deductions,
            taxable_income,
            tax_amount,
            cess,
            total_tax,
            net_income,
        }
    }

    /// [`TaxEngine::compute`] for a parsed form request.
    pub fn compute_request(
        &self,
        request: &TaxRequest,
    ) -> TaxComputationResult {
        self.compute(
            request.gross_income,
            &request.deductions,
            request.regime,
            request.age,
        )
    }

    /// Slab tax on `taxable_income`, before cess.
    ///
    /// Walks the brackets in ascending order and taxes only the slice of
    /// income inside each one.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
        regime: TaxRegime,
        age: AgeCategory,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;

        for bracket in brackets_for(regime, age) {
            if taxable_income <= lower {
                break;
            }
            let upper = bracket
                .max_income
                .map_or(taxable_income, |max_income| max_income.min(taxable_income));
            tax += (upper - lower) * bracket.tax_rate;

            match bracket.max_income {
                Some(max_income) => lower = max_income,
                None => break,
            }
        }

        tax
    }

    fn taxable_income(
        &self,
        gross_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(gross_income - total_deductions, Decimal::ZERO)
    }

    fn cess(
        &self,
        tax_amount: Decimal,
    ) -> Decimal {
        tax_amount * max(self.config.cess_rate, Decimal::ZERO)
    }
}

/// [`TaxEngine::compute`] with the statutory defaults.
pub fn compute(
    gross_income: Decimal,
    deductions: &DeductionInput,
    regime: TaxRegime,
    age: AgeCategory,
) -> TaxComputationResult {
    TaxEngine::default().compute(gross_income, deductions, regime, age)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn no_deductions() -> DeductionInput {
        DeductionInput::default()
    }

    // =========================================================================
    // tax_on tests
    // =========================================================================

    #[test]
    fn tax_on_zero_income_is_zero() {
        let engine = TaxEngine::default();

        for regime in TaxRegime::all() {
            for age in AgeCategory::all() {
                assert_eq!(engine.tax_on(dec!(0), *regime, *age), dec!(0));
            }
        }
    }

    #[test]
    fn tax_on_new_regime_each_slab() {
        let engine = TaxEngine::default();
        let cases = [
            (dec!(300000), dec!(0)),
            (dec!(600000), dec!(15000)),
            (dec!(900000), dec!(45000)),
            (dec!(1200000), dec!(90000)),
            (dec!(1500000), dec!(150000)),
            (dec!(2000000), dec!(300000)),
        ];

        for (income, expected) in cases {
            assert_eq!(
                engine.tax_on(income, TaxRegime::New, AgeCategory::Below60),
                expected,
                "income {income}"
            );
        }
    }

    #[test]
    fn tax_on_old_regime_senior() {
        let engine = TaxEngine::default();

        // (500000 - 300000) * 0.05 + (800000 - 500000) * 0.20 = 10000 + 60000
        let result = engine.tax_on(dec!(800000), TaxRegime::Old, AgeCategory::Senior);

        assert_eq!(result, dec!(70000));
    }

    #[test]
    fn tax_on_old_regime_super_senior_skips_five_percent_slab() {
        let engine = TaxEngine::default();

        assert_eq!(
            engine.tax_on(dec!(500000), TaxRegime::Old, AgeCategory::SuperSenior),
            dec!(0)
        );
        // (1200000 - 1000000) * 0.30 + 500000 * 0.20 = 60000 + 100000
        assert_eq!(
            engine.tax_on(dec!(1200000), TaxRegime::Old, AgeCategory::SuperSenior),
            dec!(160000)
        );
    }

    #[test]
    fn tax_on_is_marginal_not_flat() {
        let engine = TaxEngine::default();

        // One rupee into the 30% slab adds 0.30, not 30% of the whole income.
        let below = engine.tax_on(dec!(1000000), TaxRegime::Old, AgeCategory::Below60);
        let above = engine.tax_on(dec!(1000001), TaxRegime::Old, AgeCategory::Below60);

        assert_eq!(above - below, dec!(0.30));
    }

    // =========================================================================
    // compute tests
    // =========================================================================

    #[test]
    fn compute_old_regime_at_exemption_boundary() {
        let result = compute(
            dec!(250000),
            &no_deductions(),
            TaxRegime::Old,
            AgeCategory::Below60,
        );

        assert_eq!(result.tax_amount, dec!(0));
        assert_eq!(result.net_income, dec!(250000));
    }

    #[test]
    fn compute_new_regime_at_threshold() {
        let result = compute(
            dec!(300000),
            &no_deductions(),
            TaxRegime::New,
            AgeCategory::Below60,
        );

        assert_eq!(result.tax_amount, dec!(0));
    }

    #[test]
    fn compute_new_regime_first_taxed_slab() {
        let result = compute(
            dec!(350000),
            &no_deductions(),
            TaxRegime::New,
            AgeCategory::Below60,
        );

        assert_eq!(result.tax_amount, dec!(2500));
        assert_eq!(result.cess, dec!(100));
        assert_eq!(result.total_tax, dec!(2600));
    }

    #[test]
    fn compute_old_regime_ten_lakh() {
        let result = compute(
            dec!(1000000),
            &no_deductions(),
            TaxRegime::Old,
            AgeCategory::Below60,
        );

        assert_eq!(
            result,
            TaxComputationResult {
                gross_income: dec!(1000000),
                total_deductions: dec!(0),
                taxable_income: dec!(1000000),
                tax_amount: dec!(112500),
                cess: dec!(4500),
                total_tax: dec!(117000),
                net_income: dec!(883000),
            }
        );
    }

    #[test]
    fn compute_applies_deductions_under_old_regime() {
        let deductions = DeductionInput {
            hra: Some(dec!(100000)),
            section_80c: Some(dec!(200000)),
            section_80d: Some(dec!(25000)),
            home_loan_interest: None,
        };

        let result = compute(
            dec!(1200000),
            &deductions,
            TaxRegime::Old,
            AgeCategory::Below60,
        );

        // 100000 + 150000 (capped) + 25000
        assert_eq!(result.total_deductions, dec!(275000));
        assert_eq!(result.taxable_income, dec!(925000));
        // 12500 + (925000 - 500000) * 0.20 = 12500 + 85000
        assert_eq!(result.tax_amount, dec!(97500));
        assert_eq!(result.cess, dec!(3900));
        assert_eq!(result.total_tax, dec!(101400));
        assert_eq!(result.net_income, dec!(1098600));
    }

    #[test]
    fn compute_ignores_deductions_under_new_regime() {
        let deductions = DeductionInput {
            section_80c: Some(dec!(150000)),
            ..Default::default()
        };

        let result = compute(
            dec!(700000),
            &deductions,
            TaxRegime::New,
            AgeCategory::Below60,
        );

        assert_eq!(result.total_deductions, dec!(0));
        assert_eq!(result.taxable_income, dec!(700000));
        assert_eq!(result.tax_amount, dec!(25000));
    }

    #[test]
    fn compute_with_new_regime_standard_deduction() {
        let engine = TaxEngine::new(EngineConfig {
            new_regime_standard_deduction: dec!(50000),
            ..Default::default()
        });

        let result = engine.compute(
            dec!(350000),
            &no_deductions(),
            TaxRegime::New,
            AgeCategory::Below60,
        );

        assert_eq!(result.total_deductions, dec!(50000));
        assert_eq!(result.tax_amount, dec!(0));
    }

    #[test]
    fn compute_deductions_exceeding_income_yield_zero_taxable() {
        let deductions = DeductionInput {
            hra: Some(dec!(500000)),
            ..Default::default()
        };

        let result = compute(
            dec!(300000),
            &deductions,
            TaxRegime::Old,
            AgeCategory::Below60,
        );

        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.net_income, dec!(300000));
    }

    #[test]
    fn compute_negative_gross_is_treated_as_zero() {
        let result = compute(
            dec!(-100000),
            &no_deductions(),
            TaxRegime::New,
            AgeCategory::Below60,
        );

        assert_eq!(result.gross_income, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.net_income, dec!(0));
    }

    #[test]
    fn compute_cess_is_exactly_four_percent() {
        let result = compute(
            dec!(1234567.89),
            &no_deductions(),
            TaxRegime::New,
            AgeCategory::Below60,
        );

        assert_eq!(result.cess, result.tax_amount * dec!(0.04));
        assert_eq!(result.total_tax, result.tax_amount + result.cess);
        assert_eq!(result.net_income, result.gross_income - result.total_tax);
    }

    #[test]
    fn compute_is_deterministic() {
        let deductions = DeductionInput {
            hra: Some(dec!(42000)),
            ..Default::default()
        };

        let first = compute(dec!(987654), &deductions, TaxRegime::Old, AgeCategory::Senior);
        let second = compute(dec!(987654), &deductions, TaxRegime::Old, AgeCategory::Senior);

        assert_eq!(first, second);
        assert_eq!(first.total_tax.serialize(), second.total_tax.serialize());
    }

    #[test]
    fn compute_custom_cess_rate() {
        let engine = TaxEngine::new(EngineConfig {
            cess_rate: dec!(0.03),
            ..Default::default()
        });

        let result = engine.compute(
            dec!(1000000),
            &no_deductions(),
            TaxRegime::Old,
            AgeCategory::Below60,
        );

        assert_eq!(result.cess, dec!(3375));
    }

    #[test]
    fn compute_negative_cess_rate_charges_no_cess() {
        let engine = TaxEngine::new(EngineConfig {
            cess_rate: dec!(-0.5),
            ..EngineConfig::default()
        });

        let result = engine.compute(
            dec!(1000000),
            &no_deductions(),
            TaxRegime::Old,
            AgeCategory::Below60,
        );

        assert_eq!(result.tax_amount, dec!(112500));
        assert_eq!(result.cess, dec!(0));
        assert_eq!(result.total_tax, dec!(112500));
    }
}
