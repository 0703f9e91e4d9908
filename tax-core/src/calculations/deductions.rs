//! Deduction aggregation.
//!
//! Under the old regime four categories are allowed, three of them capped:
//!
//! | Category            | Cap      |
//! |---------------------|----------|
//! | HRA exemption       | none     |
//! | Section 80C         | 1,50,000 |
//! | Section 80D         | 25,000   |
//! | Home loan interest  | 2,00,000 |
//!
//! The new regime disallows all of them. It grants only the configured
//! standard deduction, which is zero unless explicitly enabled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{clamp_to_cap, non_negative};
use crate::models::{DeductionInput, EngineConfig, TaxRegime};

/// Per-category amounts after clamping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub hra: Decimal,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub home_loan_interest: Decimal,
    pub standard_deduction: Decimal,
}

impl DeductionBreakdown {
    pub fn total(&self) -> Decimal {
        // HRA is uncapped, so the sum saturates instead of overflowing.
        self.hra
            .saturating_add(self.section_80c)
            .saturating_add(self.section_80d)
            .saturating_add(self.home_loan_interest)
            .saturating_add(self.standard_deduction)
    }
}

/// Sums and caps deductions for a regime.
#[derive(Debug, Clone)]
pub struct DeductionAggregator<'a> {
    config: &'a EngineConfig,
}

impl<'a> DeductionAggregator<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Total allowable deductions.
    pub fn aggregate(
        &self,
        input: &DeductionInput,
        regime: TaxRegime,
    ) -> Decimal {
        self.breakdown(input, regime).total()
    }

    /// Allowable amount per category.
    ///
    /// Absent and negative amounts count as zero. Under the new regime only
    /// `standard_deduction` can be non-zero.
    pub fn breakdown(
        &self,
        input: &DeductionInput,
        regime: TaxRegime,
    ) -> DeductionBreakdown {
        match regime {
            TaxRegime::New => DeductionBreakdown {
                standard_deduction: non_negative(Some(self.config.new_regime_standard_deduction)),
                ..Default::default()
            },
            TaxRegime::Old => DeductionBreakdown {
                hra: non_negative(input.hra),
                section_80c: self.capped(input.section_80c, self.config.section_80c_cap),
                section_80d: self.capped(input.section_80d, self.config.section_80d_cap),
                home_loan_interest: self
                    .capped(input.home_loan_interest, self.config.home_loan_interest_cap),
                standard_deduction: Decimal::ZERO,
            },
        }
    }

    fn capped(
        &self,
        value: Option<Decimal>,
        cap: Decimal,
    ) -> Decimal {
        clamp_to_cap(non_negative(value), cap)
    }
}

/// [`DeductionAggregator::aggregate`] with the statutory defaults.
pub fn aggregate(
    input: &DeductionInput,
    regime: TaxRegime,
) -> Decimal {
    DeductionAggregator::new(&EngineConfig::default()).aggregate(input, regime)
}
