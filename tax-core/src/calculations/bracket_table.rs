//! Slab tables for FY 2023-24 (AY 2024-25).
//!
//! | Regime | Age            | Slabs |
//! |--------|----------------|-------|
//! | New    | any            | 0% to 3L, 5% to 6L, 10% to 9L, 15% to 12L, 20% to 15L, 30% above |
//! | Old    | below 60       | 0% to 2.5L, 5% to 5L, 20% to 10L, 30% above |
//! | Old    | 60 to 80       | 0% to 3L, 5% to 5L, 20% to 10L, 30% above |
//! | Old    | above 80       | 0% to 5L, 20% to 10L, 30% above |
//!
//! Each bracket taxes only the slice of income above the previous bracket's
//! upper bound.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::{AgeCategory, TaxBracket, TaxRegime};

static NEW_REGIME: [TaxBracket; 6] = [
    TaxBracket {
        max_income: Some(dec!(300000)),
        tax_rate: dec!(0),
    },
    TaxBracket {
        max_income: Some(dec!(600000)),
        tax_rate: dec!(0.05),
    },
    TaxBracket {
        max_income: Some(dec!(900000)),
        tax_rate: dec!(0.10),
    },
    TaxBracket {
        max_income: Some(dec!(1200000)),
        tax_rate: dec!(0.15),
    },
    TaxBracket {
        max_income: Some(dec!(1500000)),
        tax_rate: dec!(0.20),
    },
    TaxBracket {
        max_income: None,
        tax_rate: dec!(0.30),
    },
];

static OLD_REGIME_BELOW_60: [TaxBracket; 4] = [
    TaxBracket {
        max_income: Some(dec!(250000)),
        tax_rate: dec!(0),
    },
    TaxBracket {
        max_income: Some(dec!(500000)),
        tax_rate: dec!(0.05),
    },
    TaxBracket {
        max_income: Some(dec!(1000000)),
        tax_rate: dec!(0.20),
    },
    TaxBracket {
        max_income: None,
        tax_rate: dec!(0.30),
    },
];

static OLD_REGIME_SENIOR: [TaxBracket; 4] = [
    TaxBracket {
        max_income: Some(dec!(300000)),
        tax_rate: dec!(0),
    },
    TaxBracket {
        max_income: Some(dec!(500000)),
        tax_rate: dec!(0.05),
    },
    TaxBracket {
        max_income: Some(dec!(1000000)),
        tax_rate: dec!(0.20),
    },
    TaxBracket {
        max_income: None,
        tax_rate: dec!(0.30),
    },
];

// The exemption reaches the top of the 5% slab, so that slab is empty.
static OLD_REGIME_SUPER_SENIOR: [TaxBracket; 3] = [
    TaxBracket {
        max_income: Some(dec!(500000)),
        tax_rate: dec!(0),
    },
    TaxBracket {
        max_income: Some(dec!(1000000)),
        tax_rate: dec!(0.20),
    },
    TaxBracket {
        max_income: None,
        tax_rate: dec!(0.30),
    },
];

/// Returns the ordered bracket sequence for a regime and age category.
///
/// The age category is ignored under the new regime.
pub fn brackets_for(
    regime: TaxRegime,
    age: AgeCategory,
) -> &'static [TaxBracket] {
    match (regime, age) {
        (TaxRegime::New, _) => &NEW_REGIME,
        (TaxRegime::Old, AgeCategory::Below60) => &OLD_REGIME_BELOW_60,
        (TaxRegime::Old, AgeCategory::Senior) => &OLD_REGIME_SENIOR,
        (TaxRegime::Old, AgeCategory::SuperSenior) => &OLD_REGIME_SUPER_SENIOR,
    }
}

/// Income up to which no tax is charged.
pub fn exemption_threshold(
    regime: TaxRegime,
    age: AgeCategory,
) -> Decimal {
    brackets_for(regime, age)
        .iter()
        .take_while(|b| b.tax_rate.is_zero())
        .filter_map(|b| b.max_income)
        .last()
        .unwrap_or(Decimal::ZERO)
}

/// A bracket with its lower bound filled in, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlabRange {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

/// Expands [`brackets_for`] into explicit `[min, max]` ranges.
pub fn slab_ranges(
    regime: TaxRegime,
    age: AgeCategory,
) -> Vec<SlabRange> {
    let mut min_income = Decimal::ZERO;
    brackets_for(regime, age)
        .iter()
        .map(|b| {
            let range = SlabRange {
                min_income,
                max_income: b.max_income,
                tax_rate: b.tax_rate,
            };
            if let Some(max) = b.max_income {
                min_income = max;
            }
            range
        })
        .collect()
}
