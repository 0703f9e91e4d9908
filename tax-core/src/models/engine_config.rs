use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Statutory constants the engine applies on top of the slab table.
///
/// Every field has a default, so a partially filled configuration file only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Health and education cess applied to the slab tax (4%).
    pub cess_rate: Decimal,

    /// Section 80C cap (old regime).
    pub section_80c_cap: Decimal,

    /// Section 80D cap (old regime).
    pub section_80d_cap: Decimal,

    /// Home loan interest cap (old regime).
    pub home_loan_interest_cap: Decimal,

    /// Standard deduction granted under the new regime.
    ///
    /// Zero by default: the estimator does not grant one. Set it to opt in.
    pub new_regime_standard_deduction: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cess_rate: dec!(0.04),
            section_80c_cap: dec!(150000),
            section_80d_cap: dec!(25000),
            home_loan_interest_cap: dec!(200000),
            new_regime_standard_deduction: Decimal::ZERO,
        }
    }
}
