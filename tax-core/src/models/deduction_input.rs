use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw deduction amounts as entered by the user. `None` is treated as zero.
///
/// Amounts are not validated here; the aggregator clamps each component to
/// `[0, cap]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionInput {
    /// House rent allowance exemption (uncapped).
    pub hra: Option<Decimal>,
    /// Section 80C investments.
    pub section_80c: Option<Decimal>,
    /// Section 80D health insurance premium.
    pub section_80d: Option<Decimal>,
    /// Section 24 interest on a home loan for a self-occupied property.
    pub home_loan_interest: Option<Decimal>,
}
