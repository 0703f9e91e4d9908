use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Output of a single tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    pub gross_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,

    /// Slab tax before cess.
    pub tax_amount: Decimal,
    /// Health and education cess on `tax_amount`.
    pub cess: Decimal,
    pub total_tax: Decimal,

    /// `gross_income - total_tax`, never clamped.
    pub net_income: Decimal,
}

impl fmt::Display for TaxComputationResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "gross={} deductions={} taxable={} tax={} cess={} total={} net={}",
            self.gross_income,
            self.total_deductions,
            self.taxable_income,
            self.tax_amount,
            self.cess,
            self.total_tax,
            self.net_income
        )
    }
}
