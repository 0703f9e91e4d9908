//! Indian-locale currency formatting and the text report.

use std::fmt;

use rust_decimal::Decimal;
use tax_core::calculations::common::round_half_up;
use tax_core::{RegimeComparison, TaxComputationResult, TaxRegime};

pub const ESTIMATE_NOTICE: &str =
    "This is an estimate. Actual tax may vary based on additional factors and latest tax rules.";

/// Groups digits the en-IN way: the last three, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats an amount as whole rupees, e.g. `₹8,83,000` or `-₹1,23,456`.
///
/// Fractions are rounded half away from zero.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₹{}", group_indian(&digits))
}

/// Formats a fractional rate as a percentage, e.g. `0.05` as `5%`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(f, "{label:<32}{:>16}", format_inr(amount))
}

/// A single computation as a labelled table.
pub struct ResultReport<'a> {
    pub result: &'a TaxComputationResult,
    pub regime: TaxRegime,
    pub cess_rate: Decimal,
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.result;
        writeln!(f, "Tax Calculation Results ({})", self.regime.label())?;
        writeln!(f, "{}", "-".repeat(48))?;
        write_row(f, "Gross Income", result.gross_income)?;
        write_row(f, "Total Deductions", result.total_deductions)?;
        write_row(f, "Taxable Income", result.taxable_income)?;
        write_row(f, "Income Tax", result.tax_amount)?;
        write_row(
            f,
            &format!("Health & Education Cess ({})", format_percent(self.cess_rate)),
            result.cess,
        )?;
        write_row(f, "Total Tax", result.total_tax)?;
        write_row(f, "Net Income", result.net_income)?;
        writeln!(f)?;
        writeln!(f, "{ESTIMATE_NOTICE}")
    }
}

pub fn render_result(
    result: &TaxComputationResult,
    regime: TaxRegime,
    cess_rate: Decimal,
) -> String {
    ResultReport {
        result,
        regime,
        cess_rate,
    }
    .to_string()
}

/// Both regimes side by side with the recommendation.
pub struct ComparisonReport<'a>(pub &'a RegimeComparison);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let comparison = self.0;
        writeln!(
            f,
            "{:<24}{:>16}{:>16}",
            "",
            TaxRegime::Old.label(),
            TaxRegime::New.label()
        )?;
        writeln!(f, "{}", "-".repeat(56))?;
        let rows: [(&str, fn(&TaxComputationResult) -> Decimal); 6] = [
            ("Total Deductions", |r| r.total_deductions),
            ("Taxable Income", |r| r.taxable_income),
            ("Income Tax", |r| r.tax_amount),
            ("Cess", |r| r.cess),
            ("Total Tax", |r| r.total_tax),
            ("Net Income", |r| r.net_income),
        ];
        for (label, field) in rows {
            writeln!(
                f,
                "{label:<24}{:>16}{:>16}",
                format_inr(field(&comparison.old)),
                format_inr(field(&comparison.new))
            )?;
        }
        writeln!(f)?;
        if comparison.savings.is_zero() {
            writeln!(f, "Both regimes result in the same tax.")?;
        } else {
            writeln!(
                f,
                "{} saves {}.",
                comparison.recommended.label(),
                format_inr(comparison.savings)
            )?;
        }
        writeln!(f, "{ESTIMATE_NOTICE}")
    }
}

pub fn render_comparison(comparison: &RegimeComparison) -> String {
    ComparisonReport(comparison).to_string()
}
