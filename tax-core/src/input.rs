//! Lenient conversion of calculator form fields into engine inputs.
//!
//! Form values arrive as free text. Anything that is blank, not a number or
//! negative is treated as zero, so a request can always be computed.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AgeCategory, DeductionInput, TaxRegime};

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// rupee sign and removes commas (both western and lakh grouping).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix('₹')
        .or_else(|| trimmed.strip_prefix("Rs."))
        .or_else(|| trimmed.strip_prefix("Rs"))
        .unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

fn parse_decimal(normalized: &str) -> Option<Decimal> {
    Decimal::from_str(normalized)
        .or_else(|_| Decimal::from_scientific(normalized))
        .ok()
}

/// Parses a form field into an optional amount.
///
/// Returns `None` for blank input. Unparseable and negative values become
/// `Some(0)` and are logged.
pub fn parse_optional_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }
    match parse_decimal(&normalized) {
        Some(value) if value.is_sign_negative() && !value.is_zero() => {
            tracing::warn!(input = %s, "negative amount, using 0");
            Some(Decimal::ZERO)
        }
        Some(value) => Some(value),
        None => {
            tracing::warn!(input = %s, "invalid amount, using 0");
            Some(Decimal::ZERO)
        }
    }
}

/// Parses a form field into an amount, treating anything unusable as zero.
///
/// Handles comma as thousands separator (e.g. `"1,50,000"`).
pub fn parse_amount(s: &str) -> Decimal {
    parse_optional_amount(s).unwrap_or(Decimal::ZERO)
}

/// Raw calculator form, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxForm {
    pub salary: String,
    pub other_income: String,
    pub hra: String,
    pub section_80c: String,
    pub section_80d: String,
    pub home_loan_interest: String,
    pub regime: String,
    pub age: String,
}

impl TaxForm {
    /// Converts the form into a request the engine can compute.
    ///
    /// `gross_income` is salary plus other income.
    pub fn to_request(&self) -> TaxRequest {
        let gross_income = parse_amount(&self.salary).saturating_add(parse_amount(&self.other_income));

        TaxRequest {
            gross_income,
            deductions: DeductionInput {
                hra: parse_optional_amount(&self.hra),
                section_80c: parse_optional_amount(&self.section_80c),
                section_80d: parse_optional_amount(&self.section_80d),
                home_loan_interest: parse_optional_amount(&self.home_loan_interest),
            },
            regime: TaxRegime::from_form_value(&self.regime),
            age: AgeCategory::from_form_value(&self.age),
        }
    }
}

/// Parsed engine input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRequest {
    pub gross_income: Decimal,
    pub deductions: DeductionInput,
    pub regime: TaxRegime,
    pub age: AgeCategory,
}
