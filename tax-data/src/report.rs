//! CSV report of batch results.
//!
//! One output row per input row, in input order, always preceded by the
//! header. Tax and cess are rounded to paise half away from zero; total tax
//! and net income are derived from the rounded values so every row adds up.

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::calculations::common::round_to_paise;
use tax_core::{TaxComputationResult, TaxEngine, TaxRequest};
use thiserror::Error;

use crate::loader::BatchEntry;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A computed batch row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub entry: BatchEntry,
    pub request: TaxRequest,
    pub result: TaxComputationResult,
}

/// Computes every entry with the same engine.
pub fn compute_batch(
    engine: &TaxEngine,
    entries: Vec<BatchEntry>,
) -> Vec<BatchOutcome> {
    entries
        .into_iter()
        .map(|entry| {
            let request = entry.form.to_request();
            let result = engine.compute_request(&request);
            BatchOutcome {
                entry,
                request,
                result,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    row: usize,
    label: &'a str,
    regime: &'static str,
    age: &'static str,
    gross_income: Decimal,
    total_deductions: Decimal,
    taxable_income: Decimal,
    tax_amount: Decimal,
    cess: Decimal,
    total_tax: Decimal,
    net_income: Decimal,
}

const HEADER: [&str; 11] = [
    "row",
    "label",
    "regime",
    "age",
    "gross_income",
    "total_deductions",
    "taxable_income",
    "tax_amount",
    "cess",
    "total_tax",
    "net_income",
];

impl<'a> From<&'a BatchOutcome> for ReportRow<'a> {
    fn from(outcome: &'a BatchOutcome) -> Self {
        let result = &outcome.result;
        let gross_income = round_to_paise(result.gross_income);
        let tax_amount = round_to_paise(result.tax_amount);
        let cess = round_to_paise(result.cess);
        let total_tax = tax_amount + cess;
        Self {
            row: outcome.entry.row,
            label: outcome.entry.label.as_deref().unwrap_or(""),
            regime: outcome.request.regime.as_str(),
            age: outcome.request.age.as_str(),
            gross_income,
            total_deductions: round_to_paise(result.total_deductions),
            taxable_income: round_to_paise(result.taxable_income),
            tax_amount,
            cess,
            total_tax,
            net_income: gross_income - total_tax,
        }
    }
}

/// Writes `outcomes` as CSV with a header row.
///
/// # Errors
///
/// Returns [`ReportError`] if the underlying writer fails.
pub fn write_report<W: Write>(
    writer: W,
    outcomes: &[BatchOutcome],
) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for outcome in outcomes {
        csv_writer.serialize(ReportRow::from(outcome))?;
    }
    csv_writer.flush()?;
    tracing::debug!(rows = outcomes.len(), "wrote batch report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::TaxForm;

    use super::*;

    fn entry(
        row: usize,
        label: Option<&str>,
        salary: &str,
        regime: &str,
    ) -> BatchEntry {
        BatchEntry {
            row,
            label: label.map(str::to_string),
            form: TaxForm {
                salary: salary.to_string(),
                regime: regime.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn compute_batch_preserves_order() {
        let engine = TaxEngine::default();
        let outcomes = compute_batch(
            &engine,
            vec![
                entry(1, Some("a"), "1000000", "old"),
                entry(2, None, "350000", "new"),
            ],
        );

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].result.total_tax, dec!(117000));
        assert_eq!(outcomes[1].result.tax_amount, dec!(2500));
        assert_eq!(outcomes[1].entry.row, 2);
    }

    #[test]
    fn write_report_emits_header_and_rows() {
        let engine = TaxEngine::default();
        let outcomes = compute_batch(&engine, vec![entry(1, Some("alice"), "1000000", "old")]);
        let mut buffer = Vec::new();

        write_report(&mut buffer, &outcomes).expect("write should succeed");

        let text = String::from_utf8(buffer).expect("report is UTF-8");
        assert_eq!(
            text,
            "row,label,regime,age,gross_income,total_deductions,taxable_income,tax_amount,cess,total_tax,net_income\n\
             1,alice,old,below60,1000000.00,0.00,1000000.00,112500.00,4500.00,117000.00,883000.00\n"
        );
    }

    #[test]
    fn write_report_rounds_to_paise() {
        let engine = TaxEngine::default();
        // 5% of 33.33 is 1.6665 tax, cess 0.06666.
        let outcomes = compute_batch(&engine, vec![entry(1, None, "300033.33", "new")]);
        let mut buffer = Vec::new();

        write_report(&mut buffer, &outcomes).expect("write should succeed");

        let text = String::from_utf8(buffer).expect("report is UTF-8");
        let data = text.lines().nth(1).expect("one data row");
        assert_eq!(
            data,
            "1,,new,below60,300033.33,0.00,300033.33,1.67,0.07,1.74,300031.59"
        );
    }

    #[test]
    fn rows_add_up_at_rounding_midpoints() {
        let engine = TaxEngine::default();
        // 5% of 2.50 is 0.125 tax, cess 0.005.
        let outcomes = compute_batch(&engine, vec![entry(1, None, "300002.50", "new")]);
        let mut buffer = Vec::new();

        write_report(&mut buffer, &outcomes).expect("write should succeed");

        let text = String::from_utf8(buffer).expect("report is UTF-8");
        let data = text.lines().nth(1).expect("one data row");
        assert_eq!(
            data,
            "1,,new,below60,300002.50,0.00,300002.50,0.13,0.01,0.14,300002.36"
        );
        let amounts: Vec<Decimal> = data
            .split(',')
            .skip(4)
            .map(|cell| cell.parse().expect("amount cell"))
            .collect();
        let [gross, _, _, tax, cess, total, net] = &amounts[..] else {
            panic!("expected seven amounts, got {amounts:?}");
        };
        assert_eq!(*tax + *cess, *total);
        assert_eq!(*gross - *total, *net);
    }

    #[test]
    fn empty_batch_writes_header_only() {
        let mut buffer = Vec::new();

        write_report(&mut buffer, &[]).expect("write should succeed");

        let text = String::from_utf8(buffer).expect("report is UTF-8");
        assert_eq!(text, format!("{}\n", HEADER.join(",")));
    }
}
