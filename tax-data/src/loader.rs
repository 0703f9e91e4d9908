//! CSV loader for batch calculation requests.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Only
//! `salary` is required; every other column may be omitted entirely or
//! left empty. Cells are read as form text, so blanks and unparseable
//! amounts count as zero, exactly like the calculator form.
//!
//! | Column               | Required | Notes |
//! |----------------------|----------|-------|
//! | `label`              | no       | Free text carried through to the report |
//! | `salary`             | yes      | Annual salary |
//! | `other_income`       | no       | |
//! | `hra`                | no       | HRA exemption |
//! | `section_80c`        | no       | Capped at 1,50,000 |
//! | `section_80d`        | no       | Capped at 25,000 |
//! | `home_loan_interest` | no       | Capped at 2,00,000 |
//! | `regime`             | no       | `old` (default) or `new` |
//! | `age`                | no       | `below60` (default), `senior`, `superSenior` |
//!
//! ### Example
//!
//! ```csv
//! label,salary,other_income,section_80c,regime,age
//! alice,1200000,50000,150000,old,below60
//! bob,900000,,,new,
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tax_core::TaxForm;
use thiserror::Error;

/// Errors that can occur while loading batch requests.
#[derive(Debug, Error)]
pub enum CsvLoadError {
    /// The CSV is structurally invalid or the `salary` column is missing.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Serde-compatible row that mirrors the CSV layout.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    salary: String,
    #[serde(default)]
    other_income: String,
    #[serde(default)]
    hra: String,
    #[serde(default)]
    section_80c: String,
    #[serde(default)]
    section_80d: String,
    #[serde(default)]
    home_loan_interest: String,
    #[serde(default)]
    regime: String,
    #[serde(default)]
    age: String,
}

/// One row of a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based row number (header = row 0).
    pub row: usize,
    pub label: Option<String>,
    pub form: TaxForm,
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> BatchEntry {
    BatchEntry {
        row: row_number,
        label: row.label.filter(|l| !l.is_empty()),
        form: TaxForm {
            salary: row.salary,
            other_income: row.other_income,
            hra: row.hra,
            section_80c: row.section_80c,
            section_80d: row.section_80d,
            home_loan_interest: row.home_loan_interest,
            regime: row.regime,
            age: row.age,
        },
    }
}

/// Loader for batch calculation requests.
pub struct TaxFormLoader;

impl TaxFormLoader {
    /// Parse batch entries from any reader. Rows are returned in file order.
    ///
    /// # Errors
    ///
    /// [`CsvLoadError::Parse`] if the CSV is structurally invalid or lacks a
    /// `salary` column.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BatchEntry>, CsvLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let entries = csv_reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| -> Result<BatchEntry, CsvLoadError> {
                // 1-based for user-facing messages
                Ok(convert_row(result?, idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = entries.len(), "parsed batch requests");
        Ok(entries)
    }

    /// Parse batch entries from CSV text.
    pub fn load_from_str(input: &str) -> Result<Vec<BatchEntry>, CsvLoadError> {
        Self::parse(input.as_bytes())
    }

    /// Read a file from disk and delegate to [`TaxFormLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<BatchEntry>, CsvLoadError> {
        let file = std::fs::File::open(path).map_err(|source| CsvLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(file)
    }
}
