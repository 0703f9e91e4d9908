use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tax_core::{EngineConfig, TaxComputationResult, TaxEngine, TaxForm, TaxRequest};
use tax_data::{BatchOutcome, TaxFormLoader, compute_batch, write_report};
use tracing::info;

use crate::format::{render_comparison, render_result};
use crate::reference::{
    FAQ, deduction_catalogue, render_deductions, render_faq, render_slab_tables, slab_tables,
};

/// Indian income tax estimator (FY 2023-24).
///
/// Compares the old and new regimes, applies the usual old-regime
/// deductions and adds the 4% health and education cess.
#[derive(Debug, Parser)]
#[command(name = "tax-cli", version)]
pub struct Cli {
    /// TOML file overriding log level and statutory limits.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print JSON instead of formatted text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Calculator inputs. Amounts are taken as typed; anything that is not a
/// non-negative number counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct IncomeArgs {
    /// Annual salary.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub salary: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub other_income: String,

    /// HRA exemption (old regime only).
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub hra: String,

    /// Section 80C investments (old regime only).
    #[arg(long = "section-80c", default_value = "", allow_hyphen_values = true)]
    pub section_80c: String,

    /// Section 80D premiums (old regime only).
    #[arg(long = "section-80d", default_value = "", allow_hyphen_values = true)]
    pub section_80d: String,

    /// Home loan interest (old regime only).
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub home_loan_interest: String,

    /// `old` or `new`.
    #[arg(long, default_value = "old")]
    pub regime: String,

    /// `below60`, `senior` or `superSenior`.
    #[arg(long, default_value = "below60")]
    pub age: String,
}

impl IncomeArgs {
    pub fn to_form(&self) -> TaxForm {
        TaxForm {
            salary: self.salary.clone(),
            other_income: self.other_income.clone(),
            hra: self.hra.clone(),
            section_80c: self.section_80c.clone(),
            section_80d: self.section_80d.clone(),
            home_loan_interest: self.home_loan_interest.clone(),
            regime: self.regime.clone(),
            age: self.age.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Compute tax for one regime.
    Calculate(IncomeArgs),

    /// Compute tax under both regimes and recommend the cheaper one.
    Compare(IncomeArgs),

    /// Compute every row of a CSV file.
    Batch {
        input: PathBuf,

        /// Write the report here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the slab tables.
    Slabs,

    /// List the old-regime deductions and their limits.
    Deductions,

    /// Frequently asked questions.
    Faq,
}

#[derive(Serialize)]
struct CalculationOutput<'a> {
    request: &'a TaxRequest,
    result: &'a TaxComputationResult,
}

#[derive(Serialize)]
struct BatchRowOutput<'a> {
    row: usize,
    label: Option<&'a str>,
    request: &'a TaxRequest,
    result: &'a TaxComputationResult,
}

impl<'a> From<&'a BatchOutcome> for BatchRowOutput<'a> {
    fn from(outcome: &'a BatchOutcome) -> Self {
        Self {
            row: outcome.entry.row,
            label: outcome.entry.label.as_deref(),
            request: &outcome.request,
            result: &outcome.result,
        }
    }
}

/// Runs commands against one engine and renders their output.
#[derive(Debug, Clone, Default)]
pub struct App {
    engine: TaxEngine,
    json: bool,
}

impl App {
    pub fn new(
        config: EngineConfig,
        json: bool,
    ) -> Self {
        Self {
            engine: TaxEngine::new(config),
            json,
        }
    }

    /// Executes `command` and returns what should be printed.
    pub fn run(
        &self,
        command: &Command,
    ) -> Result<String> {
        match command {
            Command::Calculate(args) => self.calculate(&args.to_form()),
            Command::Compare(args) => self.compare(&args.to_form()),
            Command::Batch { input, output } => self.batch(input, output.as_deref()),
            Command::Slabs => self.slabs(),
            Command::Deductions => self.deductions(),
            Command::Faq => self.faq(),
        }
    }

    pub fn calculate(
        &self,
        form: &TaxForm,
    ) -> Result<String> {
        let request = form.to_request();
        let result = self.engine.compute_request(&request);
        info!(regime = %request.regime, total_tax = %result.total_tax, "calculated");

        if self.json {
            return to_json(&CalculationOutput {
                request: &request,
                result: &result,
            });
        }
        Ok(render_result(&result, request.regime, self.engine.config().cess_rate))
    }

    pub fn compare(
        &self,
        form: &TaxForm,
    ) -> Result<String> {
        let request = form.to_request();
        let comparison =
            self.engine
                .compare_regimes(request.gross_income, &request.deductions, request.age);
        info!(recommended = %comparison.recommended, savings = %comparison.savings, "compared regimes");

        if self.json {
            return to_json(&comparison);
        }
        Ok(render_comparison(&comparison))
    }

    /// Computes every row of `input`. The report (CSV, or JSON with
    /// `--json`) goes to `output` when given, otherwise it is returned.
    pub fn batch(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<String> {
        let entries = TaxFormLoader::load_from_file(input)
            .with_context(|| format!("failed to load batch file '{}'", input.display()))?;
        let outcomes = compute_batch(&self.engine, entries);
        info!(rows = outcomes.len(), input = %input.display(), "batch computed");

        let report = if self.json {
            let rows: Vec<BatchRowOutput<'_>> = outcomes.iter().map(Into::into).collect();
            to_json(&rows)?
        } else {
            let mut buffer = Vec::new();
            write_report(&mut buffer, &outcomes).context("failed to render report")?;
            String::from_utf8(buffer).context("report is not valid UTF-8")?
        };

        match output {
            Some(path) => {
                let mut file = BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("cannot create report '{}'", path.display()))?,
                );
                file.write_all(report.as_bytes())
                    .and_then(|()| file.flush())
                    .with_context(|| format!("failed to write report '{}'", path.display()))?;
                Ok(format!("Wrote {} rows to {}\n", outcomes.len(), path.display()))
            }
            None => Ok(report),
        }
    }

    pub fn slabs(&self) -> Result<String> {
        let tables = slab_tables();
        if self.json {
            return to_json(&tables);
        }
        Ok(render_slab_tables(&tables))
    }

    pub fn deductions(&self) -> Result<String> {
        let catalogue = deduction_catalogue(self.engine.config());
        if self.json {
            return to_json(&catalogue);
        }
        Ok(render_deductions(&catalogue))
    }

    pub fn faq(&self) -> Result<String> {
        if self.json {
            return to_json(&FAQ);
        }
        Ok(render_faq(&FAQ))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}
