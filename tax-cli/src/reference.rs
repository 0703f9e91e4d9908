//! Static reference material: slab listings, the deduction catalogue and
//! the FAQ.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::calculations::{SlabRange, slab_ranges};
use tax_core::{AgeCategory, EngineConfig, TaxRegime};

use crate::format::{format_inr, format_percent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabTable {
    pub regime: TaxRegime,
    /// `None` for the new regime, whose slabs do not depend on age.
    pub age: Option<AgeCategory>,
    pub slabs: Vec<SlabRange>,
}

/// Every distinct slab table: the new regime once, the old regime per age.
pub fn slab_tables() -> Vec<SlabTable> {
    let mut tables = vec![SlabTable {
        regime: TaxRegime::New,
        age: None,
        slabs: slab_ranges(TaxRegime::New, AgeCategory::Below60),
    }];
    tables.extend(AgeCategory::all().iter().map(|age| SlabTable {
        regime: TaxRegime::Old,
        age: Some(*age),
        slabs: slab_ranges(TaxRegime::Old, *age),
    }));
    tables
}

fn range_label(slab: &SlabRange) -> String {
    match slab.max_income {
        Some(max) if slab.min_income.is_zero() => format!("Up to {}", format_inr(max)),
        Some(max) => format!("{} - {}", format_inr(slab.min_income), format_inr(max)),
        None => format!("Above {}", format_inr(slab.min_income)),
    }
}

/// Text listing of slab tables.
pub struct SlabListing<'a>(pub &'a [SlabTable]);

impl fmt::Display for SlabListing<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for table in self.0 {
            match table.age {
                Some(age) => writeln!(f, "{} ({})", table.regime.label(), age.label())?,
                None => writeln!(f, "{} (all ages)", table.regime.label())?,
            }
            for slab in &table.slabs {
                writeln!(
                    f,
                    "  {:<32}{:>6}",
                    range_label(slab),
                    format_percent(slab.tax_rate)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_slab_tables(tables: &[SlabTable]) -> String {
    SlabListing(tables).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeductionInfo {
    pub section: &'static str,
    /// `None` when the exemption depends on salary and rent.
    pub limit: Option<Decimal>,
    pub description: &'static str,
}

/// Old-regime deductions, with limits taken from `config`.
pub fn deduction_catalogue(config: &EngineConfig) -> Vec<DeductionInfo> {
    vec![
        DeductionInfo {
            section: "80C",
            limit: Some(config.section_80c_cap),
            description: "PPF, ELSS, Life Insurance Premium, Home Loan Principal, etc.",
        },
        DeductionInfo {
            section: "80D",
            limit: Some(config.section_80d_cap),
            description: "Health Insurance Premium for self and family",
        },
        DeductionInfo {
            section: "24",
            limit: Some(config.home_loan_interest_cap),
            description: "Home Loan Interest for self-occupied property",
        },
        DeductionInfo {
            section: "HRA",
            limit: None,
            description: "House Rent Allowance exemption",
        },
    ]
}

pub struct DeductionListing<'a>(pub &'a [DeductionInfo]);

impl fmt::Display for DeductionListing<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{:<10}{:>12}  Description", "Section", "Limit")?;
        for info in self.0 {
            let limit = info.limit.map_or_else(|| "Variable".to_string(), format_inr);
            writeln!(f, "{:<10}{:>12}  {}", info.section, limit, info.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Deductions apply under the Old Regime only.")
    }
}

pub fn render_deductions(catalogue: &[DeductionInfo]) -> String {
    DeductionListing(catalogue).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Which tax regime should I choose?",
        answer: "The choice depends on your deductions. If you have significant \
                 deductions (80C, 80D, HRA, home loan interest), the Old Regime may \
                 be beneficial. Otherwise, the New Regime with lower rates might save \
                 you more. Use the compare command to check.",
    },
    FaqEntry {
        question: "What is the due date for filing ITR?",
        answer: "For individuals not requiring an audit, the due date is usually \
                 July 31st of the assessment year. It can be extended by the \
                 government.",
    },
    FaqEntry {
        question: "Can I switch between tax regimes?",
        answer: "Salaried individuals can choose a regime every year. Individuals \
                 with business income can switch back to the Old Regime only once.",
    },
    FaqEntry {
        question: "What documents do I need for tax filing?",
        answer: "Form 16, salary slips, investment proofs for deductions, bank \
                 statements, and rent receipts if claiming HRA.",
    },
];

pub struct FaqListing<'a>(pub &'a [FaqEntry]);

impl fmt::Display for FaqListing<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            writeln!(f, "Q{}. {}", i + 1, entry.question)?;
            writeln!(f, "    {}", entry.answer)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_faq(entries: &[FaqEntry]) -> String {
    FaqListing(entries).to_string()
}
