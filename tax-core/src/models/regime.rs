use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known [`TaxRegime`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tax regime '{0}' (expected 'old' or 'new')")]
pub struct ParseRegimeError(pub String);

/// The two alternative statutory schemes a filer can choose between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// More deductions, higher rates, age-dependent exemption.
    #[default]
    Old,
    /// No deductions, lower rates, age-independent slabs.
    New,
}

impl TaxRegime {
    pub fn all() -> &'static [TaxRegime] {
        &[TaxRegime::Old, TaxRegime::New]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Regime",
            Self::New => "New Regime",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    /// Lenient form-field conversion: anything that is not `new` is the old
    /// regime, which is what the calculator form preselects.
    pub fn from_form_value(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            if !s.trim().is_empty() {
                tracing::warn!(input = %s, "unrecognised tax regime, using old regime");
            }
            Self::Old
        })
    }

    pub fn allows_deductions(&self) -> bool {
        matches!(self, Self::Old)
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxRegime {
    type Err = ParseRegimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseRegimeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_form_values() {
        assert_eq!(TaxRegime::parse("old"), Some(TaxRegime::Old));
        assert_eq!(TaxRegime::parse("new"), Some(TaxRegime::New));
        assert_eq!(TaxRegime::parse(" NEW "), Some(TaxRegime::New));
    }

    #[test]
    fn from_str_rejects_unknown_regime() {
        let err = "flat".parse::<TaxRegime>().unwrap_err();

        assert_eq!(err, ParseRegimeError("flat".to_string()));
        assert!(err.to_string().contains("flat"));
    }

    #[test]
    fn form_value_defaults_to_old() {
        assert_eq!(TaxRegime::from_form_value(""), TaxRegime::Old);
        assert_eq!(TaxRegime::from_form_value("garbage"), TaxRegime::Old);
        assert_eq!(TaxRegime::from_form_value("new"), TaxRegime::New);
    }

    #[test]
    fn only_old_regime_allows_deductions() {
        assert!(TaxRegime::Old.allows_deductions());
        assert!(!TaxRegime::New.allows_deductions());
    }
}
