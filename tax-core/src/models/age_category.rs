use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known [`AgeCategory`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown age category '{0}' (expected 'below60', 'senior' or 'superSenior')")]
pub struct ParseAgeCategoryError(pub String);

/// Age band of the filer. Only the old regime's exemption threshold depends
/// on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgeCategory {
    #[default]
    Below60,
    /// 60 to 80 years.
    Senior,
    /// Above 80 years.
    SuperSenior,
}

impl AgeCategory {
    pub fn all() -> &'static [AgeCategory] {
        &[
            AgeCategory::Below60,
            AgeCategory::Senior,
            AgeCategory::SuperSenior,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "below60",
            Self::Senior => "senior",
            Self::SuperSenior => "superSenior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Below60 => "Below 60 years",
            Self::Senior => "60-80 years",
            Self::SuperSenior => "Above 80 years",
        }
    }

    /// Case-insensitive; also accepts `super-senior` and `super_senior`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "below60" => Some(Self::Below60),
            "senior" => Some(Self::Senior),
            "supersenior" | "super-senior" | "super_senior" => Some(Self::SuperSenior),
            _ => None,
        }
    }

    /// Lenient form-field conversion, defaulting to [`AgeCategory::Below60`].
    pub fn from_form_value(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            if !s.trim().is_empty() {
                tracing::warn!(input = %s, "unrecognised age category, using below60");
            }
            Self::Below60
        })
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeCategory {
    type Err = ParseAgeCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseAgeCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for age in AgeCategory::all() {
            assert_eq!(AgeCategory::parse(age.as_str()), Some(*age));
        }
    }

    #[test]
    fn parse_accepts_super_senior_spellings() {
        assert_eq!(AgeCategory::parse("superSenior"), Some(AgeCategory::SuperSenior));
        assert_eq!(AgeCategory::parse("super-senior"), Some(AgeCategory::SuperSenior));
        assert_eq!(AgeCategory::parse("SUPER_SENIOR"), Some(AgeCategory::SuperSenior));
    }

    #[test]
    fn from_str_rejects_unknown_category() {
        assert_eq!(
            "teen".parse::<AgeCategory>(),
            Err(ParseAgeCategoryError("teen".to_string()))
        );
    }

    #[test]
    fn form_value_defaults_to_below60() {
        assert_eq!(AgeCategory::from_form_value("70"), AgeCategory::Below60);
        assert_eq!(AgeCategory::from_form_value("senior"), AgeCategory::Senior);
    }

    #[test]
    fn display_uses_form_names() {
        assert_eq!(AgeCategory::SuperSenior.to_string(), "superSenior");
        assert_eq!(AgeCategory::Below60.to_string(), "below60");
    }
}
