mod age_category;
mod deduction_input;
mod engine_config;
mod regime;
mod tax_bracket;
mod tax_computation;

pub use age_category::{AgeCategory, ParseAgeCategoryError};
pub use deduction_input::DeductionInput;
pub use engine_config::EngineConfig;
pub use regime::{ParseRegimeError, TaxRegime};
pub use tax_bracket::TaxBracket;
pub use tax_computation::TaxComputationResult;
