pub mod calculations;
pub mod input;
pub mod models;

pub use calculations::{RegimeComparison, TaxEngine};
pub use input::{TaxForm, TaxRequest};
pub use models::*;
