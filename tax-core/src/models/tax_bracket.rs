use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal slab. Income above the previous bracket's `max_income` and
/// up to this bracket's `max_income` is taxed at `tax_rate`; `None` means
/// the slab is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}
