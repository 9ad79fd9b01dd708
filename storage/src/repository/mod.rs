pub mod rating;
pub mod snapshot;

use rust_decimal::Decimal;

pub(crate) fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}
