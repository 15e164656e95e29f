//! Formatting-pattern classifiers.
//!
//! Locale documents describe formats as patterns; the runtime wants digit
//! counts, group sizes and small arrangement codes. These functions do the
//! reduction. None of them fail: a pattern no rule recognizes yields the
//! default code.

mod datetime;
mod number;

pub use datetime::{
    compose_full_date_time, convert_time_pattern, split_full_date_pattern, trim_pattern,
    DatePatternParts,
};
pub use number::{
    classify_currency, classify_number, classify_percent, split_pattern, CurrencyPattern,
    NumberPattern, PercentPattern, CURRENCY_SIGN,
};
