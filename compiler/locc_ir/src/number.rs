//! Number, percent and currency formatting record.

use smallvec::{smallvec, SmallVec};

use crate::pool::{PoolError, PoolKind};

/// Maximum number of group sizes the consumer stores per domain.
pub const MAX_GROUP_SIZES: usize = 5;

/// Digit-group sizes, most significant group last.
pub type GroupSizes = SmallVec<[u8; MAX_GROUP_SIZES]>;

/// Resolved number formatting data for one locale.
///
/// Digit counts, group sizes and arrangement codes always hold a value; the
/// defaults below apply until some layer supplies a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormatDescriptor {
    pub decimal_separator: Option<String>,
    pub group_separator: Option<String>,

    pub number_decimal_digits: u8,
    pub number_group_sizes: GroupSizes,
    pub number_negative_pattern: u8,

    pub percent_decimal_digits: u8,
    pub percent_group_sizes: GroupSizes,
    pub percent_positive_pattern: u8,
    pub percent_negative_pattern: u8,

    pub currency_decimal_digits: u8,
    pub currency_group_sizes: GroupSizes,
    pub currency_positive_pattern: u8,
    pub currency_negative_pattern: u8,

    pub positive_sign: Option<String>,
    pub negative_sign: Option<String>,
    pub percent_symbol: Option<String>,
    pub per_mille_symbol: Option<String>,
    pub nan_symbol: Option<String>,
    pub positive_infinity_symbol: Option<String>,
    /// Derived from the negative sign and infinity symbol when finalized.
    pub negative_infinity_symbol: Option<String>,
    pub currency_symbol: Option<String>,
}

impl Default for NumberFormatDescriptor {
    fn default() -> Self {
        NumberFormatDescriptor {
            decimal_separator: None,
            group_separator: None,
            number_decimal_digits: 2,
            number_group_sizes: smallvec![3],
            number_negative_pattern: 1,
            percent_decimal_digits: 2,
            percent_group_sizes: smallvec![3],
            percent_positive_pattern: 0,
            percent_negative_pattern: 0,
            currency_decimal_digits: 2,
            currency_group_sizes: smallvec![3],
            currency_positive_pattern: 0,
            currency_negative_pattern: 0,
            positive_sign: None,
            negative_sign: None,
            percent_symbol: None,
            per_mille_symbol: None,
            nan_symbol: None,
            positive_infinity_symbol: None,
            negative_infinity_symbol: None,
            currency_symbol: None,
        }
    }
}

impl NumberFormatDescriptor {
    pub(crate) fn for_each_string<F>(&self, f: &mut F) -> Result<(), PoolError>
    where
        F: FnMut(PoolKind, &str) -> Result<(), PoolError>,
    {
        let symbols = [
            &self.decimal_separator,
            &self.group_separator,
            &self.positive_sign,
            &self.negative_sign,
            &self.percent_symbol,
            &self.per_mille_symbol,
            &self.nan_symbol,
            &self.positive_infinity_symbol,
            &self.negative_infinity_symbol,
            &self.currency_symbol,
        ];
        for text in symbols.into_iter().flatten() {
            f(PoolKind::General, text.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
