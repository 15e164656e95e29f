//! Number, percent and currency pattern classification.
//!
//! Patterns are `positive[;negative]`. Digit counts and group sizes come
//! from the positive part; arrangement codes come from whichever part
//! describes that sign. Arrangement rules are ordered literal tests and
//! the first match wins.

use locc_ir::GroupSizes;
use smallvec::smallvec;

/// The generic currency glyph used in currency patterns.
pub const CURRENCY_SIGN: char = '¤';

/// Classified plain number pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPattern {
    pub decimal_digits: u8,
    pub group_sizes: GroupSizes,
    pub negative: u8,
}

/// Classified percent pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PercentPattern {
    pub decimal_digits: u8,
    pub group_sizes: GroupSizes,
    pub positive: u8,
    pub negative: u8,
}

/// Classified currency pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyPattern {
    pub decimal_digits: u8,
    pub group_sizes: GroupSizes,
    pub positive: u8,
    pub negative: u8,
}

/// An arrangement test: both affixes must match; an empty affix always does.
struct Rule {
    prefix: &'static str,
    suffix: &'static str,
    code: u8,
}

const fn rule(prefix: &'static str, suffix: &'static str, code: u8) -> Rule {
    Rule {
        prefix,
        suffix,
        code,
    }
}

fn arrangement(pattern: &str, rules: &[Rule], default: u8) -> u8 {
    rules
        .iter()
        .find(|r| pattern.starts_with(r.prefix) && pattern.ends_with(r.suffix))
        .map_or(default, |r| r.code)
}

const NUMBER_NEGATIVE: &[Rule] = &[
    rule("(", ")", 0),
    rule("- ", "", 2),
    rule("-", "", 1),
    rule("", " -", 4),
    rule("", "-", 3),
];

const PERCENT: &[Rule] = &[rule("%", "", 2), rule("", " %", 0), rule("", "%", 1)];

const CURRENCY_POSITIVE: &[Rule] = &[
    rule("¤ ", "", 2),
    rule("¤", "", 0),
    rule("", " ¤", 3),
    rule("", "¤", 1),
];

const CURRENCY_NEGATIVE: &[Rule] = &[
    rule("(¤ ", ")", 14),
    rule("(¤", ")", 0),
    rule("¤ ", "-", 11),
    rule("¤", "-", 3),
    rule("(", " ¤)", 15),
    rule("(", "¤)", 4),
    rule("-", " ¤", 8),
    rule("-", "¤", 5),
    rule("-¤ ", "", 9),
    rule("-¤", "", 1),
    rule("¤ -", "", 12),
    rule("¤-", "", 2),
    rule("", " ¤-", 10),
    rule("", "¤-", 7),
    rule("", "- ¤", 13),
    rule("", "-¤", 6),
];

/// Split `positive[;negative]`; without `;` the negative part is the
/// positive part.
pub fn split_pattern(pattern: &str) -> (&str, &str) {
    pattern.split_once(';').unwrap_or((pattern, pattern))
}

/// Fold the no-break spaces used in locale data to plain spaces so the
/// arrangement tests see one kind of space.
fn normalize_spaces(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '\u{a0}' | '\u{202f}' => ' ',
            c => c,
        })
        .collect()
}

fn to_u8(count: usize) -> u8 {
    u8::try_from(count).unwrap_or(u8::MAX)
}

fn count_placeholders(segment: &str, placeholder: impl Fn(char) -> bool) -> usize {
    segment.chars().filter(|&c| placeholder(c)).count()
}

/// Leading placeholder run after the first decimal point; 0 without one.
fn fraction_digits(positive: &str, placeholder: impl Fn(char) -> bool) -> u8 {
    positive.split_once('.').map_or(0, |(_, fraction)| {
        to_u8(fraction.chars().take_while(|&c| placeholder(c)).count())
    })
}

fn is_digit_placeholder(c: char) -> bool {
    c == '#' || c == '0'
}

/// Placeholder count of every comma-separated segment after the first,
/// left to right; `[3]` when there is no comma.
fn group_sizes(positive: &str) -> GroupSizes {
    let integer = positive.split_once('.').map_or(positive, |(integer, _)| integer);
    let sizes: GroupSizes = integer
        .split(',')
        .skip(1)
        .map(|segment| to_u8(count_placeholders(segment, is_digit_placeholder)))
        .collect();
    if sizes.is_empty() {
        smallvec![3]
    } else {
        sizes
    }
}

/// Classify a plain number pattern such as `#,##0.00;-#,##0.00`.
pub fn classify_number(pattern: &str) -> NumberPattern {
    let (positive, negative) = split_pattern(pattern);
    let negative = normalize_spaces(negative);
    NumberPattern {
        decimal_digits: fraction_digits(positive, is_digit_placeholder),
        group_sizes: group_sizes(positive),
        negative: arrangement(&negative, NUMBER_NEGATIVE, 1),
    }
}

/// Classify a percent pattern such as `#,##0 %`.
///
/// The glyph placement is tested first, then the glyph is removed and the
/// digits are read from what remains. A comma group ending in `0` gives the
/// decimal digit count as its length minus one, unless the group carries
/// an explicit decimal point.
pub fn classify_percent(pattern: &str) -> PercentPattern {
    let (positive, negative) = split_pattern(pattern);
    let positive = normalize_spaces(positive);
    let negative = normalize_spaces(negative);

    let positive_code = arrangement(&positive, PERCENT, 0);
    let negative_code = arrangement(negative.trim_start_matches('-'), PERCENT, 0);

    let digits_only = positive.replace('%', "");
    let digits_only = digits_only.trim();

    let mut decimal_digits = 2;
    let mut sizes = GroupSizes::new();
    for segment in digits_only.split(',').skip(1) {
        match segment.split_once('.') {
            Some((integer, fraction)) => {
                sizes.push(to_u8(count_placeholders(integer, is_digit_placeholder)));
                decimal_digits = to_u8(fraction.chars().take_while(|&c| c == '0').count());
            }
            None => {
                sizes.push(to_u8(count_placeholders(segment, is_digit_placeholder)));
                if segment.ends_with('0') {
                    decimal_digits = to_u8(segment.chars().count().saturating_sub(1));
                }
            }
        }
    }
    if sizes.is_empty() {
        sizes.push(3);
    }

    PercentPattern {
        decimal_digits,
        group_sizes: sizes,
        positive: positive_code,
        negative: negative_code,
    }
}

/// Classify a currency pattern such as `¤#,##0.00;(¤#,##0.00)`.
pub fn classify_currency(pattern: &str) -> CurrencyPattern {
    let (positive, negative) = split_pattern(pattern);
    let positive = normalize_spaces(positive);
    let negative = normalize_spaces(negative);
    CurrencyPattern {
        decimal_digits: fraction_digits(&positive, |c| c == '0'),
        group_sizes: group_sizes(&positive),
        positive: arrangement(&positive, CURRENCY_POSITIVE, 0),
        negative: arrangement(&negative, CURRENCY_NEGATIVE, 0),
    }
}

#[cfg(test)]
mod tests;
