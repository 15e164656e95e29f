use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn sizes(values: &[u8]) -> GroupSizes {
    values.iter().copied().collect()
}

#[test]
fn test_split_pattern() {
    assert_eq!(split_pattern("#,##0.00;-#,##0.00"), ("#,##0.00", "-#,##0.00"));
    assert_eq!(split_pattern("#,##0.00"), ("#,##0.00", "#,##0.00"));
}

#[test]
fn test_number_pattern() {
    assert_eq!(
        classify_number("#,##0.00;-#,##0.00"),
        NumberPattern {
            decimal_digits: 2,
            group_sizes: sizes(&[3]),
            negative: 1,
        }
    );
}

#[test]
fn test_number_fraction_counts_hash_and_zero() {
    assert_eq!(classify_number("#,##0.###").decimal_digits, 3);
    assert_eq!(classify_number("#,##0").decimal_digits, 0);
    assert_eq!(classify_number("0.0#E0").decimal_digits, 2);
}

#[test]
fn test_number_group_sizes() {
    assert_eq!(classify_number("#,##,##0.###").group_sizes, sizes(&[2, 3]));
    assert_eq!(classify_number("0.00").group_sizes, sizes(&[3]));
    assert_eq!(
        classify_number("#,#,#,#,#,##0").group_sizes,
        sizes(&[1, 1, 1, 1, 3])
    );
}

#[test]
fn test_number_negative_codes() {
    let code = |p: &str| classify_number(p).negative;
    assert_eq!(code("#,##0.00;(#,##0.00)"), 0);
    assert_eq!(code("#,##0.00;- #,##0.00"), 2);
    assert_eq!(code("#,##0.00;-#,##0.00"), 1);
    assert_eq!(code("#,##0.00;#,##0.00 -"), 4);
    assert_eq!(code("#,##0.00;#,##0.00-"), 3);
    assert_eq!(code("#,##0.00"), 1);
}

#[test]
fn test_currency_examples() {
    let parens = classify_currency("¤#,##0.00;(¤#,##0.00)");
    assert_eq!(parens.positive, 0);
    assert_eq!(parens.negative, 0);
    assert_eq!(parens.decimal_digits, 2);
    assert_eq!(parens.group_sizes, sizes(&[3]));

    assert_eq!(classify_currency("¤#,##0.00;¤-#,##0.00").negative, 2);
}

#[test]
fn test_currency_positive_codes() {
    let code = |p: &str| classify_currency(p).positive;
    assert_eq!(code("¤ #,##0.00"), 2);
    assert_eq!(code("¤#,##0.00"), 0);
    assert_eq!(code("#,##0.00 ¤"), 3);
    assert_eq!(code("#,##0.00¤"), 1);
    assert_eq!(code("#,##0.00"), 0);
    // No-break space counts as a space.
    assert_eq!(code("#,##0.00\u{a0}¤"), 3);
}

#[test]
fn test_currency_negative_table() {
    let cases = [
        ("(¤ #,##0.00)", 14),
        ("(¤#,##0.00)", 0),
        ("¤ #,##0.00-", 11),
        ("¤#,##0.00-", 3),
        ("(#,##0.00 ¤)", 15),
        ("(#,##0.00¤)", 4),
        ("-# ¤", 8),
        ("-#¤", 5),
        ("-¤ #", 9),
        ("-¤#", 1),
        ("¤ -#", 12),
        ("¤-#", 2),
        ("# ¤-", 10),
        ("#¤-", 7),
        ("#- ¤", 13),
        ("#-¤", 6),
        ("#", 0),
    ];
    for (negative, expected) in cases {
        let pattern = format!("¤#;{negative}");
        assert_eq!(
            classify_currency(&pattern).negative,
            expected,
            "negative part {negative:?}"
        );
    }
}

#[test]
fn test_currency_parenthesized_trailing_glyph() {
    assert_eq!(classify_currency("#,##0.00 ¤;(#,##0.00 ¤)").negative, 15);
    assert_eq!(classify_currency("#,##0.00¤;(#,##0.00¤)").negative, 4);
    assert_eq!(classify_currency("#,##0.00\u{a0}¤;(#,##0.00\u{a0}¤)").negative, 15);
}

#[test]
fn test_currency_digits_count_zeros_only() {
    assert_eq!(classify_currency("¤#,##0.00").decimal_digits, 2);
    assert_eq!(classify_currency("¤#,##0.##").decimal_digits, 0);
    assert_eq!(classify_currency("¤#,##0").decimal_digits, 0);
}

#[test]
fn test_percent_patterns() {
    assert_eq!(
        classify_percent("#,##0%"),
        PercentPattern {
            decimal_digits: 2,
            group_sizes: sizes(&[3]),
            positive: 1,
            negative: 1,
        }
    );
    let spaced = classify_percent("#,##0\u{a0}%");
    assert_eq!((spaced.positive, spaced.negative), (0, 0));
    let leading = classify_percent("%#,##0");
    assert_eq!((leading.positive, leading.negative), (2, 2));
    assert_eq!(classify_percent("#,##0.0%").decimal_digits, 1);
}

#[test]
fn test_percent_without_groups() {
    let plain = classify_percent("0%");
    assert_eq!(plain.decimal_digits, 2);
    assert_eq!(plain.group_sizes, sizes(&[3]));
    assert_eq!(plain.positive, 1);
}

#[test]
fn test_percent_negative_part() {
    let p = classify_percent("#,##0 %;-#,##0%");
    assert_eq!((p.positive, p.negative), (0, 1));
}

proptest! {
    #[test]
    fn classifiers_accept_anything(pattern in "[#0,.;%¤() \\-a-z]{0,24}") {
        let number = classify_number(&pattern);
        prop_assert!(!number.group_sizes.is_empty());
        prop_assert!(number.negative <= 4);

        let currency = classify_currency(&pattern);
        prop_assert!(currency.positive <= 3);
        prop_assert!(currency.negative <= 15);

        let percent = classify_percent(&pattern);
        prop_assert!(percent.positive <= 2 && percent.negative <= 2);
    }
}
