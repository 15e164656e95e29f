use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults_before_any_layer() {
    let number = NumberFormatDescriptor::default();
    assert_eq!(number.number_decimal_digits, 2);
    assert_eq!(number.number_group_sizes.as_slice(), &[3]);
    assert_eq!(number.number_negative_pattern, 1);
    assert_eq!(number.percent_positive_pattern, 0);
    assert_eq!(number.currency_negative_pattern, 0);
    assert_eq!(number.currency_group_sizes.as_slice(), &[3]);
}

#[test]
fn test_strings_go_to_general_pool() {
    let number = NumberFormatDescriptor {
        decimal_separator: Some(",".into()),
        nan_symbol: Some("NaN".into()),
        currency_symbol: Some("€".into()),
        ..NumberFormatDescriptor::default()
    };
    let mut seen = Vec::new();
    number
        .for_each_string(&mut |kind, text: &str| {
            seen.push((kind, text.to_string()));
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        seen,
        vec![
            (PoolKind::General, ",".to_string()),
            (PoolKind::General, "NaN".to_string()),
            (PoolKind::General, "€".to_string()),
        ]
    );
}
