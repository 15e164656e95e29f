//! Number merge for one layer.

use locc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use locc_ir::merge::merge_scalar;
use locc_ir::{GroupSizes, LocaleDescriptor, MAX_GROUP_SIZES};
use locc_markup::Document;
use locc_patterns::{classify_currency, classify_number, classify_percent};

const NUMBERS: &str = "ldml/numbers";

fn symbol(doc: &Document, name: &str) -> Option<String> {
    doc.value(&format!("{NUMBERS}/symbols/{name}"))
        .map(str::to_string)
}

fn format_pattern<'d>(doc: &'d Document, kind: &str) -> Option<&'d str> {
    doc.value(&format!(
        "{NUMBERS}/{kind}Formats/{kind}FormatLength/{kind}Format/pattern"
    ))
}

/// Truncate a group-size sequence to what the tables can hold.
fn bounded_groups(
    mut sizes: GroupSizes,
    domain: &str,
    locale: &str,
    diagnostics: &mut DiagnosticQueue,
) -> GroupSizes {
    if sizes.len() > MAX_GROUP_SIZES {
        diagnostics.report(
            Diagnostic::warning(ErrorCode::W2004)
                .with_message(format!(
                    "{domain} pattern has {} digit groups",
                    sizes.len()
                ))
                .with_locale(locale)
                .with_note(format!("only the first {MAX_GROUP_SIZES} are kept")),
        );
        sizes.truncate(MAX_GROUP_SIZES);
    }
    sizes
}

/// Apply one layer's number data. `currency` is the ISO code mapped to the
/// locale's territory, if any.
pub(crate) fn merge_number(
    locale: &mut LocaleDescriptor,
    doc: &Document,
    currency: Option<&str>,
    diagnostics: &mut DiagnosticQueue,
) {
    let name = locale.name.as_str();
    let number = &mut locale.number;

    merge_scalar(&mut number.decimal_separator, symbol(doc, "decimal"));
    merge_scalar(&mut number.group_separator, symbol(doc, "group"));
    merge_scalar(&mut number.percent_symbol, symbol(doc, "percentSign"));
    merge_scalar(&mut number.positive_sign, symbol(doc, "plusSign"));
    merge_scalar(&mut number.negative_sign, symbol(doc, "minusSign"));
    merge_scalar(&mut number.per_mille_symbol, symbol(doc, "perMille"));
    merge_scalar(&mut number.positive_infinity_symbol, symbol(doc, "infinity"));
    merge_scalar(&mut number.nan_symbol, symbol(doc, "nan"));

    if let Some(pattern) = format_pattern(doc, "decimal") {
        let classified = classify_number(pattern);
        number.number_decimal_digits = classified.decimal_digits;
        number.number_group_sizes = bounded_groups(classified.group_sizes, "number", name, diagnostics);
        number.number_negative_pattern = classified.negative;
    }

    if let Some(pattern) = format_pattern(doc, "percent") {
        let classified = classify_percent(pattern);
        number.percent_decimal_digits = classified.decimal_digits;
        number.percent_group_sizes =
            bounded_groups(classified.group_sizes, "percent", name, diagnostics);
        number.percent_positive_pattern = classified.positive;
        number.percent_negative_pattern = classified.negative;
    }

    if let Some(pattern) = format_pattern(doc, "currency") {
        let classified = classify_currency(pattern);
        number.currency_decimal_digits = classified.decimal_digits;
        number.currency_group_sizes =
            bounded_groups(classified.group_sizes, "currency", name, diagnostics);
        number.currency_positive_pattern = classified.positive;
        number.currency_negative_pattern = classified.negative;
    }

    if let Some(code) = currency {
        merge_scalar(
            &mut number.currency_symbol,
            doc.value(&format!(
                "{NUMBERS}/currencies/currency[@type='{code}']/symbol"
            ))
            .map(str::to_string),
        );
    }
}
