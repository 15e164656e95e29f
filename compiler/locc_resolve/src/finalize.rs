//! Post-merge fixups and interning.

use locc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use locc_ir::{
    InternPools, LocaleDescriptor, PoolError, NUM_DAYS, NUM_LONG_DATE_PATTERNS,
    NUM_LONG_TIME_PATTERNS, NUM_MONTHS, NUM_SHORT_DATE_PATTERNS, NUM_SHORT_TIME_PATTERNS,
};
use locc_patterns::compose_full_date_time;

const DEFAULT_NEGATIVE_SIGN: &str = "-";

fn arity_warning(locale: &str, field: &str, found: usize, expected: &str) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W2004)
        .with_message(format!("{field} has {found} entries, expected {expected}"))
        .with_locale(locale)
}

/// Pad or truncate a name list to exactly `len` entries.
fn fit_names(
    names: &mut Vec<String>,
    len: usize,
    field: &str,
    locale: &str,
    diagnostics: &mut DiagnosticQueue,
) {
    if names.len() != len {
        diagnostics.report(arity_warning(locale, field, names.len(), &len.to_string()));
        names.resize(len, String::new());
    }
}

/// Month lists hold 12 or 13 entries; 12 gains an empty 13th.
fn fit_months(names: &mut Vec<String>, field: &str, locale: &str, diagnostics: &mut DiagnosticQueue) {
    if names.len() == NUM_MONTHS - 1 {
        names.push(String::new());
    } else if names.len() != NUM_MONTHS {
        diagnostics.report(arity_warning(locale, field, names.len(), "12 or 13"));
        names.resize(NUM_MONTHS, String::new());
    }
}

/// Put the primary pattern first, drop duplicates, and cap the length.
fn fold_patterns(
    primary: Option<&str>,
    extras: &mut Vec<String>,
    capacity: usize,
    field: &str,
    locale: &str,
    diagnostics: &mut DiagnosticQueue,
) {
    let mut folded: Vec<String> = Vec::with_capacity(extras.len() + 1);
    for pattern in primary.map(str::to_string).into_iter().chain(extras.drain(..)) {
        if !folded.contains(&pattern) {
            folded.push(pattern);
        }
    }
    if folded.len() > capacity {
        diagnostics.report(arity_warning(
            locale,
            field,
            folded.len(),
            &format!("at most {capacity}"),
        ));
        folded.truncate(capacity);
    }
    *extras = folded;
}

/// Derive the fields that depend on the fully merged record.
pub(crate) fn finalize(locale: &mut LocaleDescriptor, diagnostics: &mut DiagnosticQueue) {
    let name = locale.name.as_str();
    let dt = &mut locale.datetime;

    if dt.long_date_pattern.is_some() || dt.long_time_pattern.is_some() {
        dt.full_date_time_pattern = Some(compose_full_date_time(
            dt.raw_full_date_time_pattern.as_deref(),
            dt.long_date_pattern.as_deref().unwrap_or_default(),
            dt.long_time_pattern.as_deref().unwrap_or_default(),
        ));
    }

    fit_names(&mut dt.day_names, NUM_DAYS, "day names", name, diagnostics);
    fit_names(
        &mut dt.abbreviated_day_names,
        NUM_DAYS,
        "abbreviated day names",
        name,
        diagnostics,
    );
    fit_months(&mut dt.month_names, "month names", name, diagnostics);
    fit_months(
        &mut dt.abbreviated_month_names,
        "abbreviated month names",
        name,
        diagnostics,
    );

    fold_patterns(
        dt.short_date_pattern.as_deref(),
        &mut dt.short_date_patterns,
        NUM_SHORT_DATE_PATTERNS,
        "short date patterns",
        name,
        diagnostics,
    );
    fold_patterns(
        dt.long_date_pattern.as_deref(),
        &mut dt.long_date_patterns,
        NUM_LONG_DATE_PATTERNS,
        "long date patterns",
        name,
        diagnostics,
    );
    fold_patterns(
        dt.short_time_pattern.as_deref(),
        &mut dt.short_time_patterns,
        NUM_SHORT_TIME_PATTERNS,
        "short time patterns",
        name,
        diagnostics,
    );
    fold_patterns(
        dt.long_time_pattern.as_deref(),
        &mut dt.long_time_patterns,
        NUM_LONG_TIME_PATTERNS,
        "long time patterns",
        name,
        diagnostics,
    );

    let number = &mut locale.number;
    if let Some(infinity) = &number.positive_infinity_symbol {
        let sign = number
            .negative_sign
            .as_deref()
            .unwrap_or(DEFAULT_NEGATIVE_SIGN);
        number.negative_infinity_symbol = Some(format!("{sign}{infinity}"));
    }
}

/// Intern every string the locale's table rows reference.
pub(crate) fn intern(locale: &LocaleDescriptor, pools: &mut InternPools) -> Result<(), PoolError> {
    locale.for_each_string(|kind, text| pools.acquire(kind, Some(text)).map(drop))
}
