use super::*;
use pretty_assertions::assert_eq;

fn parts(month_day: Option<&str>, year_month: Option<&str>) -> DatePatternParts {
    DatePatternParts {
        month_day: month_day.map(str::to_string),
        year_month: year_month.map(str::to_string),
    }
}

#[test]
fn test_spanish_full_date() {
    assert_eq!(
        split_full_date_pattern("dddd, d' de 'MMMM' de 'yyyy"),
        parts(Some("d' de 'MMMM"), Some("MMMM' de 'yyyy"))
    );
}

#[test]
fn test_english_full_date() {
    assert_eq!(
        split_full_date_pattern("dddd, MMMM d, yyyy"),
        parts(Some("MMMM d"), Some("MMMM yyyy"))
    );
}

#[test]
fn test_day_first_full_date() {
    assert_eq!(
        split_full_date_pattern("dddd d MMMM yyyy"),
        parts(Some("d MMMM"), Some("MMMM yyyy"))
    );
}

#[test]
fn test_year_first_full_date() {
    assert_eq!(
        split_full_date_pattern("yyyy. MMMM d., dddd"),
        parts(Some("MMMM d."), Some("yyyy. MMMM"))
    );
}

#[test]
fn test_quoted_control_letters_are_text() {
    assert_eq!(
        split_full_date_pattern("d 'ta' MMMM"),
        parts(Some("d 'ta' MMMM"), Some("MMMM"))
    );
}

#[test]
fn test_time_fields_end_runs() {
    assert_eq!(
        split_full_date_pattern("d MMMM HH:mm yyyy"),
        parts(Some("d MMMM"), Some("MMMM yyyy"))
    );
}

#[test]
fn test_runs_never_started() {
    assert_eq!(split_full_date_pattern("dddd"), parts(None, None));
    assert_eq!(split_full_date_pattern("yyyy"), parts(None, Some("yyyy")));
}

#[test]
fn test_trim_pattern() {
    assert_eq!(trim_pattern("  MMMM d, "), "MMMM d");
    assert_eq!(trim_pattern("d' de 'MMMM' del '"), "d' de 'MMMM");
    assert_eq!(trim_pattern("MMMM'ren'"), "MMMM");
    // Only one connective is removed.
    assert_eq!(trim_pattern("MMMM' de '' de '"), "MMMM' de '");
    assert_eq!(trim_pattern("d MMMM"), "d MMMM");
}

#[test]
fn test_convert_time_pattern() {
    assert_eq!(convert_time_pattern("h:mm a"), "h:mm t");
    assert_eq!(convert_time_pattern("h:mm 'a' a"), "h:mm 'a' t");
    assert_eq!(convert_time_pattern("HH:mm:ss"), "HH:mm:ss");
}

#[test]
fn test_compose_full_date_time() {
    assert_eq!(
        compose_full_date_time(Some("{1} {0}"), "dddd, MMMM d, yyyy", "h:mm:ss t"),
        "dddd, MMMM d, yyyy h:mm:ss t"
    );
    assert_eq!(
        compose_full_date_time(Some("{0} {1}"), "D", "T"),
        "T D"
    );
    assert_eq!(compose_full_date_time(None, "D", "T"), "D T");
}
