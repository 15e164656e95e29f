//! Date/time merge for one layer.

use locc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use locc_ir::merge::{merge_list, merge_scalar};
use locc_ir::{CalendarWeekRule, DateTimeFormatDescriptor, DayOfWeek, LocaleDescriptor};
use locc_markup::{Document, Node};
use locc_patterns::{convert_time_pattern, split_full_date_pattern};

const CALENDARS: &str = "ldml/dates/calendars/calendar";
const GREGORIAN: &str = "gregorian";

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn owned_list(values: Vec<&str>) -> impl Iterator<Item = String> + '_ {
    values.into_iter().map(str::to_string)
}

fn calendar_code(token: &str) -> Option<i32> {
    match token {
        "Gregorian" => Some(0),
        "Hijri" => Some(1),
        "ThaiBuddhist" => Some(2),
        _ => None,
    }
}

fn gregorian_sub_code(token: &str) -> Option<i32> {
    match token {
        "Localized" => Some(1),
        "USEnglish" => Some(2),
        "MiddleEastFrench" => Some(9),
        "Arabic" => Some(10),
        "TransliteratedEnglish" => Some(11),
        "TransliteratedFrench" => Some(12),
        _ => None,
    }
}

/// Apply one layer's date/time data.
pub(crate) fn merge_datetime(
    locale: &mut LocaleDescriptor,
    doc: &Document,
    diagnostics: &mut DiagnosticQueue,
) {
    for calendar in doc.select(CALENDARS) {
        if calendar.attr("type").is_some_and(|t| t != GREGORIAN) {
            continue;
        }
        merge_calendar(locale, calendar, diagnostics);
    }

    let dt = &mut locale.datetime;
    merge_scalar(
        &mut dt.date_separator,
        owned(doc.value("ldml/dates/symbols/dateSeparator")),
    );
    merge_scalar(
        &mut dt.time_separator,
        owned(doc.value("ldml/dates/symbols/timeSeparator")),
    );
}

fn merge_calendar(locale: &mut LocaleDescriptor, calendar: Node<'_>, diagnostics: &mut DiagnosticQueue) {
    let dt = &mut locale.datetime;
    merge_list(&mut dt.month_names, owned_list(calendar.values("monthNames/month")));
    merge_list(
        &mut dt.abbreviated_month_names,
        owned_list(calendar.values("monthAbbr/month")),
    );
    merge_list(&mut dt.day_names, owned_list(calendar.values("dayNames/day")));
    merge_list(
        &mut dt.abbreviated_day_names,
        owned_list(calendar.values("dayAbbr/day")),
    );
    merge_scalar(&mut dt.am_designator, owned(calendar.value("am")));
    merge_scalar(&mut dt.pm_designator, owned(calendar.value("pm")));

    for length in calendar.select("dateFormats/dateFormatLength") {
        merge_date_format(dt, length);
    }
    for length in calendar.select("timeFormats/timeFormatLength") {
        merge_time_format(dt, length);
    }
    merge_scalar(
        &mut dt.raw_full_date_time_pattern,
        owned(calendar.value("dateTimeFormats/dateTimeFormatLength/dateTimeFormat/pattern")),
    );

    merge_week(dt, calendar, &locale.name, diagnostics);
    merge_optional_calendars(locale, calendar, diagnostics);
}

fn merge_date_format(dt: &mut DateTimeFormatDescriptor, length: Node<'_>) {
    let pattern = owned(length.value("dateFormat/pattern"));
    let extras = owned_list(length.values("dateFormat/extraPatterns/pattern"));
    match length.attr("type") {
        Some("full") => {
            if let Some(full) = pattern {
                let parts = split_full_date_pattern(&full);
                merge_scalar(&mut dt.month_day_pattern, parts.month_day);
                merge_scalar(&mut dt.year_month_pattern, parts.year_month);
            }
        }
        Some("long") => {
            merge_scalar(&mut dt.long_date_pattern, pattern);
            merge_list(&mut dt.long_date_patterns, extras);
        }
        Some("short") => {
            merge_scalar(&mut dt.short_date_pattern, pattern);
            merge_list(&mut dt.short_date_patterns, extras);
        }
        Some("year_month") => {
            merge_scalar(&mut dt.year_month_pattern, pattern);
        }
        Some("month_day") => {
            merge_scalar(&mut dt.month_day_pattern, pattern);
        }
        _ => {}
    }
}

fn merge_time_format(dt: &mut DateTimeFormatDescriptor, length: Node<'_>) {
    let pattern = length
        .value("timeFormat/pattern")
        .map(convert_time_pattern);
    let extras = length
        .values("timeFormat/extraPatterns/pattern")
        .into_iter()
        .map(convert_time_pattern);
    match length.attr("type") {
        Some("long") => {
            merge_scalar(&mut dt.long_time_pattern, pattern);
            merge_list(&mut dt.long_time_patterns, extras);
        }
        Some("short") => {
            merge_scalar(&mut dt.short_time_pattern, pattern);
            merge_list(&mut dt.short_time_patterns, extras);
        }
        _ => {}
    }
}

fn merge_week(
    dt: &mut DateTimeFormatDescriptor,
    calendar: Node<'_>,
    locale: &str,
    diagnostics: &mut DiagnosticQueue,
) {
    if let Some(day) = calendar.value("week/firstDay/@day") {
        match DayOfWeek::from_code(day) {
            Some(day) => dt.first_day_of_week = Some(day),
            None => diagnostics.report(
                Diagnostic::warning(ErrorCode::W2006)
                    .with_message(format!("`{day}` is not a day code"))
                    .with_locale(locale)
                    .with_note("in week/firstDay/@day"),
            ),
        }
    }
    if let Some(count) = calendar.value("week/minDays/@count") {
        match count.trim().parse().ok().and_then(CalendarWeekRule::from_min_days) {
            Some(rule) => dt.week_rule = Some(rule),
            None => diagnostics.report(
                Diagnostic::warning(ErrorCode::W2006)
                    .with_message(format!("`{count}` is not a minimal day count of 1, 4 or 7"))
                    .with_locale(locale)
                    .with_note("in week/minDays/@count"),
            ),
        }
    }
}

fn merge_optional_calendars(
    locale: &mut LocaleDescriptor,
    calendar: Node<'_>,
    diagnostics: &mut DiagnosticQueue,
) {
    let mut codes = Vec::new();
    for optional in calendar.select("optionalCalendars/calendar") {
        let token = optional.attr("type").unwrap_or_default();
        let Some(code) = calendar_code(token) else {
            diagnostics.report(
                Diagnostic::warning(ErrorCode::W2001)
                    .with_message(format!("unknown calendar `{token}`"))
                    .with_locale(&locale.name),
            );
            continue;
        };
        let sub_code = match optional.attr("greg_type") {
            None => 0,
            Some(greg) => match gregorian_sub_code(greg) {
                Some(sub) => sub,
                None => {
                    diagnostics.report(
                        Diagnostic::warning(ErrorCode::W2001)
                            .with_message(format!("unknown calendar variant `{greg}`"))
                            .with_locale(&locale.name),
                    );
                    continue;
                }
            },
        };
        codes.push((code << 24) | sub_code);
    }

    if codes.is_empty() {
        return;
    }
    let dropped = locale.set_calendars(&codes);
    if dropped > 0 {
        diagnostics.report(
            Diagnostic::warning(ErrorCode::W2004)
                .with_message(format!("{} optional calendars listed", codes.len()))
                .with_locale(&locale.name)
                .with_note(format!("only the first {} are kept", locc_ir::NUM_CALENDARS)),
        );
    }
}
