//! Date and time formatting record.

use crate::pool::{PoolError, PoolKind};

/// Day-name slots per record.
pub const NUM_DAYS: usize = 7;
/// Month-name slots per record (12 months plus the 13th lunar month).
pub const NUM_MONTHS: usize = 13;

pub const NUM_SHORT_DATE_PATTERNS: usize = 14;
pub const NUM_LONG_DATE_PATTERNS: usize = 10;
pub const NUM_SHORT_TIME_PATTERNS: usize = 12;
pub const NUM_LONG_TIME_PATTERNS: usize = 9;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// Parse the three-letter lowercase day code used by `firstDay`.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "sun" => DayOfWeek::Sunday,
            "mon" => DayOfWeek::Monday,
            "tue" => DayOfWeek::Tuesday,
            "wed" => DayOfWeek::Wednesday,
            "thu" => DayOfWeek::Thursday,
            "fri" => DayOfWeek::Friday,
            "sat" => DayOfWeek::Saturday,
            _ => return None,
        })
    }
}

/// How the first week of the year is determined.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum CalendarWeekRule {
    FirstDay = 0,
    FirstFullWeek = 1,
    FirstFourDayWeek = 2,
}

impl CalendarWeekRule {
    /// Map the minimal number of days in the first week to a rule.
    pub fn from_min_days(days: u32) -> Option<Self> {
        match days {
            1 => Some(CalendarWeekRule::FirstDay),
            4 => Some(CalendarWeekRule::FirstFourDayWeek),
            7 => Some(CalendarWeekRule::FirstFullWeek),
            _ => None,
        }
    }
}

/// Resolved date/time formatting data for one locale.
///
/// Scalar fields are `None` until some layer supplies them. List fields are
/// replaced wholesale by the first layer that supplies any item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateTimeFormatDescriptor {
    pub day_names: Vec<String>,
    pub abbreviated_day_names: Vec<String>,
    pub month_names: Vec<String>,
    pub abbreviated_month_names: Vec<String>,

    pub short_date_pattern: Option<String>,
    pub long_date_pattern: Option<String>,
    pub short_time_pattern: Option<String>,
    pub long_time_pattern: Option<String>,
    pub month_day_pattern: Option<String>,
    pub year_month_pattern: Option<String>,
    /// Combined pattern, filled in once all layers are merged.
    pub full_date_time_pattern: Option<String>,
    /// `{1}`/`{0}` template the combined pattern is built from.
    pub raw_full_date_time_pattern: Option<String>,

    /// Equivalent patterns. Layers supply extras only; finalizing puts the
    /// primary pattern first and drops duplicates.
    pub short_date_patterns: Vec<String>,
    pub long_date_patterns: Vec<String>,
    pub short_time_patterns: Vec<String>,
    pub long_time_patterns: Vec<String>,

    pub am_designator: Option<String>,
    pub pm_designator: Option<String>,
    pub date_separator: Option<String>,
    pub time_separator: Option<String>,

    pub first_day_of_week: Option<DayOfWeek>,
    pub week_rule: Option<CalendarWeekRule>,
}

impl DateTimeFormatDescriptor {
    pub(crate) fn for_each_string<F>(&self, f: &mut F) -> Result<(), PoolError>
    where
        F: FnMut(PoolKind, &str) -> Result<(), PoolError>,
    {
        let patterns = [
            &self.short_date_pattern,
            &self.long_date_pattern,
            &self.short_time_pattern,
            &self.long_time_pattern,
            &self.month_day_pattern,
            &self.year_month_pattern,
            &self.full_date_time_pattern,
        ];
        for text in patterns.into_iter().flatten() {
            f(PoolKind::Pattern, text.as_str())?;
        }
        let extras = [
            &self.short_date_patterns,
            &self.long_date_patterns,
            &self.short_time_patterns,
            &self.long_time_patterns,
        ];
        for text in extras.into_iter().flatten() {
            f(PoolKind::Pattern, text.as_str())?;
        }

        let names = [
            &self.day_names,
            &self.abbreviated_day_names,
            &self.month_names,
            &self.abbreviated_month_names,
        ];
        for text in names.into_iter().flatten() {
            f(PoolKind::DateTime, text.as_str())?;
        }
        for text in [&self.am_designator, &self.pm_designator].into_iter().flatten() {
            f(PoolKind::DateTime, text.as_str())?;
        }

        for text in [&self.date_separator, &self.time_separator].into_iter().flatten() {
            f(PoolKind::General, text.as_str())?;
        }
        Ok(())
    }
}
