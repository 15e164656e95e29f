//! locc IR - data model for the locale compiler
//!
//! This crate contains the records every compiler stage reads and writes:
//! - [`LocaleDescriptor`] and the flat [`LocaleArena`] that owns them
//! - [`DateTimeFormatDescriptor`] and [`NumberFormatDescriptor`] sub-records
//! - [`RegionDescriptor`] for territory-level data
//! - [`StringPool`] / [`InternPools`] for offset-addressed string storage
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: locales live in an arena addressed by
//!   [`LocaleIdx`]; parent links are numeric ids, never references.
//! - **Intern Everything**: every emitted string becomes a [`StrOffset`]
//!   into one of three independent pools.
//! - **Freeze after sort**: row numbers and region ids are assigned exactly
//!   once, after the global sort.

mod datetime;
mod locale;
pub mod merge;
mod number;
mod pool;
mod region;

pub use datetime::{
    CalendarWeekRule, DateTimeFormatDescriptor, DayOfWeek, NUM_DAYS, NUM_LONG_DATE_PATTERNS,
    NUM_LONG_TIME_PATTERNS, NUM_MONTHS, NUM_SHORT_DATE_PATTERNS, NUM_SHORT_TIME_PATTERNS,
};
pub use locale::{
    compose_name, Lcid, LocaleArena, LocaleDescriptor, LocaleIdx, TextInfo, NUM_CALENDARS,
};
pub use number::{GroupSizes, NumberFormatDescriptor, MAX_GROUP_SIZES};
pub use pool::{escape, Escaped, InternPools, PoolError, PoolKind, StrOffset, StringPool, POOL_BUDGET};
pub use region::{RegionDescriptor, RegionId};
