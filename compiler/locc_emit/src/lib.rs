//! Region resolution and table emission.
//!
//! Runs after every locale is resolved: builds the region table, fixes the
//! row order and renders the C header the runtime compiles in.
//!
//! # Ordering
//!
//! - Regions are numbered by two-letter code, byte order.
//! - Culture, date-time and number rows are in numeric-id order, ties by
//!   name.
//! - The culture name index is ASCII case-insensitive, ties by exact bytes.
//!
//! Every comparator is total, so unchanged input renders byte-identical
//! output.

mod emitter;
mod regions;
mod rows;
mod tables;

pub use emitter::{Emitter, StringEmitter};
pub use regions::{resolve_regions, territory_of, RegionTable};
pub use rows::{assign_rows, compare_names, name_order};
pub use tables::{emit_tables, render};
