//! Layered resolution of locale descriptors.
//!
//! Each target locale is built by folding six markup layers over an empty
//! record, most general first:
//!
//! 1. `langs/root.xml`
//! 2. `supp/root.xml`
//! 3. `langs/<language>.xml`
//! 4. `supp/<language>.xml`
//! 5. `locales/<stem>.xml`
//! 6. `supp/<stem>.xml`
//!
//! A later layer overrides a scalar only when it supplies a value, and
//! replaces a list only when it supplies at least one item. Locales without a
//! numeric id in `lcids.xml` are excluded and recorded as orphans.

mod context;
mod datetime;
mod error;
mod finalize;
mod names;
mod number;
mod options;
mod pipeline;
mod prune;
mod tables;
mod targets;

pub use context::{Compilation, CompileContext, Orphan};
pub use error::CompileError;
pub use options::CompileOptions;
pub use pipeline::{compile_all, compile_locale};
pub use prune::{prune_orphan_sources, PruneReport};
pub use tables::{
    CurrencyNames, LcidEntry, ReferenceNames, SideTables, TerritoryCodes, LCIDS_PATH,
    SUPPLEMENTAL_DATA_PATH, TEXT_INFO_PATH,
};
pub use targets::{
    discover_targets, Layer, Target, LANGS_DIR, LOCALES_DIR, ROOT_STEM, SUPPLEMENTAL_DIR,
};

#[cfg(test)]
mod test_support;
