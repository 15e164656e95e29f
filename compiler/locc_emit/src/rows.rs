//! Row numbering and the two locale orders the tables are written in.

use std::cmp::Ordering;

use locc_ir::{LocaleArena, LocaleIdx};

/// Sort locales by numeric id (ties by name) and number them from 0.
///
/// Returns the locales in row order.
pub fn assign_rows(locales: &mut LocaleArena) -> Vec<LocaleIdx> {
    let mut order: Vec<LocaleIdx> = locales.indices().collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (locales.get(a), locales.get(b));
        a.lcid.cmp(&b.lcid).then_with(|| a.name.cmp(&b.name))
    });
    for (row, &idx) in order.iter().enumerate() {
        let assigned = locales
            .get_mut(idx)
            .assign_row(u32::try_from(row).unwrap_or(u32::MAX));
        debug_assert!(assigned, "row numbers are assigned once");
    }
    order
}

/// ASCII case-insensitive byte order, ties broken by exact bytes.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.bytes().map(|byte| byte.to_ascii_lowercase()).collect::<Vec<_>>();
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Locales in name-index order.
pub fn name_order(locales: &LocaleArena) -> Vec<LocaleIdx> {
    let mut order: Vec<LocaleIdx> = locales.indices().collect();
    order.sort_by(|&a, &b| compare_names(&locales.get(a).name, &locales.get(b).name));
    order
}
