//! Field-level merge rules shared by every layer.
//!
//! Scalars are last-write-wins: a layer that supplies nothing leaves the
//! inherited value alone. Lists are last-write-wins at list granularity: the
//! first item a layer supplies discards the inherited list, and a layer that
//! supplies no items leaves it alone.

/// Overwrite `target` if the layer supplied a value. Returns whether it did.
pub fn merge_scalar<T>(target: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *target = Some(value);
            true
        }
        None => false,
    }
}

/// Replace `target` with `items` unless the layer supplied none.
///
/// Returns whether the list was replaced.
pub fn merge_list<T, I>(target: &mut Vec<T>, items: I) -> bool
where
    I: IntoIterator<Item = T>,
{
    let mut replaced = false;
    for item in items {
        if !replaced {
            target.clear();
            replaced = true;
        }
        target.push(item);
    }
    replaced
}
