//! Recorded-order sorting.

use std::collections::HashMap;

/// Stable-sorts `items` by their position in `recorded`.
///
/// Items whose key is absent from `recorded` sort after all recorded ones
/// and keep their relative input order. With no recorded order the input
/// order is returned unchanged.
pub fn sort_by_recorded_order<T, F>(mut items: Vec<T>, recorded: Option<&[String]>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let Some(recorded) = recorded else {
        return items;
    };

    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(recorded.len());
    for (index, name) in recorded.iter().enumerate() {
        positions.entry(name.as_str()).or_insert(index);
    }

    items.sort_by_key(|item| positions.get(key(item)).copied().unwrap_or(usize::MAX));
    items
}
