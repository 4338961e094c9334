//! Lexicographic comparison of item sequences.

use std::cmp::Ordering;

use crate::item::Item;

/// Compare two canonical item sequences.
///
/// When one side runs out, the other side's remaining items are compared
/// against the neutral element: leading empty items are skipped and the
/// first non-empty one decides. So `1.0` equals `1`, `1-rc` is below `1`
/// and `1.0.1` is above `1`.
pub fn compare_items(left: &[Item], right: &[Item]) -> Ordering {
    let mut left = left.iter();
    let mut right = right.iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (Some(a), None) => return remainder_sign(std::iter::once(a).chain(left)),
            (None, Some(b)) => return remainder_sign(std::iter::once(b).chain(right)).reverse(),
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            },
        }
    }
}

fn remainder_sign<'a>(mut remaining: impl Iterator<Item = &'a Item>) -> Ordering {
    remaining
        .find(|item| !item.is_empty())
        .map_or(Ordering::Equal, Item::compare_to_empty)
}
