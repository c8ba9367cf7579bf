//! Sequence Positioning
//!
//! Insert-before and removal helpers shared by tiers, items and
//! shortcut entries. A missing or unknown anchor means "append".

use crate::domain::{position_of, Entity};

/// Insert `value` immediately before `before`, or at the end when the
/// anchor is absent or not in `seq`. Returns the index it landed at.
pub(crate) fn insert_before<T: Copy + PartialEq>(seq: &mut Vec<T>, value: T, before: Option<T>) -> usize {
    let index = before
        .and_then(|anchor| seq.iter().position(|v| *v == anchor))
        .unwrap_or(seq.len());
    seq.insert(index, value);
    index
}

/// Remove `value` from `seq`, returning the index it was at
pub(crate) fn remove_value<T: Copy + PartialEq>(seq: &mut Vec<T>, value: T) -> Option<usize> {
    let index = seq.iter().position(|v| *v == value)?;
    seq.remove(index);
    Some(index)
}

/// Entity flavour of `insert_before`, keyed by id
pub(crate) fn insert_entity_before<T: Entity>(seq: &mut Vec<T>, entity: T, before: Option<T::Id>) -> usize {
    let index = before
        .and_then(|anchor| position_of(seq, anchor))
        .unwrap_or(seq.len());
    seq.insert(index, entity);
    index
}

/// Move the entity `id` before `before` within `seq`.
/// Returns `None` when `id` is unknown, otherwise `(old, new)` indices.
pub(crate) fn relocate_entity<T: Entity>(seq: &mut Vec<T>, id: T::Id, before: Option<T::Id>) -> Option<(usize, usize)> {
    let old = position_of(seq, id)?;
    if before == Some(id) {
        return Some((old, old));
    }
    let entity = seq.remove(old);
    let new = insert_entity_before(seq, entity, before);
    Some((old, new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_before_anchor() {
        let mut seq = vec![1, 2, 3];
        assert_eq!(insert_before(&mut seq, 9, Some(2)), 1);
        assert_eq!(seq, vec![1, 9, 2, 3]);
    }

    #[test]
    fn test_insert_before_unknown_anchor_appends() {
        let mut seq = vec![1, 2, 3];
        assert_eq!(insert_before(&mut seq, 9, Some(42)), 3);
        assert_eq!(insert_before(&mut seq, 8, None), 4);
        assert_eq!(seq, vec![1, 2, 3, 9, 8]);
    }

    #[test]
    fn test_remove_value() {
        let mut seq = vec![5, 6, 7];
        assert_eq!(remove_value(&mut seq, 6), Some(1));
        assert_eq!(remove_value(&mut seq, 6), None);
        assert_eq!(seq, vec![5, 7]);
    }
}
