//! Sequence reordering primitives.
//!
//! These know nothing about tasks or statuses. A move takes the element at one
//! index out of the sequence and puts it back so that it occupies the other
//! index; everything in between shifts by one. No element is ever duplicated
//! or dropped.

/// Move the element at `from` so that it ends up at index `to`.
///
/// Returns `false` and leaves the slice untouched when either index is out of
/// bounds or the indices are equal.
pub fn move_index<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Move the element whose key is `from` to the index currently occupied by
/// the element whose key is `to`.
///
/// Takes the sequence by value and hands back the reordered one. If either key
/// is missing, or both name the same element, the sequence comes back as it
/// went in.
pub fn move_item<T, K, F>(mut items: Vec<T>, from: &K, to: &K, key: F) -> Vec<T>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let from_index = items.iter().position(|item| key(item) == from);
    let to_index = items.iter().position(|item| key(item) == to);
    if let (Some(from_index), Some(to_index)) = (from_index, to_index) {
        move_index(&mut items, from_index, to_index);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_index(&mut v, 3, 1));
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_forward_lands_at_target_index() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_index(&mut v, 0, 2));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!move_index(&mut v, 0, 3));
        assert!(!move_index(&mut v, 5, 0));
        assert!(!move_index(&mut v, 1, 1));
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_item_by_key() {
        let v = vec![("a", 1), ("b", 2), ("c", 3)];
        let moved = move_item(v, "c", "a", |(k, _)| *k);
        assert_eq!(moved, vec![("c", 3), ("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_move_item_missing_key_is_noop() {
        let v = vec![("a", 1), ("b", 2)];
        let moved = move_item(v.clone(), "a", "zzz", |(k, _)| *k);
        assert_eq!(moved, v);
    }

    #[test]
    fn test_move_item_preserves_membership() {
        let v: Vec<u32> = (0..10).collect();
        let moved = move_item(v, &2, &7, |x| x);
        let mut sorted = moved.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        assert_eq!(moved.iter().position(|&x| x == 2), Some(7));
    }
}
