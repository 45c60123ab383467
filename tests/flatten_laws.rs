//! Property-based tests for the `Flatten` view.
//!
//! This module verifies that flattening satisfies:
//!
//! - **Concatenation**: traversal yields the concatenation of the inner sequences
//! - **Length**: `len()` equals the traversal count
//! - **Random access**: `item_at`, `jump` and `distance` agree with indexing
//! - **Reversibility**: backward traversal yields the reversed concatenation
//! - **Equality**: cursor equality is reflexive, symmetric and transitive; `begin == end` iff empty
//! - **Independence**: a copied cursor moves without affecting the original

use flatview::prelude::*;
use proptest::prelude::*;
use proptest::sample::Index;

fn nested_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop::collection::vec(any::<i32>(), 0..5), 0..8)
}

// =============================================================================
// Concatenation Law
// =============================================================================

proptest! {
    /// Traversal yields the concatenation of the inner sequences
    #[test]
    fn prop_flatten_is_concatenation(nested in nested_strategy()) {
        let collected: Vec<i32> = flatten(nested.as_slice()).elements().copied().collect();
        prop_assert_eq!(collected, nested.concat());
    }
}

proptest! {
    /// Owned and borrowed outers yield the same elements
    #[test]
    fn prop_owned_outer_matches_borrowed_outer(nested in nested_strategy()) {
        let borrowed: Vec<i32> = flatten(nested.as_slice()).elements().copied().collect();
        let owned: Vec<i32> = flatten(nested).into_iter().collect();
        prop_assert_eq!(owned, borrowed);
    }
}

proptest! {
    /// Flattening a single inner sequence yields that sequence
    #[test]
    fn prop_single_inner_is_identity(inner in prop::collection::vec(any::<i32>(), 0..10)) {
        let outer = vec![inner.clone()];
        prop_assert_eq!(flatten(outer).collect_vec(), inner);
    }
}

proptest! {
    /// Flattening a flattened view twice yields the concatenation twice
    #[test]
    fn prop_recursive_flatten(nested in nested_strategy()) {
        let views = vec![flatten(nested.as_slice()), flatten(nested.as_slice())];
        let collected: Vec<i32> = flatten(views).elements().copied().collect();
        let expected = [nested.concat(), nested.concat()].concat();
        prop_assert_eq!(collected, expected);
    }
}

// =============================================================================
// Length Law
// =============================================================================

proptest! {
    /// len() equals the number of elements produced by traversal
    #[test]
    fn prop_len_equals_traversal_count(nested in nested_strategy()) {
        let flat = flatten(nested.as_slice());
        prop_assert_eq!(flat.len(), flat.elements().count());
        prop_assert_eq!(flat.is_empty(), flat.elements().next().is_none());
    }
}

// =============================================================================
// Random Access Laws
// =============================================================================

proptest! {
    /// item_at(n) is the n-th element of the concatenation
    #[test]
    fn prop_item_at_matches_index(nested in nested_strategy()) {
        let flat = flatten(nested.as_slice());
        let expected = nested.concat();
        for (index, value) in expected.iter().enumerate() {
            prop_assert_eq!(flat.item_at(index), value);
        }
        prop_assert_eq!(flat.get_item(expected.len()), None);
    }
}

proptest! {
    /// distance(begin, begin + n) == n
    #[test]
    fn prop_distance_from_begin(nested in nested_strategy(), pick in any::<Index>()) {
        let flat = flatten(nested.as_slice());
        let offset = pick.index(flat.len() + 1);
        let cursor = flat.jumped(&flat.begin(), offset.cast_signed());
        prop_assert_eq!(flat.distance(&flat.begin(), &cursor), offset.cast_signed());
        prop_assert_eq!(flat.offset_of(&cursor), offset);
    }
}

proptest! {
    /// Jumping from a to b and measuring the distance agree for any two positions
    #[test]
    fn prop_jump_and_distance_agree(
        nested in nested_strategy(),
        from in any::<Index>(),
        to in any::<Index>()
    ) {
        let flat = flatten(nested.as_slice());
        let length = flat.len();
        let from = from.index(length + 1);
        let to = to.index(length + 1);
        let offset = to.cast_signed() - from.cast_signed();

        let start = flat.cursor_at(from);
        let target = flat.cursor_at(to);

        prop_assert_eq!(flat.jumped(&start, offset), target);
        prop_assert_eq!(flat.distance(&start, &target), offset);
        prop_assert_eq!(flat.distance(&target, &start), -offset);
    }
}

proptest! {
    /// Advancing by one step equals jumping by one
    #[test]
    fn prop_advance_equals_jump_by_one(nested in nested_strategy(), pick in any::<Index>()) {
        let flat = flatten(nested.as_slice());
        let length = flat.len();
        prop_assume!(length > 0);

        let mut advanced = flat.cursor_at(pick.index(length));
        let jumped = flat.jumped(&advanced, 1);
        flat.advance(&mut advanced);
        prop_assert_eq!(advanced, jumped);
    }
}

// =============================================================================
// Reversibility Law
// =============================================================================

proptest! {
    /// Backward traversal yields the reversed concatenation
    #[test]
    fn prop_backward_traversal_is_reversed(nested in nested_strategy()) {
        let flat = flatten(nested.as_slice());
        let backward: Vec<i32> = flat.span().rev().copied().collect();
        let mut expected = nested.concat();
        expected.reverse();
        prop_assert_eq!(backward, expected);
    }
}

proptest! {
    /// Retreating after advancing returns to the same cursor
    #[test]
    fn prop_retreat_inverts_advance(nested in nested_strategy(), pick in any::<Index>()) {
        let flat = flatten(nested.as_slice());
        let length = flat.len();
        prop_assume!(length > 0);

        let original = flat.cursor_at(pick.index(length));
        let mut cursor = original;
        flat.advance(&mut cursor);
        flat.retreat(&mut cursor);
        prop_assert_eq!(cursor, original);
    }
}

// =============================================================================
// Equality Laws
// =============================================================================

proptest! {
    /// Cursor equality is reflexive and symmetric, and matches offsets
    #[test]
    fn prop_equality_matches_offsets(
        nested in nested_strategy(),
        left in any::<Index>(),
        right in any::<Index>()
    ) {
        let flat = flatten(nested.as_slice());
        let length = flat.len();
        let left = left.index(length + 1);
        let right = right.index(length + 1);
        let left_cursor = flat.cursor_at(left);
        let right_cursor = flat.cursor_at(right);

        prop_assert_eq!(left_cursor, left_cursor);
        prop_assert_eq!(left_cursor == right_cursor, right_cursor == left_cursor);
        prop_assert_eq!(left_cursor == right_cursor, left == right);
        prop_assert_eq!(left_cursor < right_cursor, left < right);
    }
}

proptest! {
    /// Cursor equality is transitive across cursors reached by different routes
    #[test]
    fn prop_equality_is_transitive(
        nested in nested_strategy(),
        first in 0..4usize,
        second in 0..4usize,
        third in 0..4usize
    ) {
        let flat = flatten(nested.as_slice());
        let length = flat.len();
        let (first, second, third) = (first.min(length), second.min(length), third.min(length));

        let by_index = flat.cursor_at(first);
        let mut by_steps = flat.begin();
        for _ in 0..second {
            flat.advance(&mut by_steps);
        }
        let from_back = flat.jumped(&flat.end_cursor(), -((length - third).cast_signed()));

        if by_index == by_steps && by_steps == from_back {
            prop_assert_eq!(by_index, from_back);
        }
        prop_assert_eq!(by_index == from_back, first == third);
    }
}

proptest! {
    /// begin == end iff the flattened sequence is empty
    #[test]
    fn prop_begin_equals_end_iff_empty(nested in nested_strategy()) {
        let flat = flatten(nested.as_slice());
        let empty = nested.iter().all(Vec::is_empty);
        prop_assert_eq!(flat.begin() == flat.end_cursor(), empty);
        prop_assert_eq!(flat.is_end(&flat.begin()), empty);
    }
}

// =============================================================================
// Independence Law
// =============================================================================

proptest! {
    /// Advancing a cloned cursor does not move the original (value-like inner)
    #[test]
    fn prop_cloned_cursor_is_independent(nested in nested_strategy(), pick in any::<Index>()) {
        let expected = nested.concat();
        prop_assume!(!expected.is_empty());
        let index = pick.index(expected.len());

        let flat = flatten(nested);
        let original = flat.cursor_at(index);
        let mut copy = original.clone();
        while !flat.is_end(&copy) {
            flat.advance(&mut copy);
        }

        prop_assert_eq!(flat.read(&original), expected[index]);
        prop_assert_eq!(flat.offset_of(&original), index);
    }
}
