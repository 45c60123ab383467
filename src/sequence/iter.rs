//! Bridges from the cursor protocol to `std::iter`.

use std::iter::FusedIterator;

use super::{BidirectionalSequence, Sequence};

// =============================================================================
// Iter
// =============================================================================

/// An iterator over the elements of a borrowed [`Sequence`].
///
/// Created by [`SequenceExt::elements`](super::SequenceExt::elements) or by
/// iterating over `&Flatten<S>`.
///
/// # Examples
///
/// ```rust
/// use flatview::sequence::SequenceExt;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// let flat = flatview::flatten(&nested);
///
/// let collected: Vec<&i32> = flat.elements().collect();
/// assert_eq!(collected, vec![&1, &2, &3]);
/// ```
pub struct Iter<'a, S: Sequence> {
    sequence: &'a S,
    cursor: S::Cursor,
}

impl<'a, S: Sequence> Iter<'a, S> {
    pub(crate) fn new(sequence: &'a S) -> Self {
        Self {
            cursor: sequence.begin(),
            sequence,
        }
    }

    /// Returns the cursor of the next element to be yielded.
    pub const fn cursor(&self) -> &S::Cursor {
        &self.cursor
    }
}

impl<S: Sequence> Iterator for Iter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sequence.is_end(&self.cursor) {
            return None;
        }
        let element = self.sequence.read(&self.cursor);
        self.sequence.advance(&mut self.cursor);
        Some(element)
    }
}

impl<S: Sequence> FusedIterator for Iter<'_, S> {}

// =============================================================================
// IntoElements
// =============================================================================

/// An owning iterator over the elements of a [`Sequence`].
///
/// Created by iterating over `Flatten<S>` by value.
pub struct IntoElements<S: Sequence> {
    sequence: S,
    cursor: S::Cursor,
}

impl<S: Sequence> IntoElements<S> {
    pub(crate) fn new(sequence: S) -> Self {
        let cursor = sequence.begin();
        Self { sequence, cursor }
    }
}

impl<S: Sequence> Iterator for IntoElements<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sequence.is_end(&self.cursor) {
            return None;
        }
        let element = self.sequence.read(&self.cursor);
        self.sequence.advance(&mut self.cursor);
        Some(element)
    }
}

impl<S: Sequence> FusedIterator for IntoElements<S> {}

// =============================================================================
// Span
// =============================================================================

/// A double-ended iterator over a [`BidirectionalSequence`].
///
/// Holds a front cursor starting at `begin` and a back cursor starting at
/// `end_cursor`; iteration stops when they meet.
///
/// # Examples
///
/// ```rust
/// use flatview::sequence::SequenceExt;
///
/// let nested = vec![vec![1, 2], vec![], vec![3, 4]];
/// let flat = flatview::flatten(&nested);
///
/// let reversed: Vec<&i32> = flat.span().rev().collect();
/// assert_eq!(reversed, vec![&4, &3, &2, &1]);
/// ```
pub struct Span<'a, S: BidirectionalSequence> {
    sequence: &'a S,
    front: S::Cursor,
    back: S::Cursor,
}

impl<'a, S: BidirectionalSequence> Span<'a, S> {
    pub(crate) fn new(sequence: &'a S) -> Self {
        Self {
            front: sequence.begin(),
            back: sequence.end_cursor(),
            sequence,
        }
    }
}

impl<S: BidirectionalSequence> Iterator for Span<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.sequence.read(&self.front);
        self.sequence.advance(&mut self.front);
        Some(element)
    }
}

impl<S: BidirectionalSequence> DoubleEndedIterator for Span<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.sequence.retreat(&mut self.back);
        Some(self.sequence.read(&self.back))
    }
}

impl<S: BidirectionalSequence> FusedIterator for Span<'_, S> {}

#[cfg(test)]
mod tests {
    use crate::sequence::SequenceExt;
    use rstest::rstest;

    #[rstest]
    fn test_iter_over_slice() {
        let values = [1, 2, 3];
        let view: &[i32] = &values;
        let collected: Vec<&i32> = view.elements().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_iter_is_fused() {
        let values: [i32; 0] = [];
        let view: &[i32] = &values;
        let mut iterator = view.elements();
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_span_meets_in_the_middle() {
        let values = [1, 2, 3, 4];
        let view: &[i32] = &values;
        let mut span = view.span();
        assert_eq!(span.next(), Some(&1));
        assert_eq!(span.next_back(), Some(&4));
        assert_eq!(span.next(), Some(&2));
        assert_eq!(span.next_back(), Some(&3));
        assert_eq!(span.next(), None);
        assert_eq!(span.next_back(), None);
    }
}
