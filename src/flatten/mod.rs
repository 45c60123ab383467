//! Lazy flattening of a sequence of sequences.
//!
//! [`Flatten`] presents the concatenation of the inner sequences of an outer
//! sequence without materializing it. Its capabilities are projected from the
//! capabilities of both levels (see [`Capabilities::flatten`]):
//!
//! | outer \ inner  | single-pass | forward | bidirectional | random-access |
//! |----------------|-------------|---------|---------------|---------------|
//! | single-pass    | single-pass | single-pass | single-pass | single-pass |
//! | forward        | single-pass | forward | forward       | forward       |
//! | bidirectional  | single-pass | forward | bidirectional | random-access |
//! | random-access  | single-pass | forward | bidirectional | random-access |
//!
//! Random access additionally requires the inner sequences to be sized.
//!
//! Empty inner sequences are skipped eagerly, so every cursor except the end
//! cursor points at a readable element.
//!
//! # Examples
//!
//! ```rust
//! use flatview::prelude::*;
//!
//! let nested = vec![vec![1, 2], vec![3, 4, 5], vec![], vec![6]];
//! let flat = flatten(&nested);
//!
//! assert_eq!(flat.len(), 6);
//! assert_eq!(flat.item_at(3), &4);
//!
//! let mut cursor = flat.begin();
//! flat.jump(&mut cursor, 5);
//! assert_eq!(flat.read(&cursor), &6);
//! assert_eq!(flat.distance(&flat.begin(), &cursor), 5);
//! ```

mod cursor;
mod sentinel;

pub use cursor::{FlattenCursor, InnerState};
pub use sentinel::FlattenSentinel;

use crate::sequence::{
    BidirectionalSequence, Borrowed, Capabilities, ForwardSequence, IntoElements, Iter,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::trace::trace_event;

/// A lazy view over the concatenation of the inner sequences of `S`.
///
/// Created by [`flatten`](crate::flatten()) or
/// [`SequenceExt::flattened`](crate::sequence::SequenceExt::flattened).
/// The view owns the outer sequence; pass `&outer` to flatten borrowed
/// storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flatten<S> {
    outer: S,
}

impl<S> Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    /// Creates a view over `outer`.
    pub fn new(outer: S) -> Self {
        trace_event!(capabilities = %Self::CAPABILITIES, "created flatten view");
        Self { outer }
    }
}

impl<S> Flatten<S> {
    /// Returns the outer sequence.
    pub const fn outer(&self) -> &S {
        &self.outer
    }

    /// Consumes the view and returns the outer sequence.
    pub fn into_outer(self) -> S {
        self.outer
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;
    type Cursor = FlattenCursor<S::Cursor, S::Item, <S::Item as Sequence>::Cursor>;
    type Sentinel = FlattenSentinel<S::Sentinel>;

    const CAPABILITIES: Capabilities =
        Capabilities::flatten(S::CAPABILITIES, <S::Item as Sequence>::CAPABILITIES);

    fn begin(&self) -> Self::Cursor {
        cursor::first(&self.outer)
    }

    fn end(&self) -> Self::Sentinel {
        FlattenSentinel::new(self.outer.end())
    }

    #[inline]
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        cursor::read::<S>(cursor)
    }

    #[inline]
    fn inspect<R, F>(&self, cursor: &Self::Cursor, inspector: F) -> R
    where
        F: FnOnce(&Self::Item) -> R,
    {
        cursor::inspect::<S, R, F>(cursor, inspector)
    }

    #[inline]
    fn advance(&self, cursor: &mut Self::Cursor) {
        cursor::advance(&self.outer, cursor);
    }
}

impl<S> ForwardSequence for Flatten<S>
where
    S: ForwardSequence,
    S::Item: ForwardSequence + Clone,
{
}

impl<S> BidirectionalSequence for Flatten<S>
where
    S: BidirectionalSequence,
    S::Item: BidirectionalSequence + Clone,
{
    fn end_cursor(&self) -> Self::Cursor {
        FlattenCursor {
            outer: self.outer.end_cursor(),
            inner: InnerState::Exhausted,
        }
    }

    fn retreat(&self, cursor: &mut Self::Cursor) {
        cursor::retreat(&self.outer, cursor);
    }
}

impl<S> SizedSequence for Flatten<S>
where
    S: ForwardSequence,
    S::Item: SizedSequence,
{
    /// Sums the inner lengths in one walk over the outer sequence.
    fn len(&self) -> usize {
        cursor::total_length(&self.outer)
    }
}

impl<S> RandomAccessSequence for Flatten<S>
where
    S: BidirectionalSequence,
    S::Item: RandomAccessSequence + Clone,
{
    fn jump(&self, cursor: &mut Self::Cursor, offset: isize) {
        cursor::jump(&self.outer, cursor, offset);
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        cursor::distance(&self.outer, from, to)
    }
}

impl<S> Borrowed for Flatten<S>
where
    S: Borrowed,
    S::Item: Sequence,
{
}

impl<'a, S> IntoIterator for &'a Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;
    type IntoIter = Iter<'a, Flatten<S>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<S> IntoIterator for Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;
    type IntoIter = IntoElements<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoElements::new(self)
    }
}
