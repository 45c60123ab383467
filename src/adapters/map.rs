use std::fmt;

use crate::sequence::{
    BidirectionalSequence, Capabilities, ForwardSequence, RandomAccessSequence, Sequence,
    SizedSequence,
};

/// A sequence that applies a function to every element of a base sequence.
///
/// The function runs on every [`read`](Sequence::read); nothing is cached.
/// `Map` keeps the traversal tier and size of its base but is never
/// borrowed, because it produces new values.
///
/// # Examples
///
/// ```rust
/// use flatview::prelude::*;
///
/// let rows = vec![1, 2, 3];
/// let repeated = rows.as_slice().mapped(|&count| vec![count; count as usize]);
///
/// let flat = flatten(repeated);
/// assert_eq!(flat.collect_vec(), vec![1, 2, 2, 3, 3, 3]);
/// ```
#[derive(Clone, Copy)]
pub struct Map<S, F> {
    base: S,
    function: F,
}

impl<S, F> Map<S, F> {
    /// Creates a mapped view of `base`.
    pub const fn new(base: S, function: F) -> Self {
        Self { base, function }
    }

    /// Returns the base sequence.
    pub const fn base(&self) -> &S {
        &self.base
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<B, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Cursor = S::Cursor;
    type Sentinel = S::Sentinel;

    const CAPABILITIES: Capabilities = S::CAPABILITIES.as_owned();

    #[inline]
    fn begin(&self) -> S::Cursor {
        self.base.begin()
    }

    #[inline]
    fn end(&self) -> S::Sentinel {
        self.base.end()
    }

    #[inline]
    fn read(&self, cursor: &S::Cursor) -> B {
        (self.function)(self.base.read(cursor))
    }

    #[inline]
    fn advance(&self, cursor: &mut S::Cursor) {
        self.base.advance(cursor);
    }
}

impl<B, S, F> ForwardSequence for Map<S, F>
where
    S: ForwardSequence,
    F: Fn(S::Item) -> B,
{
}

impl<B, S, F> BidirectionalSequence for Map<S, F>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> B,
{
    #[inline]
    fn end_cursor(&self) -> S::Cursor {
        self.base.end_cursor()
    }

    #[inline]
    fn retreat(&self, cursor: &mut S::Cursor) {
        self.base.retreat(cursor);
    }
}

impl<B, S, F> SizedSequence for Map<S, F>
where
    S: SizedSequence,
    F: Fn(S::Item) -> B,
{
    #[inline]
    fn len(&self) -> usize {
        self.base.len()
    }
}

impl<B, S, F> RandomAccessSequence for Map<S, F>
where
    S: RandomAccessSequence,
    F: Fn(S::Item) -> B,
{
    #[inline]
    fn jump(&self, cursor: &mut S::Cursor, offset: isize) {
        self.base.jump(cursor, offset);
    }

    #[inline]
    fn distance(&self, from: &S::Cursor, to: &S::Cursor) -> isize {
        self.base.distance(from, to)
    }

    #[inline]
    fn cursor_at(&self, offset: usize) -> S::Cursor {
        self.base.cursor_at(offset)
    }

    #[inline]
    fn offset_of(&self, cursor: &S::Cursor) -> usize {
        self.base.offset_of(cursor)
    }
}
