use crate::sequence::{
    BidirectionalSequence, Borrowed, Capabilities, ForwardSequence, RandomAccessSequence, Sequence,
    SizedSequence,
};

/// A copyable view of a sequence owned elsewhere.
///
/// Every operation is forwarded to the referenced sequence. The view itself
/// is always [`Borrowed`], whatever `S` is, so flattening a sequence of
/// `RefView`s never copies the referenced sequences into cursors.
///
/// # Examples
///
/// ```rust
/// use flatview::prelude::*;
///
/// let first = vec![1, 2];
/// let second = vec![3];
/// let rows = vec![first.by_ref_view(), second.by_ref_view()];
///
/// assert_eq!(flatten(rows).collect_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct RefView<'a, S: ?Sized>(&'a S);

impl<'a, S: ?Sized> RefView<'a, S> {
    /// Creates a view of `sequence`.
    pub const fn new(sequence: &'a S) -> Self {
        Self(sequence)
    }

    /// Returns the referenced sequence.
    pub const fn get(self) -> &'a S {
        self.0
    }
}

impl<S: ?Sized> Clone for RefView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for RefView<'_, S> {}

impl<S: Sequence + ?Sized> Sequence for RefView<'_, S> {
    type Item = S::Item;
    type Cursor = S::Cursor;
    type Sentinel = S::Sentinel;

    const CAPABILITIES: Capabilities = S::CAPABILITIES.as_borrowed();

    #[inline]
    fn begin(&self) -> S::Cursor {
        self.0.begin()
    }

    #[inline]
    fn end(&self) -> S::Sentinel {
        self.0.end()
    }

    #[inline]
    fn read(&self, cursor: &S::Cursor) -> S::Item {
        self.0.read(cursor)
    }

    #[inline]
    fn inspect<R, F>(&self, cursor: &S::Cursor, inspector: F) -> R
    where
        F: FnOnce(&Self::Item) -> R,
    {
        self.0.inspect(cursor, inspector)
    }

    #[inline]
    fn advance(&self, cursor: &mut S::Cursor) {
        self.0.advance(cursor);
    }
}

impl<S: ForwardSequence + ?Sized> ForwardSequence for RefView<'_, S> {}

impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for RefView<'_, S> {
    #[inline]
    fn end_cursor(&self) -> S::Cursor {
        self.0.end_cursor()
    }

    #[inline]
    fn retreat(&self, cursor: &mut S::Cursor) {
        self.0.retreat(cursor);
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for RefView<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: RandomAccessSequence + ?Sized> RandomAccessSequence for RefView<'_, S> {
    #[inline]
    fn jump(&self, cursor: &mut S::Cursor, offset: isize) {
        self.0.jump(cursor, offset);
    }

    #[inline]
    fn distance(&self, from: &S::Cursor, to: &S::Cursor) -> isize {
        self.0.distance(from, to)
    }

    #[inline]
    fn cursor_at(&self, offset: usize) -> S::Cursor {
        self.0.cursor_at(offset)
    }

    #[inline]
    fn offset_of(&self, cursor: &S::Cursor) -> usize {
        self.0.offset_of(cursor)
    }
}

impl<S: Sequence + ?Sized> Borrowed for RefView<'_, S> {}
