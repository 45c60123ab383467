use std::cell::RefCell;
use std::fmt;

use crate::sequence::{Capabilities, Sentinel, Sequence, Tier};

/// A one-shot sequence over a standard iterator.
///
/// Each [`advance`](Sequence::advance) pulls the next element out of the
/// wrapped iterator, so the sequence can be traversed only once and
/// [`begin`](Sequence::begin) should be called at most once. The current
/// element is held in the cursor and cloned on every read.
///
/// The iterator lives in a [`RefCell`], so a `SinglePass` is not `Sync`.
/// It is never a [`ForwardSequence`](crate::sequence::ForwardSequence).
/// Cloning a `SinglePass` clones the wrapped iterator in its current state.
///
/// # Examples
///
/// ```rust
/// use flatview::prelude::*;
///
/// let lines = SinglePass::new(vec![vec![1, 2], vec![3]].into_iter());
/// let flat = flatten(lines);
///
/// let collected: Vec<i32> = flat.into_iter().collect();
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct SinglePass<I: Iterator> {
    source: RefCell<I>,
}

impl<I: Iterator> SinglePass<I> {
    /// Wraps `source`.
    pub const fn new(source: I) -> Self {
        Self {
            source: RefCell::new(source),
        }
    }

    /// Consumes the sequence and returns the remaining iterator.
    pub fn into_source(self) -> I {
        self.source.into_inner()
    }

    fn pull(&self) -> Option<I::Item> {
        self.source.borrow_mut().next()
    }
}

impl<I: Iterator> fmt::Debug for SinglePass<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SinglePass").finish_non_exhaustive()
    }
}

/// Cursor of a [`SinglePass`]: the element most recently pulled.
#[derive(Debug)]
pub struct SinglePassCursor<T> {
    current: Option<T>,
}

/// Sentinel of a [`SinglePass`]: reached once the source is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceExhausted;

impl<T> Sentinel<SinglePassCursor<T>> for SourceExhausted {
    #[inline]
    fn is_reached_by(&self, cursor: &SinglePassCursor<T>) -> bool {
        cursor.current.is_none()
    }
}

impl<I> Sequence for SinglePass<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    type Cursor = SinglePassCursor<I::Item>;
    type Sentinel = SourceExhausted;

    const CAPABILITIES: Capabilities = Capabilities::new(Tier::SinglePass);

    fn begin(&self) -> Self::Cursor {
        SinglePassCursor {
            current: self.pull(),
        }
    }

    fn end(&self) -> SourceExhausted {
        SourceExhausted
    }

    fn read(&self, cursor: &Self::Cursor) -> I::Item {
        match &cursor.current {
            Some(element) => element.clone(),
            None => panic!("read past the end of a single-pass sequence"),
        }
    }

    fn advance(&self, cursor: &mut Self::Cursor) {
        debug_assert!(cursor.current.is_some(), "advance past the end");
        cursor.current = self.pull();
    }
}
