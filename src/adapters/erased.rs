//! Type erasure for random-access sequences.

use std::fmt;
use std::rc::Rc;

use crate::sequence::{
    BidirectionalSequence, Capabilities, EndIndex, ForwardSequence, RandomAccessSequence,
    Sequence, SizedSequence, Tier,
};

/// Object-safe subset of [`RandomAccessSequence`] addressed by offset.
trait ErasedSequence<T> {
    fn length(&self) -> usize;

    fn read_at(&self, offset: usize) -> T;

    fn capabilities(&self) -> Capabilities;
}

impl<S: RandomAccessSequence> ErasedSequence<S::Item> for S {
    fn length(&self) -> usize {
        self.len()
    }

    fn read_at(&self, offset: usize) -> S::Item {
        self.item_at(offset)
    }

    fn capabilities(&self) -> Capabilities {
        S::CAPABILITIES
    }
}

/// A random-access sequence whose concrete type has been erased.
///
/// The erased sequence is shared behind a reference counter, so cloning an
/// `AnySequence` is cheap and all clones read the same elements. The cursor
/// is a plain offset; every read re-positions the erased sequence with
/// [`item_at`](RandomAccessSequence::item_at).
///
/// # Examples
///
/// ```rust
/// use flatview::prelude::*;
///
/// let nested = vec![vec![1, 2], vec![3]];
/// let erased: AnySequence<'_, &i32> = flatten(&nested).erased();
///
/// assert_eq!(erased.len(), 3);
/// assert_eq!(erased.item_at(2), &3);
/// assert_eq!(erased.source_capabilities().tier, Tier::RandomAccess);
/// ```
pub struct AnySequence<'a, T> {
    sequence: Rc<dyn ErasedSequence<T> + 'a>,
}

impl<'a, T> AnySequence<'a, T> {
    /// Erases the type of `sequence`.
    pub fn new<S>(sequence: S) -> Self
    where
        S: RandomAccessSequence<Item = T> + 'a,
    {
        Self {
            sequence: Rc::new(sequence),
        }
    }

    /// Returns the capabilities of the sequence that was erased.
    pub fn source_capabilities(&self) -> Capabilities {
        self.sequence.capabilities()
    }
}

impl<T> Clone for AnySequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            sequence: Rc::clone(&self.sequence),
        }
    }
}

impl<T> fmt::Debug for AnySequence<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AnySequence")
            .field("len", &self.sequence.length())
            .field("source_capabilities", &self.source_capabilities())
            .finish()
    }
}

impl<T> Sequence for AnySequence<'_, T> {
    type Item = T;
    type Cursor = usize;
    type Sentinel = EndIndex;

    const CAPABILITIES: Capabilities = Capabilities::new(Tier::RandomAccess);

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> EndIndex {
        EndIndex(self.sequence.length())
    }

    #[inline]
    fn read(&self, cursor: &usize) -> T {
        self.sequence.read_at(*cursor)
    }

    #[inline]
    fn advance(&self, cursor: &mut usize) {
        *cursor += 1;
    }
}

impl<T> ForwardSequence for AnySequence<'_, T> {}

impl<T> BidirectionalSequence for AnySequence<'_, T> {
    #[inline]
    fn end_cursor(&self) -> usize {
        self.sequence.length()
    }

    #[inline]
    fn retreat(&self, cursor: &mut usize) {
        *cursor -= 1;
    }
}

impl<T> SizedSequence for AnySequence<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.sequence.length()
    }
}

impl<T> RandomAccessSequence for AnySequence<'_, T> {
    #[inline]
    fn jump(&self, cursor: &mut usize, offset: isize) {
        *cursor = cursor.wrapping_add_signed(offset);
        debug_assert!(*cursor <= self.sequence.length(), "jump out of range");
    }

    #[inline]
    fn distance(&self, from: &usize, to: &usize) -> isize {
        to.cast_signed() - from.cast_signed()
    }

    #[inline]
    fn cursor_at(&self, offset: usize) -> usize {
        offset
    }

    #[inline]
    fn offset_of(&self, cursor: &usize) -> usize {
        *cursor
    }
}

static_assertions::assert_not_impl_any!(AnySequence<'static, i32>: Send, Sync);
