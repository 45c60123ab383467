//! The cursor protocol shared by every sequence in the crate.
//!
//! A sequence hands out *passive* cursors: plain values that record a
//! position but do not borrow the sequence. Every movement and every read
//! goes through the sequence that produced the cursor:
//!
//! ```rust
//! use flatview::sequence::Sequence;
//!
//! let values = vec![1, 2, 3];
//! let view = values.as_slice();
//!
//! let mut cursor = view.begin();
//! assert_eq!(view.read(&cursor), &1);
//! view.advance(&mut cursor);
//! assert_eq!(view.read(&cursor), &2);
//! ```
//!
//! Because cursors never point into the sequence, a cursor can be stored next
//! to a private copy of the sequence it walks. This is what lets the flatten
//! cursor keep a snapshot of the current inner sequence alongside its inner
//! cursor.
//!
//! # Tiers
//!
//! The protocol is split into traits by capability, weakest first:
//!
//! - [`Sequence`]: single pass (read, advance, end test)
//! - [`ForwardSequence`]: cursors are `Clone + PartialEq`; the sequence is restartable
//! - [`BidirectionalSequence`]: end cursor and backward movement
//! - [`SizedSequence`]: length query
//! - [`RandomAccessSequence`]: offset jumps and signed distances
//!
//! [`Capabilities`] mirrors the same information as a `const` on every
//! sequence type.

mod capability;
mod error;
mod ext;
mod iter;
mod slice;

pub use capability::{Capabilities, Tier};
pub use error::SequenceError;
pub use ext::{SequenceExt, flatten};
pub use iter::{IntoElements, Iter, Span};
pub use slice::EndIndex;

/// An end marker that can be compared against cursors of type `C`.
///
/// Sentinels are immutable. A sequence's sentinel is obtained from
/// [`Sequence::end`] and is reached once the cursor has moved past the last
/// element.
pub trait Sentinel<C> {
    /// Returns `true` if `cursor` denotes the end.
    fn is_reached_by(&self, cursor: &C) -> bool;
}

/// A sequence that can be traversed at least once, front to back.
///
/// # Required Methods
///
/// - `begin`: cursor at the first element
/// - `end`: the end sentinel
/// - `read`: element under a cursor
/// - `advance`: move a cursor forward by one element
///
/// # Preconditions
///
/// `read` and `advance` must not be called with a cursor that has reached
/// the end. Implementations are free to panic in that case. The checked
/// counterparts [`try_read`](Sequence::try_read) and
/// [`try_advance`](Sequence::try_advance) report a [`SequenceError`] instead.
///
/// # Examples
///
/// ```rust
/// use flatview::sequence::Sequence;
///
/// let values = [10, 20];
/// let view: &[i32] = &values;
///
/// let mut cursor = view.begin();
/// let mut seen = Vec::new();
/// while !view.is_end(&cursor) {
///     seen.push(*view.read(&cursor));
///     view.advance(&mut cursor);
/// }
/// assert_eq!(seen, vec![10, 20]);
/// ```
pub trait Sequence {
    /// The element type produced by [`read`](Sequence::read).
    type Item;

    /// A passive position within the sequence.
    type Cursor;

    /// The end marker.
    type Sentinel: Sentinel<Self::Cursor>;

    /// Static description of what this sequence type can do.
    const CAPABILITIES: Capabilities;

    /// Returns a cursor at the first element (or at the end if empty).
    fn begin(&self) -> Self::Cursor;

    /// Returns the end sentinel.
    fn end(&self) -> Self::Sentinel;

    /// Returns the element under `cursor`.
    fn read(&self, cursor: &Self::Cursor) -> Self::Item;

    /// Moves `cursor` forward by one element.
    fn advance(&self, cursor: &mut Self::Cursor);

    /// Returns `true` if `cursor` has reached the end.
    #[inline]
    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        self.end().is_reached_by(cursor)
    }

    /// Passes the element under `cursor` to `inspector` by reference.
    ///
    /// Value-like sequences override this to lend the stored element instead
    /// of producing a copy through [`read`](Sequence::read), so that queries
    /// such as the length of an inner sequence cost no clone.
    #[inline]
    fn inspect<R, F>(&self, cursor: &Self::Cursor, inspector: F) -> R
    where
        F: FnOnce(&Self::Item) -> R,
    {
        inspector(&self.read(cursor))
    }

    /// Reads the element under `cursor`, or reports that it is at the end.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::PastEnd`] if `cursor` has reached the end.
    fn try_read(&self, cursor: &Self::Cursor) -> Result<Self::Item, SequenceError> {
        if self.is_end(cursor) {
            Err(SequenceError::PastEnd { operation: "read" })
        } else {
            Ok(self.read(cursor))
        }
    }

    /// Advances `cursor`, or reports that it is already at the end.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::PastEnd`] if `cursor` has reached the end.
    fn try_advance(&self, cursor: &mut Self::Cursor) -> Result<(), SequenceError> {
        if self.is_end(cursor) {
            Err(SequenceError::PastEnd {
                operation: "advance",
            })
        } else {
            self.advance(cursor);
            Ok(())
        }
    }
}

/// A restartable sequence whose cursors can be copied and compared.
///
/// Calling [`begin`](Sequence::begin) twice yields two independent passes.
/// Two cursors from the same sequence are equal iff they denote the same
/// position.
pub trait ForwardSequence: Sequence<Cursor: Clone + PartialEq> {}

/// A forward sequence whose cursors can also move backward.
///
/// Bidirectional sequences are bounded: the end position is available as a
/// cursor through [`end_cursor`](BidirectionalSequence::end_cursor), so that
/// traversal can start from the back.
pub trait BidirectionalSequence: ForwardSequence {
    /// Returns a cursor positioned at the end.
    fn end_cursor(&self) -> Self::Cursor;

    /// Moves `cursor` backward by one element.
    ///
    /// The cursor must not be at the beginning.
    fn retreat(&self, cursor: &mut Self::Cursor);

    /// Retreats `cursor`, or reports that it is already at the beginning.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::BeforeBegin`] if `cursor` equals
    /// [`begin`](Sequence::begin).
    fn try_retreat(&self, cursor: &mut Self::Cursor) -> Result<(), SequenceError> {
        if *cursor == self.begin() {
            Err(SequenceError::BeforeBegin)
        } else {
            self.retreat(cursor);
            Ok(())
        }
    }
}

/// A sequence that reports its length without being traversed by the caller.
pub trait SizedSequence: Sequence {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sized bidirectional sequence whose cursors can jump by an offset.
///
/// # Required Methods
///
/// - `jump`: move a cursor by a signed offset
/// - `distance`: signed number of elements from one cursor to another
///
/// # Provided Methods
///
/// All other methods are built on `jump`, `distance`, and `read`.
///
/// # Examples
///
/// ```rust
/// use flatview::sequence::{RandomAccessSequence, Sequence};
///
/// let values = vec!['a', 'b', 'c', 'd'];
/// let view = values.as_slice();
///
/// let cursor = view.cursor_at(1);
/// assert_eq!(view.read(&cursor), &'b');
/// assert_eq!(view.read_offset(&cursor, 2), &'d');
/// assert_eq!(view.distance(&view.begin(), &cursor), 1);
/// assert_eq!(view.get_item(4), None);
/// ```
pub trait RandomAccessSequence: BidirectionalSequence + SizedSequence {
    /// Moves `cursor` by `offset` elements (backward when negative).
    ///
    /// The destination must lie within `0..=len()`.
    fn jump(&self, cursor: &mut Self::Cursor, offset: isize);

    /// Returns the signed number of elements from `from` to `to`.
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize;

    /// Returns a cursor at `offset` elements from the beginning.
    fn cursor_at(&self, offset: usize) -> Self::Cursor {
        let mut cursor = self.begin();
        self.jump(&mut cursor, offset.cast_signed());
        cursor
    }

    /// Returns the offset of `cursor` from the beginning.
    fn offset_of(&self, cursor: &Self::Cursor) -> usize {
        self.distance(&self.begin(), cursor).unsigned_abs()
    }

    /// Returns a copy of `cursor` moved by `offset`.
    fn jumped(&self, cursor: &Self::Cursor, offset: isize) -> Self::Cursor {
        let mut moved = cursor.clone();
        self.jump(&mut moved, offset);
        moved
    }

    /// Reads the element `offset` positions away from `cursor`.
    fn read_offset(&self, cursor: &Self::Cursor, offset: isize) -> Self::Item {
        self.read(&self.jumped(cursor, offset))
    }

    /// Returns the element at `index`.
    ///
    /// `index` must be less than `len()`.
    fn item_at(&self, index: usize) -> Self::Item {
        self.read(&self.cursor_at(index))
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    fn get_item(&self, index: usize) -> Option<Self::Item> {
        (index < self.len()).then(|| self.item_at(index))
    }

    /// Jumps `cursor` by `offset`, or reports that the destination is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if the destination lies outside
    /// `0..=len()`; `cursor` is left unchanged.
    fn try_jump(&self, cursor: &mut Self::Cursor, offset: isize) -> Result<(), SequenceError> {
        let position = self.offset_of(cursor);
        let length = self.len();
        match position.checked_add_signed(offset) {
            Some(target) if target <= length => {
                self.jump(cursor, offset);
                Ok(())
            }
            _ => Err(SequenceError::OutOfRange {
                position,
                offset,
                length,
            }),
        }
    }
}

/// Marker for reference-like sequences.
///
/// A borrowed sequence is a cheap `Copy` view into storage that outlives it.
/// Elements read through it do not depend on the view value itself, so a
/// cursor may hold a copy of the view instead of a private snapshot.
pub trait Borrowed: Sequence + Copy {}
