//! Protocol implementations for contiguous storage.
//!
//! - `&[T]` and `&Vec<T>` are borrowed random-access views yielding `&T`.
//! - `Vec<T>` is a value-like random-access sequence yielding clones of `T`.
//!
//! All three use a plain `usize` offset as their cursor and [`EndIndex`] as
//! their sentinel.

use super::{
    BidirectionalSequence, Borrowed, Capabilities, ForwardSequence, RandomAccessSequence,
    Sentinel, Sequence, SizedSequence, Tier,
};

/// Sentinel for offset cursors: reached when the offset equals the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndIndex(pub usize);

impl Sentinel<usize> for EndIndex {
    #[inline]
    fn is_reached_by(&self, cursor: &usize) -> bool {
        *cursor == self.0
    }
}

#[inline]
fn jump_offset(cursor: &mut usize, offset: isize, length: usize) {
    *cursor = cursor.wrapping_add_signed(offset);
    debug_assert!(*cursor <= length, "jump leaves the range 0..={length}");
}

#[inline]
const fn offset_distance(from: usize, to: usize) -> isize {
    to.cast_signed() - from.cast_signed()
}

macro_rules! impl_borrowed_contiguous {
    ($($view:ty),* $(,)?) => {
        $(
            impl<'a, T> Sequence for $view {
                type Item = &'a T;
                type Cursor = usize;
                type Sentinel = EndIndex;

                const CAPABILITIES: Capabilities =
                    Capabilities::new(Tier::RandomAccess).as_borrowed();

                #[inline]
                fn begin(&self) -> usize {
                    0
                }

                #[inline]
                fn end(&self) -> EndIndex {
                    EndIndex(<[T]>::len(self))
                }

                #[inline]
                fn read(&self, cursor: &usize) -> &'a T {
                    let view: $view = *self;
                    &view[*cursor]
                }

                #[inline]
                fn advance(&self, cursor: &mut usize) {
                    debug_assert!(*cursor < <[T]>::len(self), "advance past the end");
                    *cursor += 1;
                }
            }

            impl<'a, T> ForwardSequence for $view {}

            impl<'a, T> BidirectionalSequence for $view {
                #[inline]
                fn end_cursor(&self) -> usize {
                    <[T]>::len(self)
                }

                #[inline]
                fn retreat(&self, cursor: &mut usize) {
                    debug_assert!(*cursor > 0, "retreat before the beginning");
                    *cursor -= 1;
                }
            }

            impl<'a, T> SizedSequence for $view {
                #[inline]
                fn len(&self) -> usize {
                    <[T]>::len(self)
                }
            }

            impl<'a, T> RandomAccessSequence for $view {
                #[inline]
                fn jump(&self, cursor: &mut usize, offset: isize) {
                    jump_offset(cursor, offset, <[T]>::len(self));
                }

                #[inline]
                fn distance(&self, from: &usize, to: &usize) -> isize {
                    offset_distance(*from, *to)
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

            impl<'a, T> Borrowed for $view {}
        )*
    };
}

impl_borrowed_contiguous!(&'a [T], &'a Vec<T>);

impl<T: Clone> Sequence for Vec<T> {
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
        EndIndex(self.as_slice().len())
    }

    #[inline]
    fn read(&self, cursor: &usize) -> T {
        self[*cursor].clone()
    }

    #[inline]
    fn inspect<R, F>(&self, cursor: &usize, inspector: F) -> R
    where
        F: FnOnce(&Self::Item) -> R,
    {
        inspector(&self[*cursor])
    }

    #[inline]
    fn advance(&self, cursor: &mut usize) {
        debug_assert!(*cursor < self.as_slice().len(), "advance past the end");
        *cursor += 1;
    }
}

impl<T: Clone> ForwardSequence for Vec<T> {}

impl<T: Clone> BidirectionalSequence for Vec<T> {
    #[inline]
    fn end_cursor(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn retreat(&self, cursor: &mut usize) {
        debug_assert!(*cursor > 0, "retreat before the beginning");
        *cursor -= 1;
    }
}

impl<T: Clone> SizedSequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl<T: Clone> RandomAccessSequence for Vec<T> {
    #[inline]
    fn jump(&self, cursor: &mut usize, offset: isize) {
        jump_offset(cursor, offset, self.as_slice().len());
    }

    #[inline]
    fn distance(&self, from: &usize, to: &usize) -> isize {
        offset_distance(*from, *to)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceError;
    use rstest::rstest;

    #[rstest]
    fn test_slice_reads_references() {
        let values = [1, 2, 3];
        let view: &[i32] = &values;
        let mut cursor = view.begin();
        assert_eq!(view.read(&cursor), &1);
        view.advance(&mut cursor);
        view.advance(&mut cursor);
        assert_eq!(view.read(&cursor), &3);
        view.advance(&mut cursor);
        assert!(view.is_end(&cursor));
    }

    #[rstest]
    fn test_vec_reads_clones() {
        let values = vec![String::from("a"), String::from("b")];
        let first: String = values.read(&values.begin());
        assert_eq!(first, "a");
        assert_eq!(values.len(), 2);
    }

    #[rstest]
    fn test_slice_retreat_from_end() {
        let values = vec![1, 2, 3];
        let view = values.as_slice();
        let mut cursor = view.end_cursor();
        view.retreat(&mut cursor);
        assert_eq!(view.read(&cursor), &3);
    }

    #[rstest]
    fn test_vec_reference_reads_references() {
        let values = vec![1, 2, 3];
        let view = &values;
        let element: &i32 = <&Vec<i32> as Sequence>::read(&view, &2);
        assert_eq!(element, &3);
        assert_eq!(<&Vec<i32> as SizedSequence>::len(&view), 3);
    }

    #[rstest]
    #[case(0, 2, 2)]
    #[case(3, -3, 0)]
    #[case(1, 3, 4)]
    fn test_jump(#[case] start: usize, #[case] offset: isize, #[case] expected: usize) {
        let values = vec![0, 1, 2, 3];
        let view = values.as_slice();
        let mut cursor = view.cursor_at(start);
        view.jump(&mut cursor, offset);
        assert_eq!(cursor, expected);
        assert_eq!(view.distance(&view.cursor_at(start), &cursor), offset);
    }

    #[rstest]
    fn test_try_jump_out_of_range() {
        let values = vec![0, 1, 2];
        let view = values.as_slice();
        let mut cursor = view.cursor_at(1);
        assert_eq!(
            view.try_jump(&mut cursor, 3),
            Err(SequenceError::OutOfRange {
                position: 1,
                offset: 3,
                length: 3
            })
        );
        assert_eq!(cursor, 1);
        assert_eq!(view.try_jump(&mut cursor, -1), Ok(()));
        assert_eq!(cursor, 0);
    }

    #[rstest]
    fn test_try_read_and_try_retreat_at_bounds() {
        let values: Vec<i32> = Vec::new();
        let view = values.as_slice();
        let mut cursor = view.begin();
        assert_eq!(
            view.try_read(&cursor),
            Err(SequenceError::PastEnd { operation: "read" })
        );
        assert_eq!(
            view.try_advance(&mut cursor),
            Err(SequenceError::PastEnd {
                operation: "advance"
            })
        );
        assert_eq!(view.try_retreat(&mut cursor), Err(SequenceError::BeforeBegin));
    }

    #[rstest]
    fn test_capabilities() {
        assert!(<&[u8] as Sequence>::CAPABILITIES.borrowed);
        assert!(<&Vec<u8> as Sequence>::CAPABILITIES.sized);
        assert!(!<Vec<u8> as Sequence>::CAPABILITIES.borrowed);
        assert_eq!(<Vec<u8> as Sequence>::CAPABILITIES.tier, Tier::RandomAccess);
    }
}
