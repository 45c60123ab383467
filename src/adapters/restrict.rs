//! Wrappers that hide capabilities above a given tier.
//!
//! Useful for exercising the weaker code paths of generic algorithms with
//! storage that could do more, and for forcing a specific capability
//! projection in a flattened view.

use crate::sequence::{
    BidirectionalSequence, Borrowed, Capabilities, ForwardSequence, Sequence, Tier,
};

macro_rules! delegate_sequence {
    ($view:ident, $bound:ident, $tier:expr) => {
        impl<S: $bound> Sequence for $view<S> {
            type Item = S::Item;
            type Cursor = S::Cursor;
            type Sentinel = S::Sentinel;

            const CAPABILITIES: Capabilities = S::CAPABILITIES.capped_at($tier);

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

        impl<S: $bound> ForwardSequence for $view<S> {}

        impl<S: $bound + Borrowed> Borrowed for $view<S> {}

        impl<S> $view<S> {
            /// Consumes the view and returns the wrapped sequence.
            pub fn into_inner(self) -> S {
                self.0
            }
        }
    };
}

/// Exposes only the forward-traversal capabilities of `S`.
///
/// # Examples
///
/// ```rust
/// use flatview::prelude::*;
///
/// let nested = vec![vec![1], vec![2, 3]];
/// let rows = nested.as_slice().forward_view();
/// let flat = flatten(rows);
///
/// assert_eq!(<Flatten<ForwardView<&[Vec<i32>]>> as Sequence>::CAPABILITIES.tier, Tier::Forward);
/// assert_eq!(flat.collect_vec(), vec![&1, &2, &3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardView<S>(S);

impl<S: ForwardSequence> ForwardView<S> {
    /// Wraps `sequence`.
    pub const fn new(sequence: S) -> Self {
        Self(sequence)
    }
}

delegate_sequence!(ForwardView, ForwardSequence, Tier::Forward);

/// Exposes only the bidirectional capabilities of `S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalView<S>(S);

impl<S: BidirectionalSequence> BidirectionalView<S> {
    /// Wraps `sequence`.
    pub const fn new(sequence: S) -> Self {
        Self(sequence)
    }
}

delegate_sequence!(BidirectionalView, BidirectionalSequence, Tier::Bidirectional);

impl<S: BidirectionalSequence> BidirectionalSequence for BidirectionalView<S> {
    #[inline]
    fn end_cursor(&self) -> S::Cursor {
        self.0.end_cursor()
    }

    #[inline]
    fn retreat(&self, cursor: &mut S::Cursor) {
        self.0.retreat(cursor);
    }
}
