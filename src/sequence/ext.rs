//! Convenience methods available on every sequence.

use super::{BidirectionalSequence, ForwardSequence, Iter, Sequence, Span};
use crate::adapters::{BidirectionalView, ForwardView, Map, RefView};
use crate::flatten::Flatten;

#[cfg(feature = "erased")]
use super::RandomAccessSequence;
#[cfg(feature = "erased")]
use crate::adapters::AnySequence;

/// Flattens a sequence of sequences.
///
/// Pass a reference (`&nested`) to flatten borrowed storage without copying,
/// or an owned sequence to move it into the view.
///
/// # Examples
///
/// ```rust
/// use flatview::flatten;
///
/// let nested = vec![vec![1, 2], vec![3, 4, 5], vec![], vec![6]];
/// let flat = flatten(&nested);
///
/// let collected: Vec<i32> = flat.into_iter().copied().collect();
/// assert_eq!(collected, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten<S>(outer: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    Flatten::new(outer)
}

/// Extension methods for every [`Sequence`].
///
/// # Method Resolution
///
/// `Vec<T>` is a value-like sequence (yielding clones) while `&Vec<T>` is a
/// borrowed one (yielding references). Calling a method through a `&Vec<T>`
/// binding resolves to the `Vec<T>` implementation first; use `as_slice()` or
/// an explicit `(&vector)` receiver to select the borrowed one.
pub trait SequenceExt: Sequence {
    /// Returns an iterator over the elements.
    fn elements(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Returns a double-ended iterator over the elements.
    fn span(&self) -> Span<'_, Self>
    where
        Self: BidirectionalSequence + Sized,
    {
        Span::new(self)
    }

    /// Collects the elements into a `Vec`.
    fn collect_vec(&self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.elements().collect()
    }

    /// Flattens this sequence of sequences into a [`Flatten`] view.
    fn flattened(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Sequence,
    {
        Flatten::new(self)
    }

    /// Lazily applies `function` to every element.
    fn mapped<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Hides every capability above forward traversal.
    fn forward_view(self) -> ForwardView<Self>
    where
        Self: ForwardSequence + Sized,
    {
        ForwardView::new(self)
    }

    /// Hides every capability above bidirectional traversal.
    fn bidirectional_view(self) -> BidirectionalView<Self>
    where
        Self: BidirectionalSequence + Sized,
    {
        BidirectionalView::new(self)
    }

    /// Borrows this sequence as a copyable view.
    fn by_ref_view(&self) -> RefView<'_, Self> {
        RefView::new(self)
    }

    /// Erases the concrete type of a random-access sequence.
    #[cfg(feature = "erased")]
    fn erased<'a>(self) -> AnySequence<'a, Self::Item>
    where
        Self: RandomAccessSequence + Sized + 'a,
    {
        AnySequence::new(self)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
