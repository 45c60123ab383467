//! The composite cursor of a flattened sequence and the traversal algorithms
//! that move it.

use std::cmp::Ordering;

use crate::sequence::{
    BidirectionalSequence, Borrowed, ForwardSequence, RandomAccessSequence, Sequence,
    SizedSequence,
};
use crate::trace::trace_event;

/// The inner half of a [`FlattenCursor`].
///
/// `Active` holds a private snapshot of the inner sequence currently being
/// walked, together with a cursor into that snapshot. `Exhausted` appears only
/// when the outer cursor has reached the outer end.
#[derive(Debug, Clone, Copy)]
pub enum InnerState<I, C> {
    /// The outer cursor is at the outer end; there is no inner sequence.
    Exhausted,
    /// Walking `sequence` at `cursor`.
    Active {
        /// Snapshot of the inner sequence under the outer cursor.
        sequence: I,
        /// Position within `sequence`.
        cursor: C,
    },
}

impl<I, C> InnerState<I, C> {
    /// Returns `true` if there is no current inner sequence.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns the inner snapshot, if any.
    pub const fn sequence(&self) -> Option<&I> {
        match self {
            Self::Active { sequence, .. } => Some(sequence),
            Self::Exhausted => None,
        }
    }

    /// Returns the inner cursor, if any.
    pub const fn cursor(&self) -> Option<&C> {
        match self {
            Self::Active { cursor, .. } => Some(cursor),
            Self::Exhausted => None,
        }
    }
}

impl<I: Sequence<Cursor = C>, C> InnerState<I, C> {
    fn start(sequence: I) -> Self {
        let cursor = sequence.begin();
        Self::Active { sequence, cursor }
    }

    fn is_at_inner_end(&self) -> bool {
        match self {
            Self::Active { sequence, cursor } => sequence.is_end(cursor),
            Self::Exhausted => false,
        }
    }
}

impl<I: ForwardSequence<Cursor = C>, C: Clone + PartialEq> InnerState<I, C> {
    fn is_at_inner_begin(&self) -> bool {
        match self {
            Self::Active { sequence, cursor } => *cursor == sequence.begin(),
            Self::Exhausted => true,
        }
    }
}

impl<I: RandomAccessSequence<Cursor = C>, C: Clone + PartialEq> InnerState<I, C> {
    fn offset(&self) -> usize {
        match self {
            Self::Active { sequence, cursor } => sequence.offset_of(cursor),
            Self::Exhausted => 0,
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Self::Active { sequence, cursor } => sequence.len() - sequence.offset_of(cursor),
            Self::Exhausted => 0,
        }
    }
}

/// A position in a [`Flatten`](super::Flatten) view.
///
/// Pairs a cursor into the outer sequence with the [`InnerState`] for the
/// inner sequence under it. Unless the cursor is at the end, the inner cursor
/// always points at a readable element: empty inner sequences are skipped
/// eagerly.
///
/// # Equality
///
/// Two cursors are equal when their outer cursors are equal and their inner
/// cursors are equal (or both are exhausted). Snapshots are not compared.
///
/// # Copying
///
/// Cloning a cursor clones its snapshot, so the copy and the original move
/// independently. When the inner sequence is [`Borrowed`] the snapshot is a
/// cheap view and the cursor is `Copy`.
#[derive(Debug, Clone)]
pub struct FlattenCursor<OC, I, IC> {
    pub(super) outer: OC,
    pub(super) inner: InnerState<I, IC>,
}

impl<OC, I, IC> FlattenCursor<OC, I, IC> {
    /// Returns the outer cursor.
    pub const fn outer(&self) -> &OC {
        &self.outer
    }

    /// Returns the inner state.
    pub const fn inner(&self) -> &InnerState<I, IC> {
        &self.inner
    }

    /// Returns `true` if the outer sequence has been exhausted.
    pub const fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }
}

impl<OC: Copy, I: Borrowed, IC: Copy> Copy for FlattenCursor<OC, I, IC> {}

impl<OC: PartialEq, I, IC: PartialEq> PartialEq for FlattenCursor<OC, I, IC> {
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer && self.inner.cursor() == other.inner.cursor()
    }
}

impl<OC: Eq, I, IC: Eq> Eq for FlattenCursor<OC, I, IC> {}

impl<OC: Ord, I, IC: Ord> PartialOrd for FlattenCursor<OC, I, IC> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<OC: Ord, I, IC: Ord> Ord for FlattenCursor<OC, I, IC> {
    /// Orders by outer cursor, then by inner cursor. An exhausted inner state
    /// sorts after every active one.
    fn cmp(&self, other: &Self) -> Ordering {
        self.outer
            .cmp(&other.outer)
            .then_with(|| match (self.inner.cursor(), other.inner.cursor()) {
                (Some(left), Some(right)) => left.cmp(right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

// =============================================================================
// Traversal
// =============================================================================

type InnerCursor<S> = <<S as Sequence>::Item as Sequence>::Cursor;

/// The cursor type of `Flatten<S>`.
pub(super) type Position<S> =
    FlattenCursor<<S as Sequence>::Cursor, <S as Sequence>::Item, InnerCursor<S>>;

fn fetch<S>(outer: &S, at: &S::Cursor) -> InnerState<S::Item, InnerCursor<S>>
where
    S: Sequence,
    S::Item: Sequence,
{
    if outer.is_end(at) {
        InnerState::Exhausted
    } else {
        InnerState::start(outer.read(at))
    }
}

/// Moves past empty inner sequences until the cursor is readable or at the end.
fn skip_empty<S>(outer: &S, position: &mut Position<S>)
where
    S: Sequence,
    S::Item: Sequence,
{
    while position.inner.is_at_inner_end() {
        outer.advance(&mut position.outer);
        position.inner = fetch(outer, &position.outer);
    }
}

pub(super) fn first<S>(outer: &S) -> Position<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    let outer_cursor = outer.begin();
    let mut position = FlattenCursor {
        inner: fetch(outer, &outer_cursor),
        outer: outer_cursor,
    };
    skip_empty(outer, &mut position);
    position
}

pub(super) fn read<S>(position: &Position<S>) -> <S::Item as Sequence>::Item
where
    S: Sequence,
    S::Item: Sequence,
{
    match &position.inner {
        InnerState::Active { sequence, cursor } => sequence.read(cursor),
        InnerState::Exhausted => panic!("read past the end of a flattened sequence"),
    }
}

pub(super) fn inspect<S, R, F>(position: &Position<S>, inspector: F) -> R
where
    S: Sequence,
    S::Item: Sequence,
    F: FnOnce(&<S::Item as Sequence>::Item) -> R,
{
    match &position.inner {
        InnerState::Active { sequence, cursor } => sequence.inspect(cursor, inspector),
        InnerState::Exhausted => panic!("read past the end of a flattened sequence"),
    }
}

pub(super) fn advance<S>(outer: &S, position: &mut Position<S>)
where
    S: Sequence,
    S::Item: Sequence,
{
    match &mut position.inner {
        InnerState::Active { sequence, cursor } => sequence.advance(cursor),
        InnerState::Exhausted => panic!("advance past the end of a flattened sequence"),
    }
    skip_empty(outer, position);
}

/// Enters the inner sequence under the (already retreated) outer cursor at
/// its end.
fn enter_from_back<S>(outer: &S, position: &mut Position<S>)
where
    S: BidirectionalSequence,
    S::Item: BidirectionalSequence,
{
    let sequence = outer.read(&position.outer);
    let cursor = sequence.end_cursor();
    position.inner = InnerState::Active { sequence, cursor };
}

pub(super) fn retreat<S>(outer: &S, position: &mut Position<S>)
where
    S: BidirectionalSequence,
    S::Item: BidirectionalSequence,
{
    while position.inner.is_at_inner_begin() {
        outer.retreat(&mut position.outer);
        enter_from_back(outer, position);
    }
    if let InnerState::Active { sequence, cursor } = &mut position.inner {
        sequence.retreat(cursor);
    }
}

pub(super) fn jump<S>(outer: &S, position: &mut Position<S>, offset: isize)
where
    S: BidirectionalSequence,
    S::Item: RandomAccessSequence,
{
    if offset >= 0 {
        jump_forward(outer, position, offset.unsigned_abs());
    } else {
        jump_backward(outer, position, offset.unsigned_abs());
    }
}

/// Length of the inner sequence under `at`, measured without copying it.
fn inner_length<S>(outer: &S, at: &S::Cursor) -> usize
where
    S: Sequence,
    S::Item: SizedSequence,
{
    outer.inspect(at, |inner| inner.len())
}

fn jump_forward<S>(outer: &S, position: &mut Position<S>, mut remaining: usize)
where
    S: BidirectionalSequence,
    S::Item: RandomAccessSequence,
{
    match &mut position.inner {
        InnerState::Exhausted => {
            debug_assert_eq!(remaining, 0, "jump past the end of a flattened sequence");
            return;
        }
        InnerState::Active { sequence, cursor } => {
            let room = sequence.len() - sequence.offset_of(cursor);
            if remaining < room {
                sequence.jump(cursor, remaining.cast_signed());
                return;
            }
            remaining -= room;
        }
    }
    loop {
        trace_event!(remaining, "forward jump crosses into the next inner sequence");
        outer.advance(&mut position.outer);
        if outer.is_end(&position.outer) {
            debug_assert_eq!(remaining, 0, "jump past the end of a flattened sequence");
            position.inner = InnerState::Exhausted;
            return;
        }
        let length = inner_length(outer, &position.outer);
        if remaining < length {
            let sequence = outer.read(&position.outer);
            let mut cursor = sequence.begin();
            sequence.jump(&mut cursor, remaining.cast_signed());
            position.inner = InnerState::Active { sequence, cursor };
            return;
        }
        remaining -= length;
    }
}

fn jump_backward<S>(outer: &S, position: &mut Position<S>, mut remaining: usize)
where
    S: BidirectionalSequence,
    S::Item: RandomAccessSequence,
{
    if let InnerState::Active { sequence, cursor } = &mut position.inner {
        let consumed = sequence.offset_of(cursor);
        if remaining <= consumed {
            sequence.jump(cursor, -(remaining.cast_signed()));
            return;
        }
        remaining -= consumed;
    } else if remaining == 0 {
        return;
    }
    // `remaining` is positive here, so the landing inner sequence is never empty.
    loop {
        trace_event!(remaining, "backward jump crosses into the previous inner sequence");
        outer.retreat(&mut position.outer);
        let length = inner_length(outer, &position.outer);
        if remaining <= length {
            let sequence = outer.read(&position.outer);
            let mut cursor = sequence.end_cursor();
            sequence.jump(&mut cursor, -(remaining.cast_signed()));
            position.inner = InnerState::Active { sequence, cursor };
            return;
        }
        remaining -= length;
    }
}

enum Progress {
    Reached(usize),
    Pending,
    Unreachable,
}

/// A forward walk over the outer sequence from one position toward another,
/// taken one outer step at a time.
struct Walk<'a, S>
where
    S: ForwardSequence,
    S::Item: RandomAccessSequence,
{
    outer: &'a S,
    walker: S::Cursor,
    target: &'a Position<S>,
    total: usize,
}

impl<'a, S> Walk<'a, S>
where
    S: ForwardSequence,
    S::Item: RandomAccessSequence,
{
    fn new(outer: &'a S, from: &Position<S>, target: &'a Position<S>) -> Self {
        Self {
            outer,
            walker: from.outer.clone(),
            target,
            total: from.inner.remaining(),
        }
    }

    fn step(&mut self) -> Progress {
        if self.outer.is_end(&self.walker) {
            return Progress::Unreachable;
        }
        self.outer.advance(&mut self.walker);
        if self.walker == self.target.outer {
            return Progress::Reached(self.total + self.target.inner.offset());
        }
        if !self.outer.is_end(&self.walker) {
            self.total += inner_length(self.outer, &self.walker);
        }
        Progress::Pending
    }
}

/// Signed element count from `from` to `to`.
///
/// Walks forward from both cursors in lockstep, so the cost is bounded by the
/// number of outer steps between them.
pub(super) fn distance<S>(outer: &S, from: &Position<S>, to: &Position<S>) -> isize
where
    S: ForwardSequence,
    S::Item: RandomAccessSequence,
{
    if from.outer == to.outer {
        return to.inner.offset().cast_signed() - from.inner.offset().cast_signed();
    }
    let mut forward = Walk::new(outer, from, to);
    let mut backward = Walk::new(outer, to, from);
    loop {
        match (forward.step(), backward.step()) {
            (Progress::Reached(count), _) => return count.cast_signed(),
            (_, Progress::Reached(count)) => return -(count.cast_signed()),
            (Progress::Unreachable, Progress::Unreachable) => {
                panic!("cursors do not belong to the same flattened sequence")
            }
            _ => {}
        }
    }
}

pub(super) fn total_length<S>(outer: &S) -> usize
where
    S: ForwardSequence,
    S::Item: SizedSequence,
{
    let mut walker = outer.begin();
    let mut total = 0;
    while !outer.is_end(&walker) {
        let length = inner_length(outer, &walker);
        trace_event!(length, "measured inner sequence");
        total += length;
        outer.advance(&mut walker);
    }
    trace_event!(total, "computed flattened length");
    total
}
