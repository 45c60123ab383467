use super::cursor::FlattenCursor;
use crate::sequence::Sentinel;

/// The end marker of a [`Flatten`](super::Flatten) view.
///
/// Wraps the outer sequence's sentinel. A cursor reaches it when its outer
/// cursor reaches the outer end; the inner state is then exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlattenSentinel<OS> {
    outer_end: OS,
}

impl<OS> FlattenSentinel<OS> {
    pub(super) const fn new(outer_end: OS) -> Self {
        Self { outer_end }
    }

    /// Returns the wrapped outer sentinel.
    pub const fn outer_end(&self) -> &OS {
        &self.outer_end
    }
}

impl<OS, OC, I, IC> Sentinel<FlattenCursor<OC, I, IC>> for FlattenSentinel<OS>
where
    OS: Sentinel<OC>,
{
    #[inline]
    fn is_reached_by(&self, cursor: &FlattenCursor<OC, I, IC>) -> bool {
        cursor.is_exhausted() && self.outer_end.is_reached_by(cursor.outer())
    }
}

impl<OS, OC, I, IC> PartialEq<FlattenSentinel<OS>> for FlattenCursor<OC, I, IC>
where
    OS: Sentinel<OC>,
{
    fn eq(&self, sentinel: &FlattenSentinel<OS>) -> bool {
        sentinel.is_reached_by(self)
    }
}

impl<OS, OC, I, IC> PartialEq<FlattenCursor<OC, I, IC>> for FlattenSentinel<OS>
where
    OS: Sentinel<OC>,
{
    fn eq(&self, cursor: &FlattenCursor<OC, I, IC>) -> bool {
        self.is_reached_by(cursor)
    }
}
