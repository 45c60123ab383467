//! Tests for capability projection.
//!
//! Checks at compile time that `Flatten` implements exactly the protocol
//! traits its projected capabilities advertise, and at run time that the
//! projected tier and size follow the inner sequence's tier.

use flatview::prelude::*;
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any, const_assert};

type Rows = Vec<&'static [i32]>;

// =============================================================================
// Trait Ladder per Outer Tier
// =============================================================================

assert_not_impl_any!(Flatten<SinglePass<std::vec::IntoIter<Vec<i32>>>>: ForwardSequence);

assert_impl_all!(Flatten<ForwardView<Rows>>: ForwardSequence, SizedSequence);
assert_not_impl_any!(Flatten<ForwardView<Rows>>: BidirectionalSequence);

assert_impl_all!(Flatten<BidirectionalView<Rows>>: RandomAccessSequence);
assert_impl_all!(Flatten<BidirectionalView<Vec<BidirectionalView<&'static [i32]>>>>: BidirectionalSequence);
assert_not_impl_any!(
    Flatten<BidirectionalView<Vec<BidirectionalView<&'static [i32]>>>>: RandomAccessSequence,
    SizedSequence
);

assert_impl_all!(Flatten<BidirectionalView<Vec<ForwardView<&'static [i32]>>>>: ForwardSequence);
assert_not_impl_any!(
    Flatten<BidirectionalView<Vec<ForwardView<&'static [i32]>>>>: BidirectionalSequence,
    SizedSequence
);

assert_impl_all!(Flatten<&'static [Vec<i32>]>: RandomAccessSequence, Borrowed, Copy);
assert_impl_all!(Flatten<Vec<Vec<i32>>>: RandomAccessSequence, Clone);
assert_not_impl_any!(Flatten<Vec<Vec<i32>>>: Borrowed, Copy);

// =============================================================================
// Cursor Traits
// =============================================================================

assert_impl_all!(FlattenCursor<usize, &'static [i32], usize>: Copy, Ord);
assert_impl_all!(FlattenCursor<usize, Vec<i32>, usize>: Clone, Eq);
assert_not_impl_any!(FlattenCursor<usize, Vec<i32>, usize>: Copy);

// =============================================================================
// Constant Capabilities
// =============================================================================

const_assert!(<Flatten<&'static [Vec<i32>]> as Sequence>::CAPABILITIES.sized);
const_assert!(<Flatten<&'static [Vec<i32>]> as Sequence>::CAPABILITIES.borrowed);
const_assert!(!<Flatten<Vec<Vec<i32>>> as Sequence>::CAPABILITIES.borrowed);
const_assert!(
    <Flatten<Flatten<&'static [Vec<Vec<i32>>]>> as Sequence>::CAPABILITIES
        .supports(Tier::RandomAccess)
);

fn capabilities_of<S: Sequence>(_: &S) -> Capabilities {
    S::CAPABILITIES
}

// =============================================================================
// Per Inner Tier Suites
// =============================================================================

fn single_pass(view: &[i32]) -> SinglePass<std::iter::Copied<std::slice::Iter<'_, i32>>> {
    SinglePass::new(view.iter().copied())
}

fn forward(view: &[i32]) -> ForwardView<&[i32]> {
    ForwardView::new(view)
}

fn bidirectional(view: &[i32]) -> BidirectionalView<&[i32]> {
    BidirectionalView::new(view)
}

fn random_access(view: &[i32]) -> &[i32] {
    view
}

macro_rules! inner_tier_suite {
    ($($name:ident => $tier:expr, sized: $sized:expr;)+) => {
        paste::paste! {
            $(
                #[rstest]
                fn [<$name _inner_flatten_collects>]() {
                    let values = vec![1, 2, 3];
                    let flat = flatten(vec![$name(&values), $name(&[]), $name(&values)]);
                    let collected: Vec<i32> =
                        flat.elements().map(|element| element.to_owned()).collect();
                    assert_eq!(collected, vec![1, 2, 3, 1, 2, 3]);
                }

                #[rstest]
                fn [<$name _inner_flatten_tier>]() {
                    let values = vec![1, 2, 3];
                    let flat = flatten(vec![$name(&values)]);
                    assert_eq!(capabilities_of(&flat).tier, $tier);
                }

                #[rstest]
                fn [<$name _inner_flatten_sized>]() {
                    let values = vec![1, 2, 3];
                    let flat = flatten(vec![$name(&values)]);
                    assert_eq!(capabilities_of(&flat).sized, $sized);
                }

                #[rstest]
                fn [<$name _inner_flatten_is_owned>]() {
                    let values = vec![1, 2, 3];
                    let flat = flatten(vec![$name(&values)]);
                    assert!(!capabilities_of(&flat).borrowed);
                }
            )+
        }
    };
}

inner_tier_suite! {
    single_pass => Tier::SinglePass, sized: false;
    forward => Tier::Forward, sized: false;
    bidirectional => Tier::Bidirectional, sized: false;
    random_access => Tier::RandomAccess, sized: true;
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn projected_capabilities_display() {
    let projected = capabilities_of(&flatten(vec![vec![1]]));
    assert_eq!(projected.to_string(), "random-access+sized");
}
