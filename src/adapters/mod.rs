//! Sequence adapters that compose with [`Flatten`](crate::flatten::Flatten).
//!
//! # Available Adapters
//!
//! - [`Map`]: lazily transforms every element
//! - [`SinglePass`]: a one-shot sequence over a standard iterator
//! - [`ForwardView`] / [`BidirectionalView`]: hide capabilities above a tier
//! - [`RefView`]: a copyable borrowed view of any sequence
//! - [`AnySequence`]: a type-erased random-access sequence (feature `erased`)

mod map;
mod ref_view;
mod restrict;
mod single_pass;

#[cfg(feature = "erased")]
mod erased;

pub use map::Map;
pub use ref_view::RefView;
pub use restrict::{BidirectionalView, ForwardView};
pub use single_pass::{SinglePass, SinglePassCursor, SourceExhausted};

#[cfg(feature = "erased")]
pub use erased::AnySequence;
