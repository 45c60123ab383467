//! # flatview
//!
//! Lazy flattening of sequences of sequences, with capability tiers.
//!
//! ## Overview
//!
//! A [`Flatten`](flatten::Flatten) view walks an outer sequence and, for each
//! element, an inner sequence, presenting the concatenation without
//! materializing it. The view offers exactly the traversal operations that the
//! two levels can support together:
//!
//! - **Cursor protocol**: single-pass, forward, bidirectional and random-access
//!   tiers as a ladder of traits ([`sequence`])
//! - **Capability projection**: a `const` description of what every sequence
//!   type can do, computed for flattened views at compile time
//! - **Flatten**: the composite cursor, skip-empty traversal, offset jumps and
//!   distances across inner sequences ([`flatten`](mod@flatten))
//! - **Adapters**: map, single-pass, tier-capping, reference and type-erased
//!   views that compose with flattening ([`adapters`])
//!
//! ## Feature Flags
//!
//! - `erased` (default): `AnySequence`, the type-erased random-access view
//! - `tracing`: structured trace events through the `tracing` crate
//! - `serde`: `Serialize`/`Deserialize` for capability metadata
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use flatview::prelude::*;
//!
//! let nested = vec![vec![1, 2], vec![3, 4, 5], vec![], vec![6]];
//! let flat = flatten(&nested);
//!
//! let collected: Vec<i32> = flat.elements().copied().collect();
//! assert_eq!(collected, vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(flat.len(), 6);
//! assert_eq!(flat.item_at(4), &5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the protocol traits, the flatten view and the adapters.
///
/// # Usage
///
/// ```rust
/// use flatview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapters::*;
    pub use crate::flatten::*;
    pub use crate::sequence::*;
}

pub mod adapters;
pub mod flatten;
pub mod sequence;

mod trace;

pub use sequence::flatten;
