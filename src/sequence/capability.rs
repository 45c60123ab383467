//! Capability tiers and their projection through `flatten`.
//!
//! Every [`Sequence`](super::Sequence) publishes its [`Capabilities`] as an
//! associated constant. The constant mirrors the protocol traits the type
//! implements, so generic code can inspect the tier of a composed sequence
//! without naming any of its traits.
//!
//! # Projection
//!
//! [`Capabilities::flatten`] computes the tier of a flattened sequence from the
//! tiers of its outer and inner sequences:
//!
//! | Outer                  | Inner                 | Flattened     |
//! |------------------------|-----------------------|---------------|
//! | single-pass            | any                   | single-pass   |
//! | any                    | single-pass           | single-pass   |
//! | forward                | forward or better     | forward       |
//! | bidirectional or better| forward               | forward       |
//! | bidirectional or better| bidirectional         | bidirectional |
//! | bidirectional or better| random access (sized) | random access |
//!
//! # Examples
//!
//! ```rust
//! use flatview::sequence::{Capabilities, Tier};
//!
//! let outer = Capabilities::new(Tier::Bidirectional);
//! let inner = Capabilities::new(Tier::RandomAccess);
//!
//! let flattened = Capabilities::flatten(outer, inner);
//! assert_eq!(flattened.tier, Tier::RandomAccess);
//! assert!(flattened.sized);
//! ```

use std::fmt;

/// The traversal tier of a sequence, weakest first.
///
/// Tiers are totally ordered: a sequence of a given tier supports every
/// operation of the tiers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// One pass only; cursors cannot be copied and the sequence cannot be restarted.
    SinglePass,
    /// Restartable; cursors can be copied and compared.
    Forward,
    /// Cursors can also move backward, and an end cursor is available.
    Bidirectional,
    /// Cursors can jump by an offset, distances are O(1) per inner step, and
    /// the sequence reports its length.
    RandomAccess,
}

impl Tier {
    /// Returns the weaker of two tiers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatview::sequence::Tier;
    ///
    /// assert_eq!(Tier::RandomAccess.min(Tier::Forward), Tier::Forward);
    /// ```
    #[inline]
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns `true` if this tier offers at least the operations of `other`.
    #[inline]
    #[must_use]
    pub const fn at_least(self, other: Self) -> bool {
        (self as u8) >= (other as u8)
    }

    /// Short lowercase name, used in `Display` and trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SinglePass => "single-pass",
            Self::Forward => "forward",
            Self::Bidirectional => "bidirectional",
            Self::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Static capability metadata of a sequence type.
///
/// # Fields
///
/// - `tier`: the strongest traversal tier offered
/// - `sized`: whether the sequence reports its length
/// - `borrowed`: whether the sequence is a reference-like view that may be
///   copied freely while its elements stay valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// The strongest traversal tier offered.
    pub tier: Tier,
    /// Whether a length query is available.
    pub sized: bool,
    /// Whether the sequence is a borrowed view.
    pub borrowed: bool,
}

impl Capabilities {
    /// Capabilities of an owning sequence of the given tier.
    ///
    /// Random access implies `sized`.
    #[inline]
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self {
            tier,
            sized: matches!(tier, Tier::RandomAccess),
            borrowed: false,
        }
    }

    /// Marks the capabilities as sized.
    #[inline]
    #[must_use]
    pub const fn with_size(self) -> Self {
        Self {
            sized: true,
            ..self
        }
    }

    /// Marks the capabilities as borrowed.
    #[inline]
    #[must_use]
    pub const fn as_borrowed(self) -> Self {
        Self {
            borrowed: true,
            ..self
        }
    }

    /// Drops the `borrowed` mark, for adapters that produce values.
    #[inline]
    #[must_use]
    pub const fn as_owned(self) -> Self {
        Self {
            borrowed: false,
            ..self
        }
    }

    /// Caps the tier at `tier`.
    ///
    /// Capping below random access drops `sized`, mirroring the restricted
    /// views, which hide the length query together with offset jumps.
    #[inline]
    #[must_use]
    pub const fn capped_at(self, tier: Tier) -> Self {
        let tier = self.tier.min(tier);
        Self {
            tier,
            sized: self.sized && matches!(tier, Tier::RandomAccess),
            borrowed: self.borrowed,
        }
    }

    /// Returns `true` if the tier offers at least the operations of `tier`.
    #[inline]
    #[must_use]
    pub const fn supports(self, tier: Tier) -> bool {
        self.tier.at_least(tier)
    }

    /// Projects the capabilities of a flattened sequence.
    ///
    /// See the module documentation for the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatview::sequence::{Capabilities, Tier};
    ///
    /// let single_pass_outer = Capabilities::new(Tier::SinglePass);
    /// let random_access_inner = Capabilities::new(Tier::RandomAccess);
    ///
    /// let flattened = Capabilities::flatten(single_pass_outer, random_access_inner);
    /// assert_eq!(flattened.tier, Tier::SinglePass);
    /// assert!(!flattened.sized);
    /// ```
    #[must_use]
    pub const fn flatten(outer: Self, inner: Self) -> Self {
        let tier = match (outer.tier, inner.tier) {
            (Tier::SinglePass, _) | (_, Tier::SinglePass) => Tier::SinglePass,
            (Tier::Forward, _) | (_, Tier::Forward) => Tier::Forward,
            (_, Tier::Bidirectional) => Tier::Bidirectional,
            (_, Tier::RandomAccess) => {
                if inner.sized {
                    Tier::RandomAccess
                } else {
                    Tier::Bidirectional
                }
            }
        };
        Self {
            tier,
            sized: inner.sized && outer.tier.at_least(Tier::Forward),
            borrowed: outer.borrowed,
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.tier)?;
        if self.sized {
            write!(formatter, "+sized")?;
        }
        if self.borrowed {
            write!(formatter, "+borrowed")?;
        }
        Ok(())
    }
}
