// SPDX-License-Identifier: MPL-2.0

//! Comparison operators of one-sided bounds.

use std::fmt;

/// Operator of a one-sided bound.
///
/// The derived order, `>=` < `>` < `<` < `<=`, is the tie-break used when two
/// bounds share the same version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    /// `>=`
    GreaterThanOrEqual,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
}

impl Op {
    /// Operators bounding versions from below.
    pub fn is_floor(self) -> bool {
        matches!(self, Self::GreaterThanOrEqual | Self::GreaterThan)
    }

    /// Operators bounding versions from above.
    pub fn is_ceiling(self) -> bool {
        matches!(self, Self::LessThan | Self::LessThanOrEqual)
    }

    /// Whether the bound version itself is accepted.
    pub fn is_inclusive(self) -> bool {
        matches!(self, Self::GreaterThanOrEqual | Self::LessThanOrEqual)
    }

    /// Textual form, as written in a constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GreaterThanOrEqual => ">=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(any(feature = "proptest", test))]
impl proptest::arbitrary::Arbitrary for Op {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        prop_oneof![
            Just(Op::GreaterThanOrEqual),
            Just(Op::GreaterThan),
            Just(Op::LessThan),
            Just(Op::LessThanOrEqual),
        ]
        .boxed()
    }
}
