// SPDX-License-Identifier: MPL-2.0

//! One-sided constraints on versions.
//!
//! A [Bound] is one of:
//!  - [Wildcard](Bound::Wildcard): every version, written `*`
//!  - [Floor](Bound::Floor): versions above some version, written `>=v` or `>v`
//!  - [Ceiling](Bound::Ceiling): versions below some version, written `<v` or `<=v`

use std::cmp::Ordering;
use std::fmt;

use crate::internal::order::cmp_bounds;
use crate::op::Op;

/// A one-sided constraint, or the wildcard matching every version.
///
/// `Bound` does not implement [Ord]: see [compare](Bound::compare).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound<V> {
    /// Satisfied by any version.
    Wildcard,
    /// Satisfied by versions higher than `version`, or equal to it if `inclusive`.
    Floor {
        /// Lowest end of the constraint.
        version: V,
        /// `>=` when true, `>` otherwise.
        inclusive: bool,
    },
    /// Satisfied by versions lower than `version`, or equal to it if `inclusive`.
    Ceiling {
        /// Highest end of the constraint.
        version: V,
        /// `<=` when true, `<` otherwise.
        inclusive: bool,
    },
}

// Bound building blocks.
impl<V> Bound<V> {
    /// `*`
    pub fn wildcard() -> Self {
        Self::Wildcard
    }

    /// `>=v`
    pub fn greater_than_or_equal_to(v: V) -> Self {
        Self::Floor {
            version: v,
            inclusive: true,
        }
    }

    /// `>v`
    pub fn greater_than(v: V) -> Self {
        Self::Floor {
            version: v,
            inclusive: false,
        }
    }

    /// `<v`
    pub fn less_than(v: V) -> Self {
        Self::Ceiling {
            version: v,
            inclusive: false,
        }
    }

    /// `<=v`
    pub fn less_than_or_equal_to(v: V) -> Self {
        Self::Ceiling {
            version: v,
            inclusive: true,
        }
    }

    /// Bound from an operator and a version, `op` then `v`.
    pub fn from_op(op: Op, v: V) -> Self {
        match op {
            Op::GreaterThanOrEqual => Self::greater_than_or_equal_to(v),
            Op::GreaterThan => Self::greater_than(v),
            Op::LessThan => Self::less_than(v),
            Op::LessThanOrEqual => Self::less_than_or_equal_to(v),
        }
    }
}

impl<V> Bound<V> {
    /// Operator of a floor or a ceiling, [None] for the wildcard.
    pub fn op(&self) -> Option<Op> {
        match self {
            Self::Wildcard => None,
            Self::Floor {
                inclusive: true, ..
            } => Some(Op::GreaterThanOrEqual),
            Self::Floor {
                inclusive: false, ..
            } => Some(Op::GreaterThan),
            Self::Ceiling {
                inclusive: false, ..
            } => Some(Op::LessThan),
            Self::Ceiling {
                inclusive: true, ..
            } => Some(Op::LessThanOrEqual),
        }
    }

    /// Version of a floor or a ceiling, [None] for the wildcard.
    pub fn version(&self) -> Option<&V> {
        match self {
            Self::Wildcard => None,
            Self::Floor { version, .. } | Self::Ceiling { version, .. } => Some(version),
        }
    }

    /// Whether this is the wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Whether versions are bounded from below.
    pub fn is_floor(&self) -> bool {
        matches!(self, Self::Floor { .. })
    }

    /// Whether versions are bounded from above.
    pub fn is_ceiling(&self) -> bool {
        matches!(self, Self::Ceiling { .. })
    }

    /// Whether the bound version itself satisfies the constraint.
    /// False for the wildcard, which has no bound version.
    pub fn is_inclusive(&self) -> bool {
        match self {
            Self::Wildcard => false,
            Self::Floor { inclusive, .. } | Self::Ceiling { inclusive, .. } => *inclusive,
        }
    }
}

impl<V: Clone> Bound<V> {
    /// Projection on the floor role: a floor stays itself, anything else is the wildcard.
    pub fn floor(&self) -> Self {
        match self {
            Self::Floor { .. } => self.clone(),
            Self::Wildcard | Self::Ceiling { .. } => Self::Wildcard,
        }
    }

    /// Projection on the ceiling role: a ceiling stays itself, anything else is the wildcard.
    pub fn ceiling(&self) -> Self {
        match self {
            Self::Ceiling { .. } => self.clone(),
            Self::Wildcard | Self::Floor { .. } => Self::Wildcard,
        }
    }
}

impl<V: Ord> Bound<V> {
    /// Check if a version satisfies the constraint.
    pub fn check(&self, v: &V) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Floor { version, inclusive } => v > version || (*inclusive && v == version),
            Self::Ceiling { version, inclusive } => v < version || (*inclusive && v == version),
        }
    }

    /// Order bounds by version, then by operator (`>=` < `>` < `<` < `<=`).
    ///
    /// The wildcard is lower than any floor and higher than any ceiling,
    /// which makes this a total order among bounds of the same role:
    /// picking the lowest of several floors, or the highest of several ceilings.
    pub fn compare(&self, other: &Self) -> Ordering {
        cmp_bounds(self, other)
    }
}

// REPORT ######################################################################

impl<V: fmt::Display> fmt::Display for Bound<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.op(), self.version()) {
            (Some(op), Some(version)) => write!(f, "{op}{version}"),
            _ => write!(f, "*"),
        }
    }
}

/// Generate bounds over small versions, so that they often share a version.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl proptest::strategy::Strategy<Value = Bound<u32>> {
    use proptest::prelude::*;

    prop_oneof![
        1 => Just(Bound::Wildcard),
        6 => (0u32..10, any::<Op>()).prop_map(|(v, op)| Bound::from_op(op, v)),
    ]
}

// TESTS #######################################################################

#[cfg(test)]
pub mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn check_at_the_boundary() {
        assert!(Bound::greater_than_or_equal_to(2u32).check(&2));
        assert!(!Bound::greater_than(2u32).check(&2));
        assert!(!Bound::less_than(2u32).check(&2));
        assert!(Bound::less_than_or_equal_to(2u32).check(&2));
    }

    #[test]
    fn check_away_from_the_boundary() {
        assert!(Bound::greater_than(2u32).check(&3));
        assert!(!Bound::greater_than(2u32).check(&1));
        assert!(Bound::less_than(2u32).check(&1));
        assert!(!Bound::less_than(2u32).check(&3));
    }

    #[test]
    fn projections() {
        let floor = Bound::greater_than(1u32);
        let ceiling = Bound::less_than(1u32);
        assert_eq!(floor.floor(), floor);
        assert_eq!(floor.ceiling(), Bound::Wildcard);
        assert_eq!(ceiling.ceiling(), ceiling);
        assert_eq!(ceiling.floor(), Bound::Wildcard);
        assert_eq!(Bound::<u32>::Wildcard.floor(), Bound::Wildcard);
        assert_eq!(Bound::<u32>::Wildcard.ceiling(), Bound::Wildcard);
    }

    #[test]
    fn display() {
        assert_eq!(Bound::<u32>::wildcard().to_string(), "*");
        assert_eq!(Bound::greater_than_or_equal_to(1u32).to_string(), ">=1");
        assert_eq!(Bound::greater_than(1u32).to_string(), ">1");
        assert_eq!(Bound::less_than(1u32).to_string(), "<1");
        assert_eq!(Bound::less_than_or_equal_to(1u32).to_string(), "<=1");
    }

    proptest! {
        #[test]
        fn wildcard_matches_everything(version in any::<u32>()) {
            assert!(Bound::Wildcard.check(&version));
        }

        #[test]
        fn op_round_trip(bound in proptest_strategy()) {
            match (bound.op(), bound.version()) {
                (Some(op), Some(v)) => assert_eq!(Bound::from_op(op, *v), bound),
                _ => assert!(bound.is_wildcard()),
            }
        }

        #[test]
        fn compare_is_antisymmetric(b1 in proptest_strategy(), b2 in proptest_strategy()) {
            assert_eq!(b1.compare(&b2), b2.compare(&b1).reverse());
            assert_eq!(b1.compare(&b2) == Ordering::Equal, b1 == b2);
        }

        #[test]
        fn projections_keep_satisfaction(bound in proptest_strategy(), version in 0u32..10) {
            let projected = bound.floor().check(&version) && bound.ceiling().check(&version);
            assert_eq!(projected, bound.check(&version));
        }
    }
}
