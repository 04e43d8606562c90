// SPDX-License-Identifier: MPL-2.0

//! Intervals are the intersection (logical AND) of a floor and a ceiling.
//!
//! Either side may be the wildcard, so an interval is one of:
//!  - [wildcard()](Interval::wildcard): every version, written `*`
//!  - a single bound, e.g. `>=2` or `<3`
//!  - [exact(v)](Interval::exact): only the version v, written `v`
//!  - a floor and a ceiling, e.g. `>=2 <3`

use std::cmp::Ordering;
use std::fmt;

use crate::bound::Bound;
use crate::error::AlgebraError;
use crate::internal::order::{cmp_bounds, cmp_intervals, tighter};
use crate::version::Version;

/// A floor and a ceiling, both satisfied by a version of the interval.
///
/// The floor slot only ever holds a [Floor](Bound::Floor) or the wildcard, the
/// ceiling slot a [Ceiling](Bound::Ceiling) or the wildcard, and at least one
/// version satisfies both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<V> {
    floor: Bound<V>,
    ceiling: Bound<V>,
}

impl<V> Interval<V> {
    /// Set of all possible versions.
    pub fn wildcard() -> Self {
        Self {
            floor: Bound::Wildcard,
            ceiling: Bound::Wildcard,
        }
    }

    /// Lower side of the interval.
    pub fn floor(&self) -> &Bound<V> {
        &self.floor
    }

    /// Upper side of the interval.
    pub fn ceiling(&self) -> &Bound<V> {
        &self.ceiling
    }

    /// Both sides are the wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.floor.is_wildcard() && self.ceiling.is_wildcard()
    }

    /// Nothing bounds the interval from below, e.g. `<3`.
    pub fn is_floorless(&self) -> bool {
        self.floor.is_wildcard()
    }

    /// Nothing bounds the interval from above, e.g. `>=2`.
    pub fn is_ceilingless(&self) -> bool {
        self.ceiling.is_wildcard()
    }

    /// Split into floor and ceiling.
    pub fn into_bounds(self) -> (Bound<V>, Bound<V>) {
        (self.floor, self.ceiling)
    }

    /// Assemble an interval the caller already knows to be valid.
    pub(crate) fn from_parts_unchecked(floor: Bound<V>, ceiling: Bound<V>) -> Self {
        debug_assert!(!floor.is_ceiling(), "ceiling in the floor slot");
        debug_assert!(!ceiling.is_floor(), "floor in the ceiling slot");
        Self { floor, ceiling }
    }
}

impl<V: Clone> Interval<V> {
    /// Set containing exactly one version, `>=v <=v`.
    pub fn exact(v: V) -> Self {
        Self {
            floor: Bound::greater_than_or_equal_to(v.clone()),
            ceiling: Bound::less_than_or_equal_to(v),
        }
    }
}

impl<V: Ord> Interval<V> {
    /// Intersection of two bounds.
    ///
    /// The bounds may come in any order and play any role. Two floors or two
    /// ceilings keep the tighter one. A floor and a ceiling that no version
    /// satisfies together, such as `>=3` and `<2` or `>2` and `<=2`, give
    /// [ImpossibleInterval](AlgebraError::ImpossibleInterval).
    pub fn new(a: Bound<V>, b: Bound<V>) -> Result<Self, AlgebraError> {
        let (a, b) = match cmp_bounds(&a, &b) {
            Ordering::Greater => (b, a),
            Ordering::Less | Ordering::Equal => (a, b),
        };

        match (a, b) {
            (Bound::Wildcard, Bound::Wildcard) => Ok(Self::wildcard()),
            (Bound::Wildcard, bound) | (bound, Bound::Wildcard) => Ok(Self::from(bound)),
            (a, b) if a == b => Ok(Self::from(a)),
            (a, b) if a.is_floor() == b.is_floor() => {
                let keep_a = std::ptr::eq(tighter(&a, &b), &a);
                Ok(Self::from(if keep_a { a } else { b }))
            }
            (a, b) => {
                let (floor, ceiling) = if a.is_floor() { (a, b) } else { (b, a) };
                let satisfiable = match (floor.version(), ceiling.version()) {
                    (Some(f), Some(c)) => floor.check(c) && ceiling.check(f),
                    _ => true,
                };
                if satisfiable {
                    Ok(Self { floor, ceiling })
                } else {
                    Err(AlgebraError::ImpossibleInterval)
                }
            }
        }
    }

    /// Check if a version satisfies both the floor and the ceiling.
    pub fn check(&self, v: &V) -> bool {
        self.floor.check(v) && self.ceiling.check(v)
    }

    /// If the interval contains exactly a single version, return it, otherwise, return [None].
    pub fn as_exact(&self) -> Option<&V> {
        match (&self.floor, &self.ceiling) {
            (
                Bound::Floor {
                    version: f,
                    inclusive: true,
                },
                Bound::Ceiling {
                    version: c,
                    inclusive: true,
                },
            ) if f == c => Some(f),
            _ => None,
        }
    }
}

/// A lone bound is the interval it delimits on one side.
impl<V> From<Bound<V>> for Interval<V> {
    fn from(bound: Bound<V>) -> Self {
        match bound {
            Bound::Wildcard => Self::wildcard(),
            floor @ Bound::Floor { .. } => Self {
                floor,
                ceiling: Bound::Wildcard,
            },
            ceiling @ Bound::Ceiling { .. } => Self {
                floor: Bound::Wildcard,
                ceiling,
            },
        }
    }
}

/// Intervals sort by floor, then by ceiling.
impl<V: Ord> Ord for Interval<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_intervals(self, other)
    }
}

impl<V: Ord> PartialOrd for Interval<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// REPORT ######################################################################

impl<V: Version> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = self.as_exact() {
            return write!(f, "{v}");
        }
        match (&self.floor, &self.ceiling) {
            (Bound::Wildcard, Bound::Wildcard) => write!(f, "*"),
            (bound, Bound::Wildcard) | (Bound::Wildcard, bound) => write!(f, "{bound}"),
            (floor, ceiling) => write!(f, "{floor} {ceiling}"),
        }
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Interval<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(&self.floor, &self.ceiling), serializer)
    }
}

/// Deserialization goes through [Interval::new], so that invalid pairs are rejected.
#[cfg(feature = "serde")]
impl<'de, V: Ord + serde::Deserialize<'de>> serde::Deserialize<'de> for Interval<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (floor, ceiling): (Bound<V>, Bound<V>) =
            serde::Deserialize::deserialize(deserializer)?;
        Interval::new(floor, ceiling).map_err(serde::de::Error::custom)
    }
}

/// Generate valid intervals by intersecting two random bounds.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl proptest::strategy::Strategy<Value = Interval<u32>> {
    use proptest::prelude::*;

    (
        crate::bound::proptest_strategy(),
        crate::bound::proptest_strategy(),
    )
        .prop_filter_map("impossible interval", |(a, b)| Interval::new(a, b).ok())
}

// TESTS #######################################################################
