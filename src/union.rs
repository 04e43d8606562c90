// SPDX-License-Identifier: MPL-2.0

//! Unions (logical OR) of intervals, and their compaction.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::internal::order::{cmp_bounds, covers_everything, mergeable};
use crate::interval::Interval;
use crate::version::Version;

/// Intervals of which at least one must be satisfied.
///
/// A union keeps its intervals as given; [compact](Union::compact) computes the
/// smallest equivalent union.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "V: Ord + serde::Deserialize<'de>"))
)]
pub struct Union<V> {
    intervals: SmallVec<[Interval<V>; 2]>,
}

impl<V> Union<V> {
    /// Union of no interval, satisfied by no version.
    pub fn empty() -> Self {
        Self {
            intervals: SmallVec::new(),
        }
    }

    /// Whether the union has no interval.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Iterate over the intervals, in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<V>> {
        self.intervals.iter()
    }

    /// Intervals as a slice.
    pub fn as_slice(&self) -> &[Interval<V>] {
        &self.intervals
    }
}

impl<V: Version> Union<V> {
    /// Returns true if any interval contains the version.
    pub fn check(&self, v: &V) -> bool {
        self.intervals.iter().any(|interval| interval.check(v))
    }

    /// Returns the smallest union satisfied by exactly the same versions.
    ///
    /// The intervals of the result are sorted by floor, and no two of them
    /// overlap or touch. Two intervals touch when one ends at the version where
    /// the other starts and that version belongs to at least one of them:
    /// `<=2 || >2` is `*`, while `<2 || >2` stays as it is.
    ///
    /// ```
    /// # use version_algebra::{must_and, Bound, Interval, Union};
    /// let union: Union<u32> = [
    ///     must_and(&[Bound::greater_than(1), Bound::less_than(2)]),
    ///     must_and(&[Bound::greater_than(3), Bound::less_than(5)]),
    ///     must_and(&[Bound::greater_than(4), Bound::less_than(6)]),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(union.compact().to_string(), ">1 <2 || >3 <6");
    ///
    /// let union: Union<u32> = [Bound::less_than(3u32), Bound::greater_than(2)]
    ///     .into_iter()
    ///     .map(Interval::from)
    ///     .collect();
    /// assert_eq!(union.compact().to_string(), "*");
    /// ```
    pub fn compact(&self) -> Self {
        match self.intervals.as_slice() {
            [] => return Self::empty(),
            [_] => return self.clone(),
            _ => {}
        }
        if let Some(wildcard) = self.intervals.iter().find(|i| i.is_wildcard()) {
            return Self::from(wildcard.clone());
        }

        // The ceiling-less interval reaching lowest and the floor-less one reaching highest
        // cover every other ceiling-less or floor-less interval.
        let tail = self
            .intervals
            .iter()
            .filter(|i| i.is_ceilingless())
            .reduce(|min, i| match cmp_bounds(i.floor(), min.floor()) {
                Ordering::Less => i,
                Ordering::Equal | Ordering::Greater => min,
            });
        let head = self
            .intervals
            .iter()
            .filter(|i| i.is_floorless())
            .reduce(|max, i| match cmp_bounds(i.ceiling(), max.ceiling()) {
                Ordering::Greater => i,
                Ordering::Equal | Ordering::Less => max,
            });

        if let (Some(head), Some(tail)) = (head, tail) {
            if covers_everything(head.ceiling(), tail.floor()) {
                log::debug!("{head} and {tail} cover every version");
                return Self::from(Interval::wildcard());
            }
        }

        // Keep the two-sided intervals reaching outside of the head and the tail.
        let mut bounded: SmallVec<[&Interval<V>; 8]> = self
            .intervals
            .iter()
            .filter(|i| !i.is_floorless() && !i.is_ceilingless())
            .filter(|i| tail.map_or(true, |t| cmp_bounds(t.floor(), i.floor()) == Ordering::Greater))
            .filter(|i| head.map_or(true, |h| cmp_bounds(h.ceiling(), i.ceiling()) == Ordering::Less))
            .collect();
        bounded.sort();
        bounded.dedup();

        // The head has the lowest floor and the tail the highest, the rest is sorted in between.
        let mut sorted = head.into_iter().chain(bounded).chain(tail);
        let mut merged: SmallVec<[Interval<V>; 2]> = SmallVec::new();
        if let Some(first) = sorted.next() {
            let mut pending = first.clone();
            for next in sorted {
                if mergeable(&pending, next) {
                    log::trace!("merging {pending} with {next}");
                    pending = merge(pending, next);
                } else {
                    merged.push(std::mem::replace(&mut pending, next.clone()));
                }
            }
            merged.push(pending);
        }

        log::debug!(
            "compacted {} intervals into {}",
            self.intervals.len(),
            merged.len()
        );
        Self { intervals: merged }.check_invariants()
    }

    fn check_invariants(self) -> Self {
        if cfg!(debug_assertions) {
            for pair in self.intervals.windows(2) {
                assert!(pair[0] < pair[1], "{} is not before {}", pair[0], pair[1]);
                assert!(
                    !mergeable(&pair[0], &pair[1]),
                    "{} and {} should have been merged",
                    pair[0],
                    pair[1]
                );
            }
        }
        self
    }
}

/// Merge `next` into `pending`, which starts no later and overlaps or touches it.
fn merge<V: Version>(pending: Interval<V>, next: &Interval<V>) -> Interval<V> {
    let (floor, ceiling) = pending.into_bounds();
    let ceiling = match cmp_bounds(&ceiling, next.ceiling()) {
        Ordering::Less => next.ceiling().clone(),
        Ordering::Equal | Ordering::Greater => ceiling,
    };
    Interval::from_parts_unchecked(floor, ceiling)
}

impl<V> From<Interval<V>> for Union<V> {
    fn from(interval: Interval<V>) -> Self {
        Self {
            intervals: smallvec::smallvec![interval],
        }
    }
}

impl<V> From<Vec<Interval<V>>> for Union<V> {
    fn from(intervals: Vec<Interval<V>>) -> Self {
        Self {
            intervals: SmallVec::from_vec(intervals),
        }
    }
}

impl<V> FromIterator<Interval<V>> for Union<V> {
    fn from_iter<I: IntoIterator<Item = Interval<V>>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a Union<V> {
    type Item = &'a Interval<V>;
    type IntoIter = std::slice::Iter<'a, Interval<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

// REPORT ######################################################################

impl<V: Version> fmt::Display for Union<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                write!(f, " || ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

/// Generate unions of up to eight random intervals.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl proptest::strategy::Strategy<Value = Union<u32>> {
    use proptest::prelude::*;

    prop::collection::vec(crate::interval::proptest_strategy(), 0..8).prop_map(Union::from)
}

// TESTS #######################################################################

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::bound::Bound;
    use proptest::prelude::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn between(floor: Bound<u32>, ceiling: Bound<u32>) -> Interval<u32> {
        Interval::new(floor, ceiling).unwrap()
    }

    fn union(intervals: impl IntoIterator<Item = Interval<u32>>) -> Union<u32> {
        intervals.into_iter().collect()
    }

    #[test]
    fn trivial_unions() {
        assert_eq!(Union::<u32>::empty().compact(), Union::empty());
        let single = union([between(Bound::greater_than(6), Bound::less_than(7))]);
        assert_eq!(single.compact(), single);
    }

    #[test]
    fn wildcard_trumps_everything_else() {
        init_log();
        let u = union([
            Interval::from(Bound::less_than(1)),
            Interval::from(Bound::greater_than_or_equal_to(3)),
            Interval::exact(5),
            between(Bound::greater_than(6), Bound::less_than(7)),
            Interval::wildcard(),
        ]);
        assert_eq!(u.compact(), Union::from(Interval::wildcard()));
    }

    #[test]
    fn head_and_tail_sharing_a_version() {
        init_log();
        let render = |ceiling: Bound<u32>, floor: Bound<u32>| {
            union([Interval::from(floor), Interval::from(ceiling)])
                .compact()
                .to_string()
        };
        assert_eq!(render(Bound::less_than_or_equal_to(10), Bound::greater_than_or_equal_to(10)), "*");
        assert_eq!(render(Bound::less_than(10), Bound::greater_than_or_equal_to(10)), "*");
        assert_eq!(render(Bound::less_than_or_equal_to(10), Bound::greater_than(10)), "*");
        assert_eq!(render(Bound::less_than(10), Bound::greater_than(10)), "<10 || >10");
    }

    #[test]
    fn shared_boundary_between_two_sided_intervals() {
        let render = |ceiling: Bound<u32>, floor: Bound<u32>| {
            union([
                between(floor, Bound::less_than(9)),
                between(Bound::greater_than(1), ceiling),
            ])
            .compact()
            .to_string()
        };
        assert_eq!(render(Bound::less_than_or_equal_to(5), Bound::greater_than_or_equal_to(5)), ">1 <9");
        assert_eq!(render(Bound::less_than(5), Bound::greater_than_or_equal_to(5)), ">1 <9");
        assert_eq!(render(Bound::less_than_or_equal_to(5), Bound::greater_than(5)), ">1 <9");
        assert_eq!(render(Bound::less_than(5), Bound::greater_than(5)), ">1 <5 || >5 <9");
    }

    #[test]
    fn exact_versions_fill_gaps() {
        let u = union([
            between(Bound::greater_than(5), Bound::less_than(9)),
            Interval::exact(5),
            between(Bound::greater_than(1), Bound::less_than(5)),
        ]);
        assert_eq!(u.compact().to_string(), ">1 <9");
    }

    #[test]
    fn nested_intervals() {
        let u = union([
            between(Bound::greater_than(2), Bound::less_than(3)),
            between(Bound::greater_than_or_equal_to(1), Bound::less_than_or_equal_to(8)),
            Interval::exact(8),
            Interval::exact(4),
        ]);
        assert_eq!(u.compact().to_string(), ">=1 <=8");
    }

    #[test]
    fn head_and_tail_absorb_what_they_cover() {
        let u = union([
            between(Bound::greater_than(8), Bound::less_than(9)),
            Interval::from(Bound::less_than(1)),
            between(Bound::greater_than(1), Bound::less_than(2)),
            Interval::from(Bound::less_than(3)),
            between(Bound::greater_than(4), Bound::less_than(5)),
            between(Bound::greater_than_or_equal_to(4), Bound::less_than(6)),
            Interval::from(Bound::greater_than(7)),
            Interval::from(Bound::greater_than(10)),
        ]);
        assert_eq!(u.compact().to_string(), "<3 || >=4 <6 || >7");
    }

    #[test]
    fn head_and_tail_grow_through_merges() {
        let u = union([
            Interval::from(Bound::greater_than(7)),
            between(Bound::greater_than_or_equal_to(3), Bound::less_than_or_equal_to(7)),
            Interval::from(Bound::less_than(2)),
            between(Bound::greater_than_or_equal_to(2), Bound::less_than(3)),
        ]);
        assert_eq!(u.compact().to_string(), "*");
    }

    #[test]
    fn display() {
        let u = union([
            between(Bound::greater_than(1), Bound::less_than(2)),
            Interval::exact(3),
            Interval::from(Bound::greater_than_or_equal_to(4)),
        ]);
        assert_eq!(u.to_string(), ">1 <2 || 3 || >=4");
        assert_eq!(Union::<u32>::empty().to_string(), "");
    }

    #[test]
    fn empty_union_matches_nothing() {
        assert!(!Union::<u32>::empty().check(&0));
    }

    proptest! {

        // Testing compact ---------------------------------

        #[test]
        fn compact_is_equivalent(u in proptest_strategy(), version in 0u32..12) {
            assert_eq!(u.compact().check(&version), u.check(&version));
        }

        #[test]
        fn compact_is_idempotent(u in proptest_strategy()) {
            assert_eq!(u.compact().compact(), u.compact());
        }

        #[test]
        fn compact_ignores_order(u in proptest_strategy()) {
            let mut reversed: Vec<_> = u.iter().cloned().collect();
            reversed.reverse();
            assert_eq!(Union::from(reversed).compact(), u.compact());
        }

        #[test]
        fn compact_absorbs_duplicates(u in proptest_strategy()) {
            let doubled: Union<u32> = u.iter().chain(u.iter()).cloned().collect();
            assert_eq!(doubled.compact(), u.compact());
        }

        #[test]
        fn compact_never_grows(u in proptest_strategy()) {
            assert!(u.compact().len() <= u.len());
        }

        #[cfg(feature = "serde")]
        #[test]
        fn serde_round_trip(u in proptest_strategy()) {
            let s = ron::ser::to_string(&u).unwrap();
            let r: Union<u32> = ron::de::from_str(&s).unwrap();
            assert_eq!(u, r);
        }
    }
}
