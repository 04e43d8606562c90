// SPDX-License-Identifier: MPL-2.0

//! Ordering of bounds and the adjacency predicates shared by `and` and `compact`.

use std::cmp::Ordering;

use crate::bound::Bound;
use crate::interval::Interval;

/// Order two bounds.
///
/// Legend: `∗` is the wildcard, `[1` is `>=1`, `]1` is `>1`, `1[` is `<1`, `1]` is `<=1`.
///
/// ```text
/// left:   ∗          left:   ∗          left:   ]1         left:   1[
/// right:  [1         right:  1]         right:  [1         right:  1]
/// Less               Greater            Greater            Less
/// ```
///
/// The wildcard sits below every floor and above every ceiling, so the order is
/// total among floors and wildcards, and among ceilings and wildcards.
/// Mixing floors and ceilings with a wildcard is not transitive and never done.
pub(crate) fn cmp_bounds<V: Ord>(left: &Bound<V>, right: &Bound<V>) -> Ordering {
    match (left, right) {
        (Bound::Wildcard, Bound::Wildcard) => Ordering::Equal,
        (Bound::Wildcard, Bound::Floor { .. }) => Ordering::Less,
        (Bound::Wildcard, Bound::Ceiling { .. }) => Ordering::Greater,
        (Bound::Floor { .. }, Bound::Wildcard) => Ordering::Greater,
        (Bound::Ceiling { .. }, Bound::Wildcard) => Ordering::Less,
        (
            Bound::Floor { version: l, .. } | Bound::Ceiling { version: l, .. },
            Bound::Floor { version: r, .. } | Bound::Ceiling { version: r, .. },
        ) => l.cmp(r).then_with(|| left.op().cmp(&right.op())),
    }
}

/// Order two intervals by floor, then by ceiling.
pub(crate) fn cmp_intervals<V: Ord>(left: &Interval<V>, right: &Interval<V>) -> Ordering {
    cmp_bounds(left.floor(), right.floor()).then_with(|| cmp_bounds(left.ceiling(), right.ceiling()))
}

/// Smallest bound of the iterator, the first one wins ties.
pub(crate) fn min_bound<'a, V: Ord + 'a>(
    bounds: impl IntoIterator<Item = &'a Bound<V>>,
) -> Option<&'a Bound<V>> {
    bounds.into_iter().reduce(|min, b| {
        if cmp_bounds(b, min) == Ordering::Less {
            b
        } else {
            min
        }
    })
}

/// Largest bound of the iterator, the first one wins ties.
pub(crate) fn max_bound<'a, V: Ord + 'a>(
    bounds: impl IntoIterator<Item = &'a Bound<V>>,
) -> Option<&'a Bound<V>> {
    bounds.into_iter().reduce(|max, b| {
        if cmp_bounds(b, max) == Ordering::Greater {
            b
        } else {
            max
        }
    })
}

/// Tighter of two bounds playing the same role: the higher floor or the lower ceiling.
pub(crate) fn tighter<'a, V: Ord>(left: &'a Bound<V>, right: &'a Bound<V>) -> &'a Bound<V> {
    let keep_left = match cmp_bounds(left, right) {
        Ordering::Less => left.is_ceiling(),
        Ordering::Equal => true,
        Ordering::Greater => left.is_floor(),
    };
    if keep_left {
        left
    } else {
        right
    }
}

/// The end of `earlier` reaches past the start of `later`.
///
/// `earlier` must not start after `later`.
///
/// ```text
///  |----|             |----]
///     |-----|              [-----|
/// ```
pub(crate) fn overlap<V: Ord>(earlier: &Interval<V>, later: &Interval<V>) -> bool {
    match (earlier.ceiling(), later.floor()) {
        (Bound::Wildcard, _) | (_, Bound::Wildcard) => true,
        (
            Bound::Ceiling {
                version: end,
                inclusive: end_inclusive,
            },
            Bound::Floor {
                version: start,
                inclusive: start_inclusive,
            },
        ) => match end.cmp(start) {
            Ordering::Less => false,
            Ordering::Equal => *end_inclusive && *start_inclusive,
            Ordering::Greater => true,
        },
        // Interval construction keeps floors and ceilings in their slots.
        _ => false,
    }
}

/// `earlier` ends exactly where `later` starts, and the shared version belongs to
/// at least one of them, so nothing is missing in between.
///
/// ```text
/// True:       False:
///  |----]      |----[
///       ]---|       ]---|
/// ```
pub(crate) fn continuous<V: Ord>(earlier: &Interval<V>, later: &Interval<V>) -> bool {
    match (earlier.ceiling(), later.floor()) {
        (
            Bound::Ceiling {
                version: end,
                inclusive: end_inclusive,
            },
            Bound::Floor {
                version: start,
                inclusive: start_inclusive,
            },
        ) => end == start && (*end_inclusive || *start_inclusive),
        _ => false,
    }
}

/// Whether the union of two intervals is a single interval.
pub(crate) fn mergeable<V: Ord>(earlier: &Interval<V>, later: &Interval<V>) -> bool {
    overlap(earlier, later) || continuous(earlier, later)
}

/// A floor-less interval ending at `ceiling` and a ceiling-less interval starting at
/// `floor` cover every version together.
pub(crate) fn covers_everything<V: Ord>(ceiling: &Bound<V>, floor: &Bound<V>) -> bool {
    match (ceiling, floor) {
        (Bound::Wildcard, _) | (_, Bound::Wildcard) => true,
        (
            Bound::Ceiling {
                version: end,
                inclusive: end_inclusive,
            },
            Bound::Floor {
                version: start,
                inclusive: start_inclusive,
            },
        ) => match end.cmp(start) {
            Ordering::Less => false,
            Ordering::Equal => *end_inclusive || *start_inclusive,
            Ordering::Greater => true,
        },
        _ => false,
    }
}
