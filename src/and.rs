// SPDX-License-Identifier: MPL-2.0

//! Intersection (logical AND) of any number of bounds.

use smallvec::SmallVec;

use crate::bound::Bound;
use crate::error::AlgebraError;
use crate::internal::order::{max_bound, min_bound};
use crate::interval::Interval;
use crate::version::Version;

/// Intersect bounds into the single interval satisfied by every one of them.
///
/// Wildcards are ignored. The lowest ceiling and the highest floor decide the
/// result, so the order of the bounds and repeated bounds make no difference.
///
/// ```
/// # use version_algebra::{and, AlgebraError, Bound};
/// let interval = and(&[Bound::greater_than_or_equal_to(2u32), Bound::less_than(3)]).unwrap();
/// assert_eq!(interval.to_string(), ">=2 <3");
///
/// let exact = and(&[Bound::greater_than_or_equal_to(2u32), Bound::less_than_or_equal_to(2)]).unwrap();
/// assert_eq!(exact.to_string(), "2");
///
/// let impossible = and(&[Bound::greater_than_or_equal_to(3u32), Bound::less_than(2)]);
/// assert_eq!(impossible, Err(AlgebraError::ImpossibleInterval));
/// ```
pub fn and<V: Version>(bounds: &[Bound<V>]) -> Result<Interval<V>, AlgebraError> {
    if bounds.is_empty() {
        return Err(AlgebraError::NoEndlessGiven);
    }

    let bounded: SmallVec<[&Bound<V>; 4]> = bounds.iter().filter(|b| !b.is_wildcard()).collect();
    match bounded.as_slice() {
        [] => return Ok(Interval::wildcard()),
        [single] => return Ok(Interval::from((*single).clone())),
        _ => {}
    }

    let ceiling = min_bound(bounded.iter().copied().filter(|b| b.is_ceiling()));
    let floor = max_bound(bounded.iter().copied().filter(|b| b.is_floor()));

    match (floor, ceiling) {
        (None, None) => {
            log::error!("no floor nor ceiling among {} non-wildcard bounds", bounded.len());
            Err(AlgebraError::UnexpectedAndLogic)
        }
        (Some(floor), None) => Ok(Interval::from(floor.clone())),
        (None, Some(ceiling)) => Ok(Interval::from(ceiling.clone())),
        (Some(floor), Some(ceiling)) => {
            Interval::new(floor.clone(), ceiling.clone()).inspect_err(|_| {
                log::debug!("{floor} and {ceiling} can never be satisfied together");
            })
        }
    }
}

/// Like [and], but panics if the bounds can not be intersected.
///
/// Meant for constraints known to be valid, such as literals in tests.
pub fn must_and<V: Version>(bounds: &[Bound<V>]) -> Interval<V> {
    match and(bounds) {
        Ok(interval) => interval,
        Err(err) => panic!("cannot intersect {} bounds: {err}", bounds.len()),
    }
}

// TESTS #######################################################################
