// SPDX-License-Identifier: MPL-2.0

//! Boolean algebra of version constraints.
//!
//! Dependency resolvers decide whether a package version is compatible by checking it
//! against constraints such as `>=1.2 <2 || >=3`. This crate represents those
//! constraints and normalizes them. It never parses or resolves anything.
//!
//! # Building blocks
//!
//! - [Bound]: a one-sided constraint, `>=v`, `>v`, `<v` or `<=v`, or the wildcard `*`.
//! - [Interval]: the intersection (logical AND) of a floor and a ceiling, e.g. `>=1.2 <2`.
//!   An interval whose floor and ceiling are both inclusive at the same version
//!   is an exact constraint, written as the bare version.
//! - [Union]: any number of intervals, of which at least one must hold (logical OR).
//!
//! # Version trait
//!
//! All the types are generic over the version they constrain.
//! Our [Version] trait requires `Clone + Ord + Debug + Display`
//! and is automatically implemented for any such type, so `u32` works out of the box.
//! The [Display](std::fmt::Display) implementation is expected to be the short,
//! canonical form of the version, since it is used verbatim when rendering constraints.
//!
//! # Intersection
//!
//! [and] intersects any number of bounds into the single interval they describe:
//!
//! ```
//! use version_algebra::{and, AlgebraError, Bound};
//!
//! let interval = and(&[
//!     Bound::greater_than_or_equal_to(2u32),
//!     Bound::less_than(3),
//!     Bound::wildcard(),
//! ])
//! .unwrap();
//! assert_eq!(interval.to_string(), ">=2 <3");
//! assert!(interval.check(&2));
//! assert!(!interval.check(&3));
//!
//! let impossible = and(&[Bound::greater_than_or_equal_to(3u32), Bound::less_than(2)]);
//! assert_eq!(impossible, Err(AlgebraError::ImpossibleInterval));
//! ```
//!
//! # Compaction
//!
//! [Union::compact] reduces a union to the smallest union satisfied by exactly the
//! same versions. Its intervals are sorted, and never overlap nor touch each other.
//!
//! ```
//! use version_algebra::{must_and, Bound, Interval, Union};
//!
//! let union: Union<u32> = vec![
//!     Interval::from(Bound::less_than(1)),
//!     must_and(&[Bound::greater_than(1), Bound::less_than(2)]),
//!     Interval::from(Bound::less_than(3)),
//!     must_and(&[Bound::greater_than(4), Bound::less_than(5)]),
//!     must_and(&[Bound::greater_than_or_equal_to(4), Bound::less_than(6)]),
//!     Interval::from(Bound::greater_than(7)),
//!     must_and(&[Bound::greater_than(8), Bound::less_than(9)]),
//!     Interval::from(Bound::greater_than(10)),
//! ]
//! .into();
//! assert_eq!(
//!     union.to_string(),
//!     "<1 || >1 <2 || <3 || >4 <5 || >=4 <6 || >7 || >8 <9 || >10"
//! );
//! assert_eq!(union.compact().to_string(), "<3 || >=4 <6 || >7");
//! ```
//!
//! # Errors
//!
//! Contradictory bounds are reported as [AlgebraError::ImpossibleInterval].
//! The algebra has no state, so an error only concerns the computation that returned it.
//!
//! ## Optional features
//!
//! * `serde`: serialization and deserialization of bounds, intervals and unions, given that
//!   the version type also supports it. Deserialized intervals are validated.
//! * `proptest`: exports proptest strategies generating bounds, intervals and unions of `u32`.

#![warn(missing_docs)]

pub mod and;
pub mod bound;
pub mod error;
pub mod interval;
pub mod op;
pub mod union;
pub mod version;

mod internal;

pub use and::{and, must_and};
pub use bound::Bound;
pub use error::AlgebraError;
pub use interval::Interval;
pub use op::Op;
pub use union::Union;
pub use version::Version;
