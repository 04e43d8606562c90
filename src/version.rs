// SPDX-License-Identifier: MPL-2.0

//! Trait for the versions constrained by bounds.
//! Automatically implemented for types implementing Clone + Ord + Debug + Display.

use std::fmt::{Debug, Display};

/// Versions are totally ordered and know how to print their short canonical form.
///
/// The algebra never parses versions, it only compares and prints them,
/// so `u32` works just as well as a full semantic version type.
/// The [Display] implementation is used verbatim when rendering constraints,
/// e.g. a version displayed as `2` makes `>=2 <3`.
pub trait Version: Clone + Ord + Debug + Display {}

/// Automatically implement the Version trait for any type
/// that already implement Clone + Ord + Debug + Display.
impl<T: Clone + Ord + Debug + Display> Version for T {}
