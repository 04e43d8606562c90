// SPDX-License-Identifier: MPL-2.0

//! A plain dotted numeric version, `major[.minor[.patch[.tweak]]]`.
//!
//! [`DottedVersion`] is the smallest version type that satisfies what the
//! `version-algebra` crate asks of a version: a total order and a canonical
//! short string form. Missing parts default to zero, so `2`, `2.0` and
//! `2.0.0.0` are the same version, and all of them display as `2`.
//!
//! ```
//! use dotted_version::DottedVersion;
//!
//! let v: DottedVersion = "v1.2.0".parse().unwrap();
//! assert_eq!(v, DottedVersion::new(1, 2, 0, 0));
//! assert_eq!(v.to_string(), "1.2");
//! assert_eq!(v.normalized(), "1.2.0.0");
//! ```
//!
//! Modifiers (`-beta`, `-RC1`, `-patch2`), date versions and branch names are
//! not understood; they are rejected with [`ParseError`].
//!
//! ## Optional features
//!
//! * `serde`: (de)serialization through the short string form.
//! * `proptest`: exports a proptest strategy for [`DottedVersion`].

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use thiserror::Error;

/// Version made of up to four numeric parts.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct DottedVersion {
    major: u64,
    minor: u64,
    patch: u64,
    tweak: u64,
}

/// Error creating a [DottedVersion] from a string.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// The string was empty once trimmed.
    #[error("version string is empty")]
    Empty,
    /// [DottedVersion] holds at most four parts.
    #[error("version {full_version} must contain 1 to 4 numbers separated by dot")]
    TooManyParts {
        /// Version string that was being parsed.
        full_version: String,
    },
    /// Wrapper around [ParseIntError](core::num::ParseIntError).
    #[error("cannot parse '{version_part}' in '{full_version}' as u64: {parse_error}")]
    ParseIntError {
        /// Version string that was being parsed.
        full_version: String,
        /// A version part where parsing failed.
        version_part: String,
        /// A specific error resulted from parsing a part of the version as [u64].
        parse_error: String,
    },
}

// Constructors
impl DottedVersion {
    /// Create a version from its four parts.
    pub fn new(major: u64, minor: u64, patch: u64, tweak: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            tweak,
        }
    }

    /// Version with only a major part, `major.0.0.0`.
    pub fn major(major: u64) -> Self {
        Self::new(major, 0, 0, 0)
    }

    /// Version 0.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Full four-part form, `1.2.0.0`.
    pub fn normalized(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.tweak
        )
    }
}

impl FromStr for DottedVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let parse_part = |part: &str| {
            part.parse::<u64>().map_err(|e| ParseError::ParseIntError {
                full_version: s.to_string(),
                version_part: part.to_string(),
                parse_error: e.to_string(),
            })
        };

        let mut parts = [0u64; 4];
        for (idx, part) in trimmed.split('.').enumerate() {
            if idx >= parts.len() {
                return Err(ParseError::TooManyParts {
                    full_version: s.to_string(),
                });
            }
            parts[idx] = parse_part(part)?;
        }
        let [major, minor, patch, tweak] = parts;
        Ok(Self::new(major, minor, patch, tweak))
    }
}

// Convert a single number into a major-only version.
impl From<u64> for DottedVersion {
    fn from(major: u64) -> Self {
        Self::major(major)
    }
}

// Convert a tuple (major, minor, patch) into a version.
impl From<(u64, u64, u64)> for DottedVersion {
    fn from(tuple: (u64, u64, u64)) -> Self {
        let (major, minor, patch) = tuple;
        Self::new(major, minor, patch, 0)
    }
}

/// The short form: trailing zero parts are dropped, but the major part always stays.
impl Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [self.major, self.minor, self.patch, self.tweak];
        let len = parts.iter().rposition(|p| *p != 0).map_or(1, |i| i + 1);
        for (idx, part) in parts[..len].iter().enumerate() {
            if idx > 0 {
                write!(f, ".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl serde::Serialize for DottedVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DottedVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Generate small versions, so that generated constraints often share boundaries.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = DottedVersion> {
    (0u64..6, 0u64..3, 0u64..3).prop_map(|(major, minor, patch)| {
        DottedVersion::new(major, minor, patch, 0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fills_missing_parts() {
        assert_eq!("1".parse(), Ok(DottedVersion::new(1, 0, 0, 0)));
        assert_eq!("1.2".parse(), Ok(DottedVersion::new(1, 2, 0, 0)));
        assert_eq!(" v1.2.3.4 ".parse(), Ok(DottedVersion::new(1, 2, 3, 4)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<DottedVersion>(), Err(ParseError::Empty));
        assert_eq!("v".parse::<DottedVersion>(), Err(ParseError::Empty));
        assert!(matches!(
            "1.2.3.4.5".parse::<DottedVersion>(),
            Err(ParseError::TooManyParts { .. })
        ));
        assert!(matches!(
            "1.x".parse::<DottedVersion>(),
            Err(ParseError::ParseIntError { version_part, .. }) if version_part == "x"
        ));
        assert!(matches!(
            "1.0-beta".parse::<DottedVersion>(),
            Err(ParseError::ParseIntError { .. })
        ));
    }

    #[test]
    fn short_form() {
        assert_eq!(DottedVersion::zero().to_string(), "0");
        assert_eq!(DottedVersion::major(2).to_string(), "2");
        assert_eq!(DottedVersion::new(1, 0, 3, 0).to_string(), "1.0.3");
        assert_eq!(DottedVersion::new(0, 0, 0, 7).to_string(), "0.0.0.7");
    }

    #[test]
    fn ordering_is_numeric() {
        let mut versions: Vec<DottedVersion> = ["10", "9.1", "9", "1.10", "1.9.9.9"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, ["1.9.9.9", "1.10", "9", "9.1", "10"]);
    }

    proptest! {
        #[test]
        fn short_form_parses_back(version in proptest_strategy()) {
            assert_eq!(version.to_string().parse::<DottedVersion>(), Ok(version));
        }
    }
}
