//! Packed version numbers.
//!
//! A version has up to four components, most significant first, each in
//! `0..=255`. Component `i` lives at bit offset `8 * (3 - i)` of a `u32`, so
//! `"2.1.3"` packs as `2 << 24 | 1 << 16 | 3 << 8`. Missing trailing
//! components are zero.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Maximum number of components in a version.
pub const MAX_COMPONENTS: usize = 4;

/// A version component or component count outside the packable range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("version component {index} is {value}, expected a value in 0..=255")]
    ComponentOutOfRange { index: usize, value: i64 },

    #[error("version has {count} components, at most 4 are allowed")]
    TooManyComponents { count: usize },

    #[error("version has no components")]
    Empty,
}

/// Failure to parse a dotted version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("invalid version component '{component}' in '{input}'")]
    InvalidComponent { input: String, component: String },

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Pack up to four components into a `u32`.
///
/// ```
/// assert_eq!(blobgen_core::encode(&[2, 1, 3]).unwrap(), 0x0201_0300);
/// ```
pub fn encode(components: &[i64]) -> Result<u32, RangeError> {
    if components.is_empty() {
        return Err(RangeError::Empty);
    }
    if components.len() > MAX_COMPONENTS {
        return Err(RangeError::TooManyComponents {
            count: components.len(),
        });
    }

    let mut packed = 0u32;
    for (index, &value) in components.iter().enumerate() {
        let byte = u8::try_from(value)
            .map_err(|_| RangeError::ComponentOutOfRange { index, value })?;
        packed |= u32::from(byte) << (8 * (3 - index));
    }
    Ok(packed)
}

/// Unpack a `u32` into `(major, minor, patch, build)`. Total over `u32`.
pub fn decode(packed: u32) -> (u8, u8, u8, u8) {
    let [major, minor, patch, build] = packed.to_be_bytes();
    (major, minor, patch, build)
}

/// A settings version, ordered like its packed representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u8,
    minor: u8,
    patch: u8,
    build: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8, patch: u8, build: u8) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Build a version from 1 to 4 components.
    pub fn from_components(components: &[i64]) -> Result<Self, RangeError> {
        encode(components).map(Self::from_packed)
    }

    pub fn from_packed(packed: u32) -> Self {
        let (major, minor, patch, build) = decode(packed);
        Self::new(major, minor, patch, build)
    }

    /// The `u32` stored in the `version` field of a settings blob.
    pub fn packed(&self) -> u32 {
        u32::from_be_bytes([self.major, self.minor, self.patch, self.build])
    }

    pub fn components(&self) -> (u8, u8, u8, u8) {
        (self.major, self.minor, self.patch, self.build)
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    pub fn build(&self) -> u8 {
        self.build
    }
}

impl TryFrom<String> for Version {
    type Error = ParseVersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    /// Always prints `major.minor`; patch and build only when needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch != 0 || self.build != 0 {
            write!(f, ".{}", self.patch)?;
        }
        if self.build != 0 {
            write!(f, ".{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| {
                let invalid = || ParseVersionError::InvalidComponent {
                    input: s.to_string(),
                    component: part.to_string(),
                };
                // Plain ASCII digits only: no sign, no whitespace.
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<i64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_components(&components)?)
    }
}
