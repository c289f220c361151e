//! Dyno size categories.
//!
//! The set is closed: `X1`, `X2` and `PX` are the only sizes, and each
//! carries a fixed size code (`"1X"`, `"2X"`, `"PX"`). Strings only enter
//! through [`FromStr`], which is the one fallible path.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DynoSize {
    #[cfg_attr(feature = "serde", serde(rename = "1X"))]
    X1,
    #[cfg_attr(feature = "serde", serde(rename = "2X"))]
    X2,
    #[cfg_attr(feature = "serde", serde(rename = "PX"))]
    PX,
}

/// All dyno sizes, in declaration order.
pub const ALL_DYNO_SIZES: &[DynoSize] = &[DynoSize::X1, DynoSize::X2, DynoSize::PX];

impl DynoSize {
    /// The size code shown to users (`"1X"`, `"2X"`, `"PX"`).
    pub const fn size(self) -> &'static str {
        match self {
            DynoSize::X1 => "1X",
            DynoSize::X2 => "2X",
            DynoSize::PX => "PX",
        }
    }

    /// Variant name, e.g. `"X1"`.
    pub const fn name(self) -> &'static str {
        match self {
            DynoSize::X1 => "X1",
            DynoSize::X2 => "X2",
            DynoSize::PX => "PX",
        }
    }

    /// Exact, case-sensitive lookup by size code.
    pub fn from_size(code: &str) -> Option<DynoSize> {
        match code {
            "1X" => Some(DynoSize::X1),
            "2X" => Some(DynoSize::X2),
            "PX" => Some(DynoSize::PX),
            _ => None,
        }
    }

    /// Exact lookup by variant name.
    pub fn from_name(name: &str) -> Option<DynoSize> {
        match name {
            "X1" => Some(DynoSize::X1),
            "X2" => Some(DynoSize::X2),
            "PX" => Some(DynoSize::PX),
            _ => None,
        }
    }

    pub fn iter() -> impl Iterator<Item = DynoSize> {
        ALL_DYNO_SIZES.iter().copied()
    }
}

impl fmt::Display for DynoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.size())
    }
}

/// Input matched neither a size code nor a variant name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dyno size '{input}' (expected one of 1X, 2X, PX)")]
pub struct ParseDynoSizeError {
    pub input: String,
}

impl FromStr for DynoSize {
    type Err = ParseDynoSizeError;

    /// Codes win over names; `"PX"` is both and resolves the same either way.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DynoSize::from_size(s)
            .or_else(|| DynoSize::from_name(s))
            .ok_or_else(|| ParseDynoSizeError {
                input: s.to_string(),
            })
    }
}
