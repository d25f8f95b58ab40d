//! Validated multiplication operands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Smallest table or multiplier taught.
pub const MIN_OPERAND: u8 = 1;

/// Largest table or multiplier taught.
pub const MAX_OPERAND: u8 = 10;

/// The fixed multiplicand whose facts are being taught (1–10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Table(u8);

/// The second operand of a fact (1–10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Multiplier(u8);

fn in_range(value: u32) -> bool {
    (u32::from(MIN_OPERAND)..=u32::from(MAX_OPERAND)).contains(&value)
}

impl Table {
    /// Create a table, rejecting values outside 1–10.
    pub fn new(value: u32) -> Result<Self> {
        if in_range(value) {
            Ok(Self(value as u8))
        } else {
            Err(ModelError::TableOutOfRange(value))
        }
    }

    /// The table the app opens on.
    pub const fn default_selection() -> Self {
        Self(2)
    }

    /// Numeric value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// All ten tables in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_OPERAND..=MAX_OPERAND).map(Self)
    }
}

impl Multiplier {
    /// Create a multiplier, rejecting values outside 1–10.
    pub fn new(value: u32) -> Result<Self> {
        if in_range(value) {
            Ok(Self(value as u8))
        } else {
            Err(ModelError::MultiplierOutOfRange(value))
        }
    }

    /// Create a multiplier, pulling out-of-range values to the nearest end.
    pub const fn clamped(value: u32) -> Self {
        if value < MIN_OPERAND as u32 {
            Self(MIN_OPERAND)
        } else if value > MAX_OPERAND as u32 {
            Self(MAX_OPERAND)
        } else {
            Self(value as u8)
        }
    }

    /// Numeric value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// All ten multipliers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_OPERAND..=MAX_OPERAND).map(Self)
    }
}

macro_rules! operand_conversions {
    ($ty:ident) => {
        impl TryFrom<u8> for $ty {
            type Error = ModelError;

            fn try_from(value: u8) -> Result<Self> {
                Self::new(u32::from(value))
            }
        }

        impl TryFrom<u32> for $ty {
            type Error = ModelError;

            fn try_from(value: u32) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self> {
                let trimmed = s.trim();
                let value: u32 = trimmed
                    .parse()
                    .map_err(|_| ModelError::NotANumber(trimmed.to_string()))?;
                Self::new(value)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

operand_conversions!(Table);
operand_conversions!(Multiplier);
