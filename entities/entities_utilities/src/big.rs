//! Big Number Operations
//!
//! Provides the arbitrary precision integer used by the buffer codec.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. The codec only encodes non-negative values, but the type itself
//! is signed so that callers can hand over any integer and let the codec
//! enforce the sign invariant.

use malachite::base::num::conversion::traits::{FromStringBase, PowerOf2Digits, ToStringBase};
use malachite::{Integer, Natural};

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0u32),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create from a malachite Natural (always non-negative)
    pub fn from_natural(value: Natural) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Parse a string of digits in the given base
    ///
    /// Digits are case-insensitive and an optional leading `-` is accepted.
    /// The empty string parses as zero, which is what a decoder needs when it
    /// is handed an empty byte buffer.
    ///
    /// # Arguments
    /// * `base` - Radix between 2 and 36
    /// * `digits` - Digit string without any `0x`-style prefix
    ///
    /// # Returns
    /// * `Some(number)` - If every character is a valid digit
    /// * `None` - If the base is out of range or a digit is invalid
    pub fn from_string_base(base: u32, digits: &str) -> Option<Self> {
        if !(2..=36).contains(&base) {
            return None;
        }

        let (negative, digits) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits),
        };
        if digits.is_empty() {
            return Some(Self::zero());
        }

        let magnitude = Natural::from_string_base(base as u8, &digits.to_ascii_lowercase())?;
        let value = Integer::from(magnitude);
        Some(Self {
            value: if negative { -value } else { value },
        })
    }

    /// Build a non-negative number from big-endian bytes
    ///
    /// An empty slice yields zero. Runs in time linear in the slice length.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        // every u8 is a valid base-256 digit
        let magnitude = Natural::from_power_of_2_digits_desc(8, bytes.iter().copied())
            .unwrap_or_else(|| Natural::from(0u32));
        Self::from_natural(magnitude)
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to a malachite Natural
    ///
    /// Returns None if the value is negative
    pub fn to_natural(&self) -> Option<Natural> {
        Natural::try_from(self.value.clone()).ok()
    }

    /// Get the sign of the number
    ///
    /// Returns true if positive or zero, false if negative
    pub fn is_positive(&self) -> bool {
        self.value >= Integer::from(0u32)
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Integer::from(0u32)
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Left shift: x << y
    ///
    /// y can be negative for right shift
    pub fn lshift(&self, shift: i32) -> Self {
        if shift >= 0 {
            Self {
                value: &self.value << shift as u64,
            }
        } else {
            Self {
                value: &self.value >> u64::from(shift.unsigned_abs()),
            }
        }
    }

    /// Convert to string representation in given base
    ///
    /// Digits above 9 are lower case. Negative values get a leading `-`.
    ///
    /// # Panics
    /// Panics if base is not between 2 and 36
    pub fn to_string_base(&self, base: u32) -> String {
        if !(2..=36).contains(&base) {
            panic!("Base must be between 2 and 36");
        }
        ToStringBase::to_string_base(&self.value, base as u8)
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Consume and return the internal Integer value
    pub fn into_integer(self) -> Integer {
        self.value
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<Natural> for BigNumber {
    fn from(value: Natural) -> Self {
        Self::from_natural(value)
    }
}
