//! Common Encoding/Decoding Utilities
//!
//! Error types and hex helpers shared by the buffer codec.
//!
//! ## Hex form
//!
//! A byte buffer maps to a hex string with exactly two lower-case digits per
//! byte, most significant byte first. `[0x01, 0x0a]` is `"010a"`.

use std::fmt;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Value is negative; only non-negative integers have a buffer form
    NegativeValue,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NegativeValue => write!(f, "Cannot encode a negative integer"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex string has an odd number of digits
    OddLength(usize),
    /// Character is not a hex digit
    InvalidDigit {
        /// Byte offset of the character in the input
        position: usize,
        /// The offending character
        found: char,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OddLength(len) => {
                write!(f, "Hex string has odd length {}", len)
            }
            DecodeError::InvalidDigit { position, found } => {
                write!(f, "Invalid hex digit {:?} at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render bytes as hex, two digits per byte
///
/// # Examples
/// ```
/// use infrastructure_bignum_encoding::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x05, 0xff]), "05ff");
/// assert_eq!(bytes_to_hex(&[]), "");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// Parse an even-length hex string into bytes
///
/// Digits may be upper or lower case. No prefix or separators are accepted.
///
/// # Returns
/// * `Ok(bytes)` - One byte per digit pair, in string order
/// * `Err(DecodeError)` - Odd length or a non-hex character
pub fn hex_to_bytes(hex: &str) -> DecodeResult<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(DecodeError::OddLength(hex.len()));
    }

    let mut digits = Vec::with_capacity(hex.len());
    for (position, found) in hex.char_indices() {
        let digit = found
            .to_digit(16)
            .ok_or(DecodeError::InvalidDigit { position, found })?;
        digits.push(digit as u8);
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_hex_pads_each_byte() {
        assert_eq!(bytes_to_hex(&[0x00]), "00");
        assert_eq!(bytes_to_hex(&[0x0f, 0xf0]), "0ff0");
        assert_eq!(bytes_to_hex(&[0x01, 0x00]), "0100");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("0100"), Ok(vec![0x01, 0x00]));
        assert_eq!(hex_to_bytes("FFfe"), Ok(vec![0xff, 0xfe]));
        assert_eq!(hex_to_bytes(""), Ok(vec![]));
    }

    #[test]
    fn test_hex_to_bytes_odd_length() {
        assert_eq!(hex_to_bytes("abc"), Err(DecodeError::OddLength(3)));
    }

    #[test]
    fn test_hex_to_bytes_invalid_digit() {
        assert_eq!(
            hex_to_bytes("0g"),
            Err(DecodeError::InvalidDigit {
                position: 1,
                found: 'g'
            })
        );
    }

    #[test]
    fn test_non_ascii_input_is_rejected() {
        // 'é' is two bytes long, so the length check passes
        let err = hex_to_bytes("é").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidDigit {
                position: 0,
                found: 'é'
            }
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EncodeError::NegativeValue.to_string(),
            "Cannot encode a negative integer"
        );
        assert_eq!(DecodeError::OddLength(3).to_string(), "Hex string has odd length 3");
        assert!(DecodeError::InvalidDigit {
            position: 4,
            found: 'z'
        }
        .to_string()
        .contains("position 4"));
    }
}
