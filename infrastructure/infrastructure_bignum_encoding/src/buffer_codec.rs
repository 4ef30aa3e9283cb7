//! Buffer Codec Module
//!
//! Converts non-negative arbitrary precision integers to and from big-endian
//! byte buffers.
//!
//! ## Canonical form
//!
//! The value is written in hex, padded with a single leading `0` nibble if the
//! digit count is odd, and split into bytes most significant first. The result
//! is the shortest byte string whose hex form holds the value, so zero encodes
//! as `[0x00]`, never as an empty buffer.
//!
//! Decoding accepts any buffer, including empty ones and ones with redundant
//! leading zero bytes. `decode(encode(v)) == v` always holds; `encode(decode(b))`
//! drops leading zero bytes and so only reproduces canonical buffers.

use entities_utilities::BigNumber;
use infrastructure_utilities::Diagnostics;
use malachite::{Integer, Natural};

use crate::common::{hex_to_bytes, EncodeError, EncodeResult};

/// Big-endian buffer codec for non-negative big numbers
pub struct BufferCodec;

impl BufferCodec {
    /// Encode a non-negative big number into its canonical buffer
    ///
    /// # Panics
    /// If `value` is negative. Passing a negative value is a caller bug; use
    /// [`BufferCodec::try_encode`] when the sign is not known in advance.
    ///
    /// # Examples
    /// ```
    /// use entities_utilities::BigNumber;
    /// use infrastructure_bignum_encoding::BufferCodec;
    ///
    /// assert_eq!(BufferCodec::encode(&BigNumber::from_u64(0)), vec![0x00]);
    /// assert_eq!(BufferCodec::encode(&BigNumber::from_u64(256)), vec![0x01, 0x00]);
    /// ```
    pub fn encode(value: &BigNumber) -> Vec<u8> {
        Diagnostics::assert_invariant(
            value.is_positive(),
            Some("Cannot encode a negative integer"),
        );
        encode_non_negative(value)
    }

    /// Encode a big number, reporting a negative value as an error
    ///
    /// # Returns
    /// * `Ok(bytes)` - Canonical buffer
    /// * `Err(EncodeError::NegativeValue)` - If `value < 0`
    pub fn try_encode(value: &BigNumber) -> EncodeResult<Vec<u8>> {
        if !value.is_positive() {
            return Err(EncodeError::NegativeValue);
        }
        Ok(encode_non_negative(value))
    }

    /// Encode a malachite Natural, which cannot be negative
    pub fn encode_natural(value: &Natural) -> Vec<u8> {
        encode_non_negative(&BigNumber::from_natural(value.clone()))
    }

    /// Encode a raw malachite Integer
    ///
    /// # Panics
    /// If `value` is negative.
    pub fn encode_integer(value: &Integer) -> Vec<u8> {
        Self::encode(&BigNumber::from_integer(value.clone()))
    }

    /// Decode a big-endian buffer into a big number
    ///
    /// Every buffer is valid input. An empty buffer decodes to zero. Each
    /// byte is one base-256 digit, most significant first, which reads the
    /// same value as parsing the buffer's two-digits-per-byte hex rendering.
    ///
    /// # Examples
    /// ```
    /// use entities_utilities::BigNumber;
    /// use infrastructure_bignum_encoding::BufferCodec;
    ///
    /// assert_eq!(BufferCodec::decode(&[0x01, 0x00]), BigNumber::from_u64(256));
    /// assert_eq!(BufferCodec::decode(&[]), BigNumber::from_u64(0));
    /// ```
    pub fn decode(buffer: &[u8]) -> BigNumber {
        BigNumber::from_be_bytes(buffer)
    }

    /// Decode a big-endian buffer into a malachite Natural
    pub fn decode_natural(buffer: &[u8]) -> Natural {
        match Self::decode(buffer).to_natural() {
            Some(value) => value,
            None => Diagnostics::fail("Decoded buffer produced a negative integer"),
        }
    }

    /// Number of bytes the canonical encoding of `value` occupies
    ///
    /// # Panics
    /// If `value` is negative.
    pub fn encoded_len(value: &BigNumber) -> usize {
        Diagnostics::assert_invariant(
            value.is_positive(),
            Some("Cannot encode a negative integer"),
        );
        value.to_string_base(16).len().div_ceil(2)
    }
}

fn encode_non_negative(value: &BigNumber) -> Vec<u8> {
    let mut hex = value.to_string_base(16);
    if hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }
    match hex_to_bytes(&hex) {
        Ok(bytes) => bytes,
        Err(err) => Diagnostics::fail(&err.to_string()),
    }
}
