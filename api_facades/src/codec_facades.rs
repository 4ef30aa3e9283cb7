//! Codec Facades
//!
//! Free functions over raw malachite integers, backed by `BufferCodec`.

use infrastructure_bignum_encoding::BufferCodec;
use malachite::Integer;

/// Encode a non-negative integer into its canonical big-endian buffer
///
/// # Panics
/// If `value` is negative.
///
/// # Examples
/// ```
/// use malachite::Integer;
/// use serializer_utilities::bigint_to_buffer;
///
/// assert_eq!(bigint_to_buffer(&Integer::from(256u32)), vec![0x01, 0x00]);
/// ```
pub fn bigint_to_buffer(value: &Integer) -> Vec<u8> {
    BufferCodec::encode_integer(value)
}

/// Decode a big-endian buffer into an integer; empty buffers decode to zero
pub fn buffer_to_bigint(buffer: &[u8]) -> Integer {
    BufferCodec::decode(buffer).into_integer()
}
