//! Infrastructure Layer: Bignum Encoding
//!
//! Converts arbitrary precision non-negative integers to and from big-endian
//! byte buffers.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate sits in the infrastructure layer
//! and depends on the Entities layer for the `BigNumber` type and on
//! `infrastructure_utilities` for invariant assertions.
//!
//! ## Codecs
//!
//! - **[`buffer_codec`](buffer_codec/index.html)**: canonical big-endian buffer
//!   form of a non-negative integer, and the inverse decoding.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): BigNumber type

mod common;

pub mod buffer_codec;

pub use buffer_codec::BufferCodec;

// Re-export error types for convenience
pub use common::{DecodeError, DecodeResult, EncodeError, EncodeResult};

// Re-export hex helpers
pub use common::{bytes_to_hex, hex_to_bytes};
