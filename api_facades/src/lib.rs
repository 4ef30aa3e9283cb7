//! API Facades Layer
//!
//! Single entry point for the serializer helpers. Re-exports the types of
//! the inner layers and adds free functions over plain malachite integers
//! for callers that do not want to go through `BigNumber`.
//!
//! All facades call into the inner layers; no logic lives here.

pub mod codec_facades;
pub mod common_facades;

pub use codec_facades::*;
pub use common_facades::*;

pub use entities_utilities::{BigNumber, IndexedSet};
pub use infrastructure_bignum_encoding::{
    bytes_to_hex, hex_to_bytes, BufferCodec, DecodeError, EncodeError,
};
pub use infrastructure_utilities::{
    Diagnostics, MathUtils, ObjectUtils, SerializerError, SerializerResult, MESSAGE_PREFIX,
};
