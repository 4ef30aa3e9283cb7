//! Infrastructure Layer: Utilities
//!
//! Provides the small helpers the serializer leans on:
//! - Diagnostics: prefixed failures, invariant assertions and warnings
//! - Math: clamping and integrality checks
//! - Objects: value projection and plain-object detection
//!
//! Depends on no other workspace crate.

pub mod diagnostics;
pub mod math;
pub mod objects;

pub use diagnostics::{
    Diagnostics, SerializerError, SerializerResult, DEFAULT_ASSERTION_MESSAGE, MESSAGE_PREFIX,
};
pub use math::MathUtils;
pub use objects::ObjectUtils;
