//! Entities Layer: Utilities
//!
//! Provides the core data types shared by the serializer helpers:
//! - Big number values (arbitrary precision, malachite-backed)
//! - Indexed sets (append-only, stable index assignment)

pub mod big;
pub mod indexed_set;

pub use big::BigNumber;
pub use indexed_set::IndexedSet;
