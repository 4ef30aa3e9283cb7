//! Common API Facades
//!
//! Free-function forms of the diagnostics, math and object helpers.

use infrastructure_utilities::{Diagnostics, MathUtils, ObjectUtils};
use serde_json::Value;

/// Abort with a prefixed message
pub fn fail(message: &str) -> ! {
    Diagnostics::fail(message)
}

/// Abort with a prefixed message if `condition` is false
pub fn assert_invariant(condition: bool, message: Option<&str>) {
    Diagnostics::assert_invariant(condition, message)
}

/// Log a prefixed warning
pub fn warn(message: &str) {
    Diagnostics::warn(message)
}

/// Clamp `value` to `[min, max]`, checking `min` first
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    MathUtils::clamp(value, min, max)
}

/// Check if a float holds a finite integral value
pub fn is_integer(value: f64) -> bool {
    MathUtils::is_integer(value)
}

/// Values of an object or elements of an array
pub fn values(value: &Value) -> Vec<&Value> {
    ObjectUtils::values(value)
}

/// Check if a value is a plain key/value object
pub fn is_plain_object(value: &Value) -> bool {
    ObjectUtils::is_plain_object(value)
}
