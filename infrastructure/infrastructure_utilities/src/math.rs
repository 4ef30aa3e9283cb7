//! Math Utilities
//!
//! Numeric helpers used when the serializer picks an encoding for a number.

/// Math utilities for range and integrality checks
pub struct MathUtils;

impl MathUtils {
    /// Clamp a value to be within a range
    ///
    /// `min` is checked before `max`, so with `min > max` anything below
    /// `min` yields `min` and anything else above `max` yields `max`.
    /// Values that compare with neither bound (NaN) are returned unchanged.
    ///
    /// # Arguments
    /// * `value` - Value to clamp
    /// * `min` - Lower bound
    /// * `max` - Upper bound
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::MathUtils;
    ///
    /// assert_eq!(MathUtils::clamp(5, 1, 10), 5);
    /// assert_eq!(MathUtils::clamp(15, 1, 10), 10);
    /// assert_eq!(MathUtils::clamp(0, 1, 10), 1);
    /// ```
    pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Check if a float holds an integral value
    ///
    /// # Returns
    /// `true` if `value` is finite and has no fractional part
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::MathUtils;
    ///
    /// assert!(MathUtils::is_integer(3.0));
    /// assert!(!MathUtils::is_integer(3.5));
    /// assert!(!MathUtils::is_integer(f64::NAN));
    /// ```
    pub fn is_integer(value: f64) -> bool {
        value.is_finite() && value.floor() == value
    }
}
