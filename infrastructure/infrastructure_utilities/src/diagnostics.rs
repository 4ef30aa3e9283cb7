//! Diagnostics Module
//!
//! Provides the assertion, failure and warning helpers used throughout the
//! serializer. Every message is prefixed with [`MESSAGE_PREFIX`] so that
//! failures coming from the serializer are recognisable in mixed output.
//!
//! Two failure styles are offered:
//! - [`Diagnostics::fail`] / [`Diagnostics::assert_invariant`] abort via panic.
//!   These guard programming errors and are never meant to be caught.
//! - [`Diagnostics::ensure`] returns a [`SerializerError`] for callers that
//!   propagate with `?`.

use std::fmt;

/// Prefix attached to every diagnostic message
pub const MESSAGE_PREFIX: &str = "UltimateSerializer";

/// Message used when an assertion fails without a message
pub const DEFAULT_ASSERTION_MESSAGE: &str = "AssertionError";

const LOG_TARGET: &str = "serializer_utilities";

/// Serializer error carrying a diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerError {
    message: String,
}

impl SerializerError {
    /// Create a new error with the given message (without prefix)
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message without the prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SerializerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", MESSAGE_PREFIX, self.message)
    }
}

impl std::error::Error for SerializerError {}

/// Result type for recoverable serializer checks
pub type SerializerResult<T> = Result<T, SerializerError>;

/// Assertion, failure and warning helpers
pub struct Diagnostics;

impl Diagnostics {
    /// Abort with a prefixed message
    ///
    /// # Panics
    /// Always.
    pub fn fail(message: &str) -> ! {
        panic!("{}", SerializerError::new(message))
    }

    /// Abort if `condition` is false
    ///
    /// # Arguments
    /// * `condition` - Invariant that must hold
    /// * `message` - Failure message, `AssertionError` when omitted
    ///
    /// # Panics
    /// If `condition` is false.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::Diagnostics;
    ///
    /// Diagnostics::assert_invariant(1 + 1 == 2, None);
    /// ```
    pub fn assert_invariant(condition: bool, message: Option<&str>) {
        if !condition {
            Self::fail(message.unwrap_or(DEFAULT_ASSERTION_MESSAGE));
        }
    }

    /// Check a condition and return an error instead of aborting
    ///
    /// # Returns
    /// * `Ok(())` - If `condition` holds
    /// * `Err(SerializerError)` - Otherwise, with the given or default message
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::Diagnostics;
    ///
    /// assert!(Diagnostics::ensure(true, None).is_ok());
    /// let err = Diagnostics::ensure(false, Some("bad input")).unwrap_err();
    /// assert_eq!(err.to_string(), "UltimateSerializer: bad input");
    /// ```
    pub fn ensure(condition: bool, message: Option<&str>) -> SerializerResult<()> {
        if condition {
            Ok(())
        } else {
            Err(SerializerError::new(
                message.unwrap_or(DEFAULT_ASSERTION_MESSAGE),
            ))
        }
    }

    /// Emit a prefixed warning through the `log` facade
    ///
    /// Nothing is printed unless the host application installed a logger.
    pub fn warn(message: &str) {
        log::warn!(target: LOG_TARGET, "{}: {}", MESSAGE_PREFIX, message);
    }
}
