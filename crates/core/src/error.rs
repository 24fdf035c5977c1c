//! Core error types for the exercise crates.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for exercise operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Input shape errors
    #[error("no input lists were supplied")]
    NoInput,

    #[error("input list {list} is empty")]
    EmptyList { list: usize },

    #[error("input list {list} is not sorted at position {position}")]
    UnsortedInput { list: usize, position: usize },

    #[error(
        "value {value} at list {list} position {position} lies outside [{bias}, {upper_bound}]"
    )]
    ValueOutOfRange {
        list: usize,
        position: usize,
        value: i32,
        bias: i32,
        upper_bound: i32,
    },

    // Resource errors
    #[error("counting span {span} exceeds the configured maximum {max_span}")]
    SpanTooLarge { span: u64, max_span: usize },

    #[error("element count overflowed while counting")]
    CountOverflow,

    #[error("placement cursor left the output range for key {key}")]
    PlacementFailed { key: i32 },

    // Configuration errors
    #[error("config parse error: {reason}")]
    ConfigParseFailed { reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an empty list error.
    #[must_use]
    pub const fn empty_list(list: usize) -> Self {
        Self::EmptyList { list }
    }

    /// Create an unsorted input error.
    #[must_use]
    pub const fn unsorted_input(list: usize, position: usize) -> Self {
        Self::UnsortedInput { list, position }
    }

    /// Create a span error.
    #[must_use]
    pub const fn span_too_large(span: u64, max_span: usize) -> Self {
        Self::SpanTooLarge { span, max_span }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
