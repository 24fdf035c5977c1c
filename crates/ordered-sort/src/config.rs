//! Sorter configuration.
//!
//! Built in code through [`SorterConfig::builder`] or parsed from TOML:
//!
//! ```toml
//! validation = "trusting"
//! tie_order = "stable"
//! max_span = 65536
//! ```

use exercises_core::{Error, Result};
use serde::Deserialize;

/// Largest counting array allowed by default.
pub const DEFAULT_MAX_SPAN: usize = 1 << 20;

/// How much the sorter checks its input before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject empty lists and lists that are not sorted by key.
    #[default]
    Strict,
    /// Trust each list's first and last element as its minimum and maximum.
    ///
    /// Values that then fall outside the counted range are still reported
    /// as [`Error::ValueOutOfRange`].
    Trusting,
}

/// Relative order of elements with equal keys in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieOrder {
    /// Equal keys come out in reverse input order, lists outer and elements
    /// inner.
    #[default]
    Reversed,
    /// Equal keys keep their input order.
    Stable,
}

/// A validated sorter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorterConfig {
    /// Input checks applied before counting.
    pub validation: Validation,
    /// Ordering among equal keys.
    pub tie_order: TieOrder,
    /// Upper limit for `upper_bound - bias + 1`.
    pub max_span: usize,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            validation: Validation::default(),
            tie_order: TieOrder::default(),
            max_span: DEFAULT_MAX_SPAN,
        }
    }
}

impl SorterConfig {
    /// Create a new config builder.
    #[must_use]
    pub const fn builder() -> SorterConfigBuilder {
        SorterConfigBuilder::new()
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] for malformed TOML or unknown
    /// keys, and [`Error::InvalidConfig`] when a value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configured values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when `max_span` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_span == 0 {
            return Err(Error::invalid_config("max_span must be at least 1"));
        }
        Ok(())
    }
}

/// Configuration builder with fallible construction.
#[derive(Debug, Clone, Default)]
pub struct SorterConfigBuilder {
    validation: Option<Validation>,
    tie_order: Option<TieOrder>,
    max_span: Option<usize>,
}

impl SorterConfigBuilder {
    /// Create a new config builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validation: None,
            tie_order: None,
            max_span: None,
        }
    }

    /// Set the input validation mode.
    #[must_use]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Set the ordering among equal keys.
    #[must_use]
    pub const fn with_tie_order(mut self, tie_order: TieOrder) -> Self {
        self.tie_order = Some(tie_order);
        self
    }

    /// Set the largest counting array the sorter may allocate.
    #[must_use]
    pub const fn with_max_span(mut self, max_span: usize) -> Self {
        self.max_span = Some(max_span);
        self
    }

    /// Build the configuration, returning an error if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when `max_span` is zero.
    pub fn build(self) -> Result<SorterConfig> {
        let config = SorterConfig {
            validation: self.validation.unwrap_or_default(),
            tie_order: self.tie_order.unwrap_or_default(),
            max_span: self.max_span.unwrap_or(DEFAULT_MAX_SPAN),
        };
        config.validate()?;
        Ok(config)
    }
}
