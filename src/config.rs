//! Calculator settings.

use crate::operations::query::DEFAULT_DECIMALS;

/// Label prefixed to error messages by default.
pub const DEFAULT_ERROR_LABEL: &str = "Error";

/// Settings for a [`Calculator`](crate::calculator::Calculator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Decimal places edge lengths are rounded to.
    pub decimals: u32,

    /// Whether object-literal syntax (unquoted keys etc.) is accepted when
    /// strict JSON parsing fails.
    pub lenient: bool,

    /// Label prefixed to rendered error messages.
    pub error_label: String,
}

impl CalculatorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rounding precision
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Enable or disable the object-literal fallback parser
    #[must_use]
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Set the error label
    #[must_use]
    pub fn with_error_label(mut self, label: impl Into<String>) -> Self {
        self.error_label = label.into();
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            lenient: true,
            error_label: DEFAULT_ERROR_LABEL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.decimals, 2);
        assert!(config.lenient);
        assert_eq!(config.error_label, "Error");
    }

    #[test]
    fn builder() {
        let config = CalculatorConfig::new()
            .with_decimals(3)
            .with_lenient(false)
            .with_error_label("Oops");
        assert_eq!(config.decimals, 3);
        assert!(!config.lenient);
        assert_eq!(config.error_label, "Oops");
    }
}
