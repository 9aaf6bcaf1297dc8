//! Parser configuration.

use crate::error::ConfigError;

/// What the parser does with an expression placeholder that has no closing `}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnterminatedExpression {
    /// Treat the rest of the input as the expression body and emit one binding.
    #[default]
    Absorb,
    /// Copy the rest of the input unchanged and emit no binding.
    Verbatim,
}

impl UnterminatedExpression {
    fn from_option(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("absorb") {
            Some(Self::Absorb)
        } else if value.eq_ignore_ascii_case("verbatim") {
            Some(Self::Verbatim)
        } else {
            None
        }
    }
}

/// Configuration for [`ParameterBindingParser`](crate::ParameterBindingParser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParserConfig {
    /// Handling of `?#{` / `:#{` without a closing brace.
    pub unterminated_expression: UnterminatedExpression,
}

impl ParserConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unterminated_expression: UnterminatedExpression::Absorb,
        }
    }

    /// Parse an option string into configuration.
    ///
    /// Options are `key=value` pairs separated by `;`:
    /// ```text
    /// Unterminated Expression=verbatim;
    /// ```
    pub fn from_options(options: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for part in options.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidOption(part.to_string()))?;

            let key = key.trim().to_lowercase();
            let value = value.trim();

            match key.as_str() {
                "unterminated expression" | "unterminated_expression" => {
                    config.unterminated_expression = UnterminatedExpression::from_option(value)
                        .ok_or_else(|| ConfigError::InvalidValue {
                            key: key.clone(),
                            value: value.to_string(),
                        })?;
                }
                _ => {
                    // Ignore unknown options for forward compatibility
                    tracing::debug!(key = key, value = value, "ignoring unknown parser option");
                }
            }
        }

        Ok(config)
    }

    /// Set the unterminated expression policy.
    #[must_use]
    pub const fn unterminated_expression(mut self, policy: UnterminatedExpression) -> Self {
        self.unterminated_expression = policy;
        self
    }
}
