//! Query template error types.

use thiserror::Error;

/// Malformed constructs reported by [`ParameterBindingParser::try_parse`].
///
/// The lenient entry points never produce these; they absorb or copy the
/// offending text instead.
///
/// [`ParameterBindingParser::try_parse`]: crate::ParameterBindingParser::try_parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// An expression placeholder opened with `#{` has no closing `}`.
    #[error("unterminated expression placeholder at byte {offset}")]
    UnterminatedExpression {
        /// Byte offset of the placeholder's `?` or `:`.
        offset: usize,
    },

    /// A string literal was opened but never closed.
    #[error("unterminated string literal at byte {offset}")]
    UnterminatedLiteral {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A positional index does not fit in `usize`.
    #[error("positional parameter index out of range at byte {offset}: ?{digits}")]
    IndexOverflow {
        /// Byte offset of the `?`.
        offset: usize,
        /// The digits as written.
        digits: String,
    },
}

/// Errors produced while reading a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An option entry is not a `key=value` pair.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// An option has a value the parser does not understand.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Option key as written.
        key: String,
        /// Rejected value.
        value: String,
    },
}
