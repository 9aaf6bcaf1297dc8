//! Generator error types.

use thiserror::Error;

/// Errors that can occur while building CQL fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    /// An identifier was empty.
    #[error("identifier cannot be empty")]
    EmptyIdentifier,

    /// A column data type was empty.
    #[error("data type for column {column} cannot be empty")]
    EmptyDataType {
        /// Column the type was given for.
        column: String,
    },
}
