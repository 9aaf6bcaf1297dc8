//! Binding descriptors.
//!
//! A [`ParameterBinding`] describes one placeholder occurrence found in a
//! query template. Argument-value providers consume them, in order, to supply
//! the value for each canonical marker in the transformed query.

use std::fmt;

/// Kind of a [`ParameterBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingKind {
    /// `?0`, `?13`.
    Positional,
    /// `:name`.
    Named,
    /// `?#{...}`.
    IndexedExpression,
    /// `:#{...}`.
    NamedExpression,
}

/// One placeholder occurrence in a query template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterBinding {
    /// Positional parameter, bound by argument index.
    Positional(usize),
    /// Named parameter, bound by parameter name.
    Named(String),
    /// Expression introduced with `?#{`, stored without the surrounding frame.
    IndexedExpression(String),
    /// Expression introduced with `:#{`, stored without the surrounding frame.
    NamedExpression(String),
}

impl ParameterBinding {
    /// Get the binding kind.
    #[must_use]
    pub fn kind(&self) -> BindingKind {
        match self {
            Self::Positional(_) => BindingKind::Positional,
            Self::Named(_) => BindingKind::Named,
            Self::IndexedExpression(_) => BindingKind::IndexedExpression,
            Self::NamedExpression(_) => BindingKind::NamedExpression,
        }
    }

    /// Get the argument index of a positional binding.
    #[must_use]
    pub fn parameter_index(&self) -> Option<usize> {
        match self {
            Self::Positional(index) => Some(*index),
            _ => None,
        }
    }

    /// Get the parameter name of a named binding.
    #[must_use]
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Get the raw expression text of an expression binding.
    #[must_use]
    pub fn expression_source(&self) -> Option<&str> {
        match self {
            Self::IndexedExpression(source) | Self::NamedExpression(source) => Some(source),
            _ => None,
        }
    }

    /// Check whether the binding must be resolved by an expression evaluator.
    #[must_use]
    pub fn is_expression(&self) -> bool {
        matches!(self, Self::IndexedExpression(_) | Self::NamedExpression(_))
    }
}

// Placeholder as it appears in a template.
impl fmt::Display for ParameterBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(index) => write!(f, "?{index}"),
            Self::Named(name) => write!(f, ":{name}"),
            Self::IndexedExpression(source) => write!(f, "?#{{{source}}}"),
            Self::NamedExpression(source) => write!(f, ":#{{{source}}}"),
        }
    }
}
