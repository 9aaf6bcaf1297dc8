//! CQL identifiers.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GeneratorError;

#[allow(clippy::unwrap_used)]
static UNQUOTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// A keyspace, table or column name.
///
/// Names made of a letter followed by letters, digits and underscores are
/// written as-is. Any other name is written double-quoted, with embedded
/// `"` doubled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CqlIdentifier {
    name: String,
    quoted: bool,
}

impl CqlIdentifier {
    /// Create an identifier, quoting it only when the name requires it.
    pub fn new(name: impl Into<String>) -> Result<Self, GeneratorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GeneratorError::EmptyIdentifier);
        }

        let quoted = !UNQUOTED_RE.is_match(&name);
        if quoted {
            tracing::trace!(name = %name, "identifier requires quoting");
        }

        Ok(Self { name, quoted })
    }

    /// Create an identifier that is always written quoted.
    ///
    /// Quoting preserves case, so `"userId"` and `userid` name different columns.
    pub fn quoted(name: impl Into<String>) -> Result<Self, GeneratorError> {
        let mut identifier = Self::new(name)?;
        identifier.quoted = true;
        Ok(identifier)
    }

    /// Get the name without quotes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the identifier is written quoted.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Append the identifier as it appears in CQL.
    pub fn write_cql(&self, cql: &mut String) {
        if self.quoted {
            cql.push('"');
            cql.push_str(&self.name.replace('"', "\"\""));
            cql.push('"');
        } else {
            cql.push_str(&self.name);
        }
    }
}

impl fmt::Display for CqlIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cql = String::with_capacity(self.name.len() + 2);
        self.write_cql(&mut cql);
        f.write_str(&cql)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_identifiers() {
        for name in ["age", "first_name", "Table123", "x"] {
            let identifier = CqlIdentifier::new(name).unwrap();
            assert!(!identifier.is_quoted(), "{name}");
            assert_eq!(identifier.to_string(), name);
        }
    }

    #[test]
    fn test_identifiers_requiring_quotes() {
        assert_eq!(CqlIdentifier::new("_private").unwrap().to_string(), "\"_private\"");
        assert_eq!(CqlIdentifier::new("123abc").unwrap().to_string(), "\"123abc\"");
        assert_eq!(CqlIdentifier::new("first name").unwrap().to_string(), "\"first name\"");
        assert_eq!(CqlIdentifier::new("a\"b").unwrap().to_string(), "\"a\"\"b\"");
    }

    #[test]
    fn test_forced_quoting() {
        let identifier = CqlIdentifier::quoted("userId").unwrap();
        assert!(identifier.is_quoted());
        assert_eq!(identifier.name(), "userId");
        assert_eq!(identifier.to_string(), "\"userId\"");
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(CqlIdentifier::new(""), Err(GeneratorError::EmptyIdentifier));
        assert_eq!(CqlIdentifier::quoted(""), Err(GeneratorError::EmptyIdentifier));
    }
}
