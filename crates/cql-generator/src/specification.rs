//! Column change specifications for `ALTER TABLE`.

use crate::error::GeneratorError;
use crate::identifier::CqlIdentifier;

/// Specification to drop a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropColumnSpecification {
    name: CqlIdentifier,
}

impl DropColumnSpecification {
    /// Create a specification dropping `name`.
    #[must_use]
    pub fn new(name: CqlIdentifier) -> Self {
        Self { name }
    }

    /// Get the column name.
    #[must_use]
    pub fn name(&self) -> &CqlIdentifier {
        &self.name
    }
}

/// Specification to add a column of a given CQL type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddColumnSpecification {
    name: CqlIdentifier,
    data_type: String,
}

impl AddColumnSpecification {
    /// Create a specification adding `name` with type `data_type`, e.g. `text`
    /// or `map<text, int>`.
    pub fn new(name: CqlIdentifier, data_type: impl Into<String>) -> Result<Self, GeneratorError> {
        let data_type: String = data_type.into();
        let data_type = data_type.trim().to_string();
        if data_type.is_empty() {
            return Err(GeneratorError::EmptyDataType {
                column: name.name().to_string(),
            });
        }
        Ok(Self { name, data_type })
    }

    /// Get the column name.
    #[must_use]
    pub fn name(&self) -> &CqlIdentifier {
        &self.name
    }

    /// Get the CQL data type.
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

/// Specification to rename a primary key column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenameColumnSpecification {
    old_name: CqlIdentifier,
    new_name: CqlIdentifier,
}

impl RenameColumnSpecification {
    /// Create a specification renaming `old_name` to `new_name`.
    #[must_use]
    pub fn new(old_name: CqlIdentifier, new_name: CqlIdentifier) -> Self {
        Self { old_name, new_name }
    }

    /// Get the current column name.
    #[must_use]
    pub fn old_name(&self) -> &CqlIdentifier {
        &self.old_name
    }

    /// Get the new column name.
    #[must_use]
    pub fn new_name(&self) -> &CqlIdentifier {
        &self.new_name
    }
}

/// Any single column change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnChangeSpecification {
    /// `ADD`.
    Add(AddColumnSpecification),
    /// `DROP`.
    Drop(DropColumnSpecification),
    /// `RENAME`.
    Rename(RenameColumnSpecification),
}

impl ColumnChangeSpecification {
    /// Get the column the change applies to, by its current name.
    #[must_use]
    pub fn name(&self) -> &CqlIdentifier {
        match self {
            Self::Add(spec) => spec.name(),
            Self::Drop(spec) => spec.name(),
            Self::Rename(spec) => spec.old_name(),
        }
    }
}

impl From<AddColumnSpecification> for ColumnChangeSpecification {
    fn from(spec: AddColumnSpecification) -> Self {
        Self::Add(spec)
    }
}

impl From<DropColumnSpecification> for ColumnChangeSpecification {
    fn from(spec: DropColumnSpecification) -> Self {
        Self::Drop(spec)
    }
}

impl From<RenameColumnSpecification> for ColumnChangeSpecification {
    fn from(spec: RenameColumnSpecification) -> Self {
        Self::Rename(spec)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(name: &str) -> CqlIdentifier {
        CqlIdentifier::new(name).unwrap()
    }

    #[test]
    fn test_add_column_trims_type() {
        let spec = AddColumnSpecification::new(id("tags"), "  set<text> ").unwrap();
        assert_eq!(spec.data_type(), "set<text>");
    }

    #[test]
    fn test_add_column_rejects_empty_type() {
        assert_eq!(
            AddColumnSpecification::new(id("tags"), " "),
            Err(GeneratorError::EmptyDataType {
                column: "tags".to_string()
            })
        );
    }

    #[test]
    fn test_change_name() {
        let change: ColumnChangeSpecification =
            RenameColumnSpecification::new(id("old"), id("new")).into();
        assert_eq!(change.name().name(), "old");

        let change: ColumnChangeSpecification = DropColumnSpecification::new(id("gone")).into();
        assert_eq!(change.name().name(), "gone");
    }
}
