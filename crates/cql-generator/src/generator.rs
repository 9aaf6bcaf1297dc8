//! CQL fragment generators.
//!
//! Generators append a fragment of an `ALTER TABLE` statement to a
//! caller-supplied buffer. They write exactly the clause they describe.

use crate::specification::{
    AddColumnSpecification, ColumnChangeSpecification, DropColumnSpecification,
    RenameColumnSpecification,
};

/// A type that writes a CQL fragment.
pub trait CqlGenerator {
    /// Append the fragment to `cql`.
    fn to_cql(&self, cql: &mut String);

    /// Render the fragment into a new string.
    fn to_cql_string(&self) -> String {
        let mut cql = String::new();
        self.to_cql(&mut cql);
        tracing::trace!(cql = %cql, "generated CQL fragment");
        cql
    }
}

/// Generator for the `DROP` column clause.
#[derive(Debug, Clone, Copy)]
pub struct DropColumnCqlGenerator<'a> {
    spec: &'a DropColumnSpecification,
}

impl<'a> DropColumnCqlGenerator<'a> {
    /// Create a generator for `spec`.
    #[must_use]
    pub fn new(spec: &'a DropColumnSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for DropColumnCqlGenerator<'_> {
    fn to_cql(&self, cql: &mut String) {
        cql.push_str("DROP ");
        self.spec.name().write_cql(cql);
    }
}

/// Generator for the `ADD` column clause.
#[derive(Debug, Clone, Copy)]
pub struct AddColumnCqlGenerator<'a> {
    spec: &'a AddColumnSpecification,
}

impl<'a> AddColumnCqlGenerator<'a> {
    /// Create a generator for `spec`.
    #[must_use]
    pub fn new(spec: &'a AddColumnSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for AddColumnCqlGenerator<'_> {
    fn to_cql(&self, cql: &mut String) {
        cql.push_str("ADD ");
        self.spec.name().write_cql(cql);
        cql.push(' ');
        cql.push_str(self.spec.data_type());
    }
}

/// Generator for the `RENAME` column clause.
#[derive(Debug, Clone, Copy)]
pub struct RenameColumnCqlGenerator<'a> {
    spec: &'a RenameColumnSpecification,
}

impl<'a> RenameColumnCqlGenerator<'a> {
    /// Create a generator for `spec`.
    #[must_use]
    pub fn new(spec: &'a RenameColumnSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for RenameColumnCqlGenerator<'_> {
    fn to_cql(&self, cql: &mut String) {
        cql.push_str("RENAME ");
        self.spec.old_name().write_cql(cql);
        cql.push_str(" TO ");
        self.spec.new_name().write_cql(cql);
    }
}

/// Generator dispatching on the kind of column change.
#[derive(Debug, Clone, Copy)]
pub struct ColumnChangeCqlGenerator<'a> {
    spec: &'a ColumnChangeSpecification,
}

impl<'a> ColumnChangeCqlGenerator<'a> {
    /// Create a generator for `spec`.
    #[must_use]
    pub fn new(spec: &'a ColumnChangeSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for ColumnChangeCqlGenerator<'_> {
    fn to_cql(&self, cql: &mut String) {
        match self.spec {
            ColumnChangeSpecification::Add(spec) => AddColumnCqlGenerator::new(spec).to_cql(cql),
            ColumnChangeSpecification::Drop(spec) => DropColumnCqlGenerator::new(spec).to_cql(cql),
            ColumnChangeSpecification::Rename(spec) => {
                RenameColumnCqlGenerator::new(spec).to_cql(cql);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::identifier::CqlIdentifier;

    fn id(name: &str) -> CqlIdentifier {
        CqlIdentifier::new(name).unwrap()
    }

    #[test]
    fn test_drop_column() {
        let spec = DropColumnSpecification::new(id("email"));
        assert_eq!(DropColumnCqlGenerator::new(&spec).to_cql_string(), "DROP email");
    }

    #[test]
    fn test_drop_column_appends_to_buffer() {
        let spec = DropColumnSpecification::new(id("email"));
        let mut cql = String::from("ALTER TABLE users ");
        DropColumnCqlGenerator::new(&spec).to_cql(&mut cql);
        assert_eq!(cql, "ALTER TABLE users DROP email");
    }

    #[test]
    fn test_drop_quoted_column() {
        let spec = DropColumnSpecification::new(CqlIdentifier::quoted("eMail").unwrap());
        assert_eq!(DropColumnCqlGenerator::new(&spec).to_cql_string(), "DROP \"eMail\"");
    }

    #[test]
    fn test_add_column() {
        let spec = AddColumnSpecification::new(id("scores"), "map<text, int>").unwrap();
        assert_eq!(
            AddColumnCqlGenerator::new(&spec).to_cql_string(),
            "ADD scores map<text, int>"
        );
    }

    #[test]
    fn test_rename_column() {
        let spec = RenameColumnSpecification::new(id("id"), id("user_id"));
        assert_eq!(
            RenameColumnCqlGenerator::new(&spec).to_cql_string(),
            "RENAME id TO user_id"
        );
    }

    #[test]
    fn test_column_change_dispatch() {
        let changes: Vec<ColumnChangeSpecification> = vec![
            AddColumnSpecification::new(id("a"), "int").unwrap().into(),
            DropColumnSpecification::new(id("b")).into(),
            RenameColumnSpecification::new(id("c"), id("d")).into(),
        ];

        let rendered: Vec<String> = changes
            .iter()
            .map(|change| ColumnChangeCqlGenerator::new(change).to_cql_string())
            .collect();
        assert_eq!(rendered, ["ADD a int", "DROP b", "RENAME c TO d"]);
    }
}
