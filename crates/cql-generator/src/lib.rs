//! # cql-generator
//!
//! CQL fragment generators for `ALTER TABLE` column changes.
//!
//! Specifications describe a change; generators append the matching CQL
//! clause to a buffer owned by the statement being assembled.
//!
//! ## Example
//!
//! ```rust
//! use cql_generator::{CqlGenerator, CqlIdentifier, DropColumnCqlGenerator, DropColumnSpecification};
//!
//! let spec = DropColumnSpecification::new(CqlIdentifier::new("email")?);
//!
//! let mut cql = String::from("ALTER TABLE users ");
//! DropColumnCqlGenerator::new(&spec).to_cql(&mut cql);
//! assert_eq!(cql, "ALTER TABLE users DROP email");
//! # Ok::<(), cql_generator::GeneratorError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod generator;
pub mod identifier;
pub mod specification;

pub use error::GeneratorError;
pub use generator::{
    AddColumnCqlGenerator, ColumnChangeCqlGenerator, CqlGenerator, DropColumnCqlGenerator,
    RenameColumnCqlGenerator,
};
pub use identifier::CqlIdentifier;
pub use specification::{
    AddColumnSpecification, ColumnChangeSpecification, DropColumnSpecification,
    RenameColumnSpecification,
};
