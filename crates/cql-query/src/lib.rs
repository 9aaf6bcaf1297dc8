//! # cql-query
//!
//! Parameter-binding support for string-based CQL queries.
//!
//! Query templates may mix positional (`?0`), named (`:name`) and
//! expression (`?#{[0]}`, `:#{#name}`) placeholders. The
//! [`ParameterBindingParser`] rewrites every placeholder into the canonical
//! [`PARAMETER_MARKER`] and returns a parallel list of [`ParameterBinding`]s
//! that argument-value providers use to supply values later.
//!
//! ## Features
//!
//! - **Single pass**: templates are scanned once, left to right
//! - **Literal aware**: placeholders inside `'...'` are left alone
//! - **Lenient by default**: malformed input never fails [`ParameterBindingParser::parse`];
//!   [`ParameterBindingParser::try_parse`] reports it instead
//!
//! ## Example
//!
//! ```rust
//! use cql_query::{BindingKind, ParameterBindingParser};
//!
//! let parsed = ParameterBindingParser::INSTANCE
//!     .parse("SELECT * FROM users WHERE id = ?0 AND team = :#{#team.name}");
//!
//! assert_eq!(
//!     parsed.query(),
//!     "SELECT * FROM users WHERE id = ?_param_? AND team = ?_param_?"
//! );
//! assert_eq!(parsed.bindings()[1].kind(), BindingKind::NamedExpression);
//! assert_eq!(parsed.bindings()[1].expression_source(), Some("#team.name"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod binding;
pub mod config;
pub mod error;
pub mod parser;
pub mod query;

pub use binding::{BindingKind, ParameterBinding};
pub use config::{ParserConfig, UnterminatedExpression};
pub use error::{ConfigError, ParseError};
pub use parser::ParameterBindingParser;
pub use query::{PARAMETER_MARKER, ParsedQuery};
