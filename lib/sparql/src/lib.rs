//! A small, typed subset of SPARQL 1.1 `SELECT` queries.
//!
//! Every node renders to an ordered list of text lines. Rendering is pure: rendering the same
//! value twice yields the same text. Literals are rendered verbatim, so callers must hand in
//! valid SPARQL terms (IRIs wrapped in `<>`, quoted strings, prefixed names, property paths).

mod error;
mod expression;
mod pattern;
mod query;

pub use error::*;
pub use expression::{BindExpression, FilterExpression};
pub use pattern::{GraphPattern, GroupPattern, InlineValues, ServicePattern, Triple, TripleTerm};
pub use query::{Prefix, SelectQuery};

// Re-export the oxrdf variable, it already validates names and renders as `?name`.
pub use oxrdf::{Variable, VariableNameParseError};

/// The indentation unit of nested patterns.
pub const INDENT: &str = "    ";

/// Creates a [`Variable`], validating its name.
pub fn variable(name: &str) -> Result<Variable, SparqlError> {
    Variable::new(name).map_err(|error| SparqlError::InvalidVariableName {
        name: name.to_owned(),
        error,
    })
}
