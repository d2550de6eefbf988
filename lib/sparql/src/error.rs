use oxrdf::VariableNameParseError;

/// An error raised while building a pattern tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SparqlError {
    /// The number of `{}` placeholders of an expression template does not match the number of
    /// input variables.
    #[error(
        "The expression template '{template}' has {placeholders} placeholder(s) but {arguments} input variable(s) were given"
    )]
    MalformedTemplate {
        /// The offending template.
        template: String,
        /// The number of placeholders found in the template.
        placeholders: usize,
        /// The number of input variables.
        arguments: usize,
    },
    /// A name is not a valid SPARQL variable name.
    #[error("Invalid variable name '{name}': {error}")]
    InvalidVariableName {
        /// The name itself.
        name: String,
        /// The parsing error.
        #[source]
        error: VariableNameParseError,
    },
}
