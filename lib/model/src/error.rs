/// An error raised while parsing a [`Repository`](crate::Repository) from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown repository '{name}', expected one of: uniprot, rhea")]
pub struct ParseRepositoryError {
    /// The name that could not be parsed.
    pub name: String,
}

