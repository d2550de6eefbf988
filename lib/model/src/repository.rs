use crate::ParseRepositoryError;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the federated knowledge bases.
///
/// The declaration order is significant: it is the tie breaker used when ordering the
/// per-repository blocks of a query, so the rendered output is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repository {
    /// The [UniProt](https://www.uniprot.org/) protein knowledge base.
    Uniprot,
    /// The [Rhea](https://www.rhea-db.org/) reaction knowledge base.
    Rhea,
}

impl Repository {
    /// All repositories in declaration order.
    pub const ALL: [Repository; 2] = [Repository::Uniprot, Repository::Rhea];

    /// The public SPARQL endpoint of the repository.
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Repository::Uniprot => "https://sparql.uniprot.org/sparql",
            Repository::Rhea => "https://sparql.rhea-db.org/sparql",
        }
    }

    /// The lower-case name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Repository::Uniprot => "uniprot",
            Repository::Rhea => "rhea",
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Repository {
    type Err = ParseRepositoryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Repository::ALL
            .into_iter()
            .find(|repository| repository.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseRepositoryError {
                name: name.to_owned(),
            })
    }
}
