use biofed_model::{Entity, Repository};
use biofed_sparql::SparqlError;
use itertools::Itertools;
use oxiri::IriParseError;

/// The result of planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// An error raised while turning a request into a query.
///
/// All of these indicate either a request that cannot be answered by the knowledge graph or a
/// bug in the schema registration. None of them is recoverable by retrying.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlanError {
    /// A requested or filtered entity has no path from the root of the query.
    #[error("The entity {entity} is not reachable from {root}")]
    UnreachableEntity {
        /// The entity that cannot be produced.
        entity: Entity,
        /// The root the search started from.
        root: Entity,
    },
    /// Two distinct entities would be rendered as the same variable.
    #[error("The entities {first} and {second} both map to the variable ?{name}")]
    VariableCollision {
        /// The shared variable name.
        name: String,
        first: Entity,
        second: Entity,
    },
    /// A recipe asked for the variable of an entity that it did not declare as required.
    #[error("The entity {0} has no variable in this plan")]
    UnboundEntity(Entity),
    /// The repositories of a plan consume each other's entities, so no block order exists.
    #[error("The repositories {} depend on each other", .0.iter().join(", "))]
    CyclicFederation(Vec<Repository>),
    /// An error while building the pattern tree, e.g. a malformed expression template.
    #[error(transparent)]
    Sparql(#[from] SparqlError),
}

/// An error raised when an endpoint is not a valid absolute IRI.
#[derive(Debug, thiserror::Error)]
#[error("Invalid endpoint '{iri}' for {repository}: {error}")]
pub struct EndpointError {
    pub repository: Repository,
    pub iri: String,
    #[source]
    pub error: IriParseError,
}
