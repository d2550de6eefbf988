//! The schemas of the federated repositories and the typed requests against them.
//!
//! [`build_knowledge_graph`] composes the schema of every repository. Requests such as
//! [`uniprot::UniprotQuery`] implement [`RepositoryQuery`](biofed_planner::RepositoryQuery)
//! and are planned by a [`QueryPlanner`](biofed_planner::QueryPlanner).

mod recipes;
pub mod rhea;
pub mod uniprot;

use biofed_planner::KnowledgeGraph;
use serde::Deserialize;

/// Builds the knowledge graph of all repositories.
pub fn build_knowledge_graph() -> KnowledgeGraph {
    KnowledgeGraph::compose([uniprot::graph(), rhea::graph()])
}

/// The columns selected by a request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSelector<F> {
    pub columns: Vec<F>,
}

/// Returns `values` unless they are missing or empty. An empty list is ignored with a warning.
fn non_empty<'values>(
    filter: &str,
    values: Option<&'values [String]>,
) -> Option<&'values [String]> {
    match values {
        Some([]) => {
            tracing::warn!(filter, "Ignoring empty filter list");
            None
        }
        values => values,
    }
}
