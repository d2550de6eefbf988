//! Plans federated SPARQL queries over a knowledge graph of repository schemas.
//!
//! Each repository registers its entities and the [`Recipe`]s that bind them in a
//! [`RepositoryGraph`]. The graphs are composed into one [`KnowledgeGraph`], which a
//! [`QueryPlanner`] searches for the minimal set of recipes that reach every requested entity.
//! Recipes of foreign repositories end up in `SERVICE` blocks.

mod config;
mod error;
mod knowledge_graph;
mod mapping;
mod planner;
mod recipe;

pub use config::{Endpoints, PlannerOptions};
pub use error::*;
pub use knowledge_graph::{KnowledgeGraph, PathEdge, RepositoryGraph, ShortestPaths};
pub use mapping::VariableMapping;
pub use planner::{QueryPlan, QueryPlanner, RecipeGroup, RepositoryQuery};
pub use recipe::{Recipe, RecipeConstructor};
