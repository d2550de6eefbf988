#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::sync::Arc;

pub mod model {
    pub use biofed_model::*;
}

pub mod sparql {
    pub use biofed_sparql::*;
}

pub mod planner {
    pub use biofed_planner::*;
}

pub mod repositories {
    pub use biofed_repositories::*;
}

/// A planner over the schemas of all repositories, using the public endpoints.
pub fn default_planner() -> planner::QueryPlanner {
    planner_with_options(planner::PlannerOptions::default())
}

/// A planner over the schemas of all repositories.
pub fn planner_with_options(options: planner::PlannerOptions) -> planner::QueryPlanner {
    planner::QueryPlanner::with_options(
        Arc::new(repositories::build_knowledge_graph()),
        options,
    )
}
