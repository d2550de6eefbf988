//! The Rhea reaction knowledge base.

mod filters;
mod request;
mod schema;

pub use filters::reaction_filter;
pub use request::{RheaFeature, RheaFilter, RheaQuery};
pub use schema::graph;
