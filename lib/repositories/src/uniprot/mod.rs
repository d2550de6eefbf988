//! The UniProt protein knowledge base.

mod filters;
mod request;
mod schema;

pub use filters::{pfam_filter, reviewed_filter, supfam_filter, taxa_filter};
pub use request::{UniprotFeature, UniprotFilter, UniprotQuery};
pub use schema::graph;
