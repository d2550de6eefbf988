mod entity;
mod error;
mod repository;
pub mod vocab;

pub use entity::*;
pub use error::*;
pub use repository::*;
