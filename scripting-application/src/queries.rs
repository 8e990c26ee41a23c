pub mod catalog_queries;
pub mod roster_queries;

pub use catalog_queries::*;
pub use roster_queries::*;
