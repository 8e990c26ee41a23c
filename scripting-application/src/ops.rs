pub mod catalog_cache;

pub use catalog_cache::*;
