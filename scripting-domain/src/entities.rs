// Domain entities

pub mod character;
pub mod item;
pub mod runtime_config;

pub use character::*;
pub use item::*;
pub use runtime_config::*;
