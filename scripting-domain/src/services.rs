// Domain services

pub mod catalog;

pub use catalog::*;
