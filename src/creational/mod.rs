//! Patterns that deal with how objects get made.

pub mod builder;
pub mod factory;
