//! Patterns that deal with how objects are composed.

pub mod decorator;
