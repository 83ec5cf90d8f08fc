//! # Design Patterns in Rust
//!
//! Three classic object-oriented patterns, each with a runnable demo:
//!
//! ## Builder (`creational::builder`)
//! - A `HouseBuilder` trait with wooden and fancy builders
//! - A director that fixes the step order
//! - Unique (`Box`) vs shared (`Rc`) ownership of the builder, chosen by type
//!
//! ## Factory (`creational::factory`)
//! - One entry point from a transport name to a `Box<dyn Transport>`
//! - Unknown names are an error, never a fallback variant
//!
//! ## Decorator (`structural::decorator`)
//! - Notifiers that wrap notifiers through `Rc<dyn Notifier>`
//! - Inner channels fire before outer ones
//!
//! Run the demos with: `cargo run --bin patterns -- <builder|factory|decorator|deliver|all>`

pub mod config;
pub mod creational;
pub mod demo;
pub mod error;
pub mod logging;
pub mod structural;

pub use config::{ConfigError, DemoConfig};
pub use error::{PatternError, Result};
