//! # Optional Tour
//!
//! A guided tour of functional programming features built on `optional-fp`:
//! currying, partial application, composition, pipelines, discriminated
//! unions, records, options, results, functors, applicatives and monadic
//! binding.
//!
//! ## Module Structure
//!
//! - `config`: log settings read from the environment
//! - `demonstrations`: the evaluated examples
//! - `error`: configuration and startup errors
//! - `logging`: `tracing` subscriber setup

#![forbid(unsafe_code)]

pub mod config;
pub mod demonstrations;
pub mod error;
pub mod logging;

pub use config::{LogFormat, TourConfig};
pub use demonstrations::Demonstration;
pub use error::{ConfigError, TourError};

/// Runs the tour, logging each demonstration at `info`.
///
/// Returns the demonstrations in the order they were logged.
pub fn run() -> Vec<Demonstration> {
    let demonstrations = demonstrations::all();
    for demonstration in &demonstrations {
        tracing::info!(
            topic = demonstration.topic,
            expression = demonstration.expression,
            outcome = %demonstration.outcome,
            "demonstration"
        );
    }
    tracing::debug!(count = demonstrations.len(), "tour finished");
    demonstrations
}
