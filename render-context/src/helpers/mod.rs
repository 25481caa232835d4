//! Helper utilities for running renders.

pub mod runtime;

pub use runtime::{run_with_timeout, TimedResult};
