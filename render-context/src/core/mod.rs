//! Core domain model types.
//!
//! This module contains the values that flow between components and the
//! host renderer:
//! - Rendered output and the render pass it belongs to
//! - The tagged `RenderUnit` produced when a component is instantiated
//! - Context state and component kind enums

mod output;
#[cfg(test)]
mod output_tests;
mod pass;
mod status;
mod unit;

pub use output::RenderOutput;
pub use pass::RenderPass;
pub use status::{ComponentKind, ContextState};
pub use unit::{RenderFuture, RenderUnit};
