//! # Render Context
//!
//! Scoped values for component trees, in the provider/accessor style.
//!
//! A context is created as a matched pair:
//!
//! - **Provider**: a component factory that deep-copies its props, publishes
//!   the copy, renders its default slot, then retracts the copy
//! - **Accessor**: a handle any descendant can call to read the published
//!   value, or `None` when no provider is rendering
//!
//! Each call to [`create_context`](context::create_context) makes an
//! independent cell, so unrelated contexts never observe each other.
//! Retraction is guard-based and happens on success, failure, panic and
//! cancellation alike.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use render_context::prelude::*;
//!
//! let (theme, use_theme) = create_context::<String>();
//!
//! let button = FnSlot::new(move |_pass: &RenderPass| {
//!     let current = use_theme.get();
//!     Ok(RenderOutput::new(format!(
//!         "<button class=\"{}\">ok</button>",
//!         current.as_deref().map_or("light", String::as_str)
//!     )))
//! });
//!
//! let html = theme.render(&RenderPass::new(), &"dark".to_string(), &button).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod observability;
pub mod render;
pub mod slots;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ContextConfig, ReentryPolicy, RendererConfig};
    pub use crate::context::{
        create_context, Accessor, ActivationGuard, ContextCell, ContextFactory, DeepCopy, Json,
        Provider,
    };
    pub use crate::core::{ComponentKind, ContextState, RenderOutput, RenderPass, RenderUnit};
    pub use crate::errors::{ContextError, CopyError, RenderError};
    pub use crate::events::{EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::render::{Component, Element, FnComponent, ProviderComponent, Renderer};
    pub use crate::slots::{
        AsyncFnSlot, ComponentSlot, EmptySlots, FnSlot, Fragment, Slots, StaticSlot,
    };
}
