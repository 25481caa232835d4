//! Render-scoped contexts.
//!
//! This module provides:
//! - [`create_context`] and [`ContextFactory`] for building provider/accessor pairs
//! - [`Provider`], which publishes a deep copy of its props while its children render
//! - [`Accessor`], which reads the value published by the enclosing provider
//! - [`ContextCell`], the explicit shared slot both halves refer to
//! - [`DeepCopy`], the contract a value must meet to be published

mod accessor;
mod cell;
mod factory;
mod guard;
mod payload;
mod provider;

pub use accessor::Accessor;
pub use cell::ContextCell;
pub use factory::{create_context, ContextFactory};
pub use guard::ActivationGuard;
pub use payload::{DeepCopy, Json};
pub use provider::Provider;
