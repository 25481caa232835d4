//! The publishing half of a context.

use super::cell::ContextCell;
use super::guard::ActivationGuard;
use super::payload::DeepCopy;
use crate::core::{ComponentKind, RenderOutput, RenderPass, RenderUnit};
use crate::errors::{ContextError, RenderError};
use crate::render::ProviderComponent;
use crate::slots::Slots;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug_span, warn, Instrument};

/// Publishes a value to its context for the duration of rendering its
/// default slot.
///
/// Every render follows the same protocol: deep-copy the props, publish
/// the copy, await the default slot, retract the copy, return the slot's
/// output. Retraction is tied to an [`ActivationGuard`], so it also happens
/// when the slot fails, panics, or the render future is dropped.
pub struct Provider<T> {
    cell: Arc<ContextCell<T>>,
}

impl<T> Provider<T> {
    pub(crate) fn new(cell: Arc<ContextCell<T>>) -> Self {
        Self { cell }
    }

    /// Returns the context name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.cell.name()
    }

    /// Providers are component factories.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::Factory
    }

    /// Returns true if both providers publish into the same cell.
    #[must_use]
    pub fn same_context(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T> Provider<T>
where
    T: DeepCopy + Send + Sync + 'static,
{
    /// Renders `slots` with a copy of `props` published.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Context` if `props` cannot be copied or the
    /// cell refuses the activation, and otherwise whatever the default slot
    /// returns.
    pub async fn render<S>(
        &self,
        pass: &RenderPass,
        props: &T,
        slots: &S,
    ) -> Result<RenderOutput, RenderError>
    where
        S: Slots + ?Sized,
    {
        let copy = copy_props(self.name(), props)?;
        render_with_copy(Arc::clone(&self.cell), pass, copy, slots).await
    }

    /// Instantiates the provider for the host renderer.
    ///
    /// The copy is taken now; the returned producer publishes it when it is
    /// first polled, so later changes to `props` are never observed.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Context` if `props` cannot be copied.
    pub fn provide(
        &self,
        pass: RenderPass,
        props: &T,
        slots: Arc<dyn Slots>,
    ) -> Result<RenderUnit, RenderError> {
        let copy = copy_props(self.name(), props)?;
        let cell = Arc::clone(&self.cell);
        Ok(RenderUnit::producer(async move {
            render_with_copy(cell, &pass, copy, slots.as_ref()).await
        }))
    }

    /// Runs `future` with a copy of `props` published.
    ///
    /// This is the slot-free form of [`render`](Self::render) for code that
    /// is not a component, such as data loaders invoked during a render.
    ///
    /// # Errors
    ///
    /// Returns `ContextError` if `props` cannot be copied or the cell
    /// refuses the activation.
    pub async fn scope<F>(&self, props: &T, future: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        let copy = props.deep_copy()?;
        let _guard = ActivationGuard::enter(Arc::clone(&self.cell), copy, None)?;
        Ok(future.await)
    }

    /// Binds props to this provider, producing a component the renderer
    /// can dispatch.
    #[must_use]
    pub fn with_props(&self, props: T) -> ProviderComponent<T> {
        ProviderComponent::new(self.clone(), props)
    }
}

fn copy_props<T: DeepCopy>(context: &str, props: &T) -> Result<T, RenderError> {
    props.deep_copy().map_err(|e| {
        warn!(context = %context, error = %e, "Failed to copy context value");
        RenderError::from(ContextError::from(e))
    })
}

async fn render_with_copy<T, S>(
    cell: Arc<ContextCell<T>>,
    pass: &RenderPass,
    copy: T,
    slots: &S,
) -> Result<RenderOutput, RenderError>
where
    T: Send + Sync + 'static,
    S: Slots + ?Sized,
{
    let span = debug_span!("context.provide", context = %cell.name(), render_pass = %pass.id);
    async move {
        let _guard = ActivationGuard::enter(cell, copy, Some(pass.id))?;
        slots.render_default(pass).await
    }
    .instrument(span)
    .await
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("context", &self.cell.name())
            .field("kind", &self.kind())
            .finish()
    }
}
