//! Child content sources.
//!
//! A component receives its children as a [`Slots`] value. Only the default
//! slot exists: one asynchronous operation that yields exactly one rendered
//! output. Providers await it while their value is published.

use crate::core::{RenderOutput, RenderPass};
use crate::errors::RenderError;
use crate::render::{Component, Renderer};
use async_trait::async_trait;
use std::fmt::Debug;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Trait for the child content passed to a component.
#[async_trait]
pub trait Slots: Send + Sync {
    /// Renders the default slot.
    ///
    /// # Arguments
    ///
    /// * `pass` - The render pass the content belongs to
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError>;
}

/// Slots with no content; renders to an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySlots;

#[async_trait]
impl Slots for EmptySlots {
    async fn render_default(&self, _pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        Ok(RenderOutput::empty())
    }
}

/// A default slot with fixed content.
#[derive(Debug, Clone)]
pub struct StaticSlot {
    output: RenderOutput,
}

impl StaticSlot {
    /// Creates a static slot.
    pub fn new(output: impl Into<RenderOutput>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

#[async_trait]
impl Slots for StaticSlot {
    async fn render_default(&self, _pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        Ok(self.output.clone())
    }
}

/// A default slot rendered by a synchronous closure.
pub struct FnSlot<F>
where
    F: Fn(&RenderPass) -> Result<RenderOutput, RenderError> + Send + Sync,
{
    func: F,
}

impl<F> FnSlot<F>
where
    F: Fn(&RenderPass) -> Result<RenderOutput, RenderError> + Send + Sync,
{
    /// Creates a function-based slot.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Debug for FnSlot<F>
where
    F: Fn(&RenderPass) -> Result<RenderOutput, RenderError> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSlot").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> Slots for FnSlot<F>
where
    F: Fn(&RenderPass) -> Result<RenderOutput, RenderError> + Send + Sync,
{
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        (self.func)(pass)
    }
}

/// A default slot rendered by an async closure.
///
/// The closure receives an owned copy of the render pass so the future it
/// returns can be `'static`.
pub struct AsyncFnSlot<F, Fut>
where
    F: Fn(RenderPass) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RenderOutput, RenderError>> + Send + 'static,
{
    func: F,
    _phantom: PhantomData<fn() -> Fut>,
}

impl<F, Fut> AsyncFnSlot<F, Fut>
where
    F: Fn(RenderPass) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RenderOutput, RenderError>> + Send + 'static,
{
    /// Creates an async function-based slot.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, Fut> Debug for AsyncFnSlot<F, Fut>
where
    F: Fn(RenderPass) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RenderOutput, RenderError>> + Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncFnSlot").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> Slots for AsyncFnSlot<F, Fut>
where
    F: Fn(RenderPass) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RenderOutput, RenderError>> + Send + 'static,
{
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        (self.func)(pass.clone()).await
    }
}

/// A default slot that renders a nested component with its own children.
///
/// Chaining `ComponentSlot`s builds a render tree: a provider's slot renders
/// a child component, whose slot renders a grandchild, and so on.
pub struct ComponentSlot {
    renderer: Renderer,
    component: Arc<dyn Component>,
    children: Arc<dyn Slots>,
}

impl ComponentSlot {
    /// Creates a slot that renders `component` with `children`.
    pub fn new(renderer: Renderer, component: Arc<dyn Component>, children: Arc<dyn Slots>) -> Self {
        Self {
            renderer,
            component,
            children,
        }
    }

    /// Creates a slot that renders a leaf component.
    pub fn leaf(renderer: Renderer, component: Arc<dyn Component>) -> Self {
        Self::new(renderer, component, Arc::new(EmptySlots))
    }
}

impl Debug for ComponentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentSlot")
            .field("component", &self.component.name())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Slots for ComponentSlot {
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        self.renderer
            .render(pass, self.component.as_ref(), Arc::clone(&self.children))
            .await
    }
}

/// A sequence of slots rendered in order and concatenated.
pub struct Fragment {
    parts: Vec<Arc<dyn Slots>>,
}

impl Fragment {
    /// Creates a fragment from its parts.
    pub fn new(parts: Vec<Arc<dyn Slots>>) -> Self {
        Self { parts }
    }
}

impl Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("parts", &self.parts.len())
            .finish()
    }
}

#[async_trait]
impl Slots for Fragment {
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        let mut outputs = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            outputs.push(part.render_default(pass).await?);
        }
        Ok(RenderOutput::concat(outputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_slots() {
        let output = EmptySlots.render_default(&RenderPass::new()).await.unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_static_slot() {
        let slot = StaticSlot::new("<p>hi</p>");
        let output = slot.render_default(&RenderPass::new()).await.unwrap();
        assert_eq!(output.html(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fn_slot_sees_pass() {
        let pass = RenderPass::new().with_route("/about");
        let slot = FnSlot::new(|pass: &RenderPass| {
            Ok(RenderOutput::new(pass.route.clone().unwrap_or_default()))
        });
        let output = slot.render_default(&pass).await.unwrap();
        assert_eq!(output.html(), "/about");
    }

    #[tokio::test]
    async fn test_async_fn_slot() {
        let slot = AsyncFnSlot::new(|_pass| async {
            tokio::task::yield_now().await;
            Ok(RenderOutput::new("async"))
        });
        let output = slot.render_default(&RenderPass::new()).await.unwrap();
        assert_eq!(output.html(), "async");
    }

    #[tokio::test]
    async fn test_fragment_concatenates_in_order() {
        let fragment = Fragment::new(vec![
            Arc::new(StaticSlot::new("a")),
            Arc::new(EmptySlots),
            Arc::new(StaticSlot::new("b")),
        ]);
        let output = fragment.render_default(&RenderPass::new()).await.unwrap();
        assert_eq!(output.html(), "ab");
    }

    #[tokio::test]
    async fn test_fragment_stops_at_first_error() {
        let fragment = Fragment::new(vec![
            Arc::new(FnSlot::new(|_: &RenderPass| Err(RenderError::slot("broken")))),
            Arc::new(StaticSlot::new("never")),
        ]);
        let result = fragment.render_default(&RenderPass::new()).await;
        assert!(matches!(result, Err(RenderError::Slot(msg)) if msg == "broken"));
    }
}
