//! Component trait and implementations.

use crate::context::{DeepCopy, Provider};
use crate::core::{ComponentKind, RenderOutput, RenderPass, RenderUnit};
use crate::errors::RenderError;
use crate::slots::Slots;
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for components the renderer can dispatch.
///
/// Instantiation is synchronous and cheap; any asynchronous work is
/// deferred into a [`RenderUnit::Producer`].
pub trait Component: Send + Sync {
    /// Returns the name of the component.
    fn name(&self) -> &str;

    /// Returns the capability the component declares.
    fn kind(&self) -> ComponentKind {
        ComponentKind::Plain
    }

    /// Instantiates the component for one render pass.
    ///
    /// # Arguments
    ///
    /// * `pass` - The render pass
    /// * `slots` - The component's child content
    fn instantiate(&self, pass: &RenderPass, slots: Arc<dyn Slots>) -> Result<RenderUnit, RenderError>;
}

/// A provider bound to the props it will publish.
pub struct ProviderComponent<T> {
    provider: Provider<T>,
    props: T,
}

impl<T> ProviderComponent<T> {
    pub(crate) fn new(provider: Provider<T>, props: T) -> Self {
        Self { provider, props }
    }

    /// Returns the bound props.
    #[must_use]
    pub fn props(&self) -> &T {
        &self.props
    }

    /// Returns mutable access to the bound props.
    ///
    /// Changes only affect renders instantiated afterwards.
    pub fn props_mut(&mut self) -> &mut T {
        &mut self.props
    }
}

impl<T> Debug for ProviderComponent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderComponent")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl<T> Component for ProviderComponent<T>
where
    T: DeepCopy + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn kind(&self) -> ComponentKind {
        self.provider.kind()
    }

    fn instantiate(&self, pass: &RenderPass, slots: Arc<dyn Slots>) -> Result<RenderUnit, RenderError> {
        self.provider.provide(pass.clone(), &self.props, slots)
    }
}

/// A plain component backed by a closure.
pub struct FnComponent<F>
where
    F: Fn(&RenderPass, Arc<dyn Slots>) -> Result<RenderUnit, RenderError> + Send + Sync,
{
    name: String,
    func: F,
}

impl<F> FnComponent<F>
where
    F: Fn(&RenderPass, Arc<dyn Slots>) -> Result<RenderUnit, RenderError> + Send + Sync,
{
    /// Creates a function-based component.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Debug for FnComponent<F>
where
    F: Fn(&RenderPass, Arc<dyn Slots>) -> Result<RenderUnit, RenderError> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComponent")
            .field("name", &self.name)
            .finish()
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&RenderPass, Arc<dyn Slots>) -> Result<RenderUnit, RenderError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn instantiate(&self, pass: &RenderPass, slots: Arc<dyn Slots>) -> Result<RenderUnit, RenderError> {
        (self.func)(pass, slots)
    }
}

/// Wraps its default slot in an HTML element.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
}

impl Element {
    /// Creates an element component for `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Component for Element {
    fn name(&self) -> &str {
        &self.tag
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Factory
    }

    fn instantiate(&self, pass: &RenderPass, slots: Arc<dyn Slots>) -> Result<RenderUnit, RenderError> {
        let pass = pass.clone();
        let open = format!("<{}>", self.tag);
        let close = format!("</{}>", self.tag);
        Ok(RenderUnit::producer(async move {
            let inner: RenderOutput = slots.render_default(&pass).await?;
            Ok(inner.wrap(&open, &close))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::create_context;
    use crate::slots::{EmptySlots, StaticSlot};

    #[tokio::test]
    async fn test_fn_component() {
        let component = FnComponent::new("hello", |_pass: &RenderPass, _slots: Arc<dyn Slots>| {
            Ok(RenderUnit::single("hello"))
        });
        assert_eq!(component.name(), "hello");
        assert_eq!(component.kind(), ComponentKind::Plain);

        let unit = component
            .instantiate(&RenderPass::new(), Arc::new(EmptySlots))
            .unwrap();
        assert_eq!(unit.resolve().await.unwrap().html(), "hello");
    }

    #[tokio::test]
    async fn test_element_wraps_slot() {
        let element = Element::new("section");
        assert!(element.kind().is_factory());

        let unit = element
            .instantiate(&RenderPass::new(), Arc::new(StaticSlot::new("body")))
            .unwrap();
        assert!(unit.is_producer());
        assert_eq!(unit.resolve().await.unwrap().html(), "<section>body</section>");
    }

    #[tokio::test]
    async fn test_provider_component_is_factory() {
        let (provider, _accessor) = create_context::<String>();
        let component = provider.with_props("x".to_string());

        assert_eq!(component.kind(), ComponentKind::Factory);
        assert_eq!(component.name(), "context");
        assert_eq!(component.props(), "x");
    }
}
