//! The host renderer.

use super::Component;
use crate::config::RendererConfig;
use crate::core::{RenderFuture, RenderOutput, RenderPass, RenderUnit};
use crate::errors::RenderError;
use crate::events::{get_event_sink, EventSink};
use crate::helpers::run_with_timeout;
use crate::slots::Slots;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Drives components to their rendered output.
///
/// The renderer instantiates a component, dispatches on the
/// [`RenderUnit`] variant it returns, and awaits producers under the
/// configured timeout. The component's [`ComponentKind`] is reported in
/// logs and events only; the unit variant alone decides how it resolves.
/// Lifecycle events go to the renderer's own sink, or to the process-wide
/// sink when none is set.
///
/// [`ComponentKind`]: crate::core::ComponentKind
#[derive(Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
    sink: Option<Arc<dyn EventSink>>,
}

impl Renderer {
    /// Creates a renderer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with the given configuration.
    #[must_use]
    pub fn with_config(config: RendererConfig) -> Self {
        Self { config, sink: None }
    }

    /// Sets a dedicated event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn sink(&self) -> Arc<dyn EventSink> {
        self.sink.clone().unwrap_or_else(get_event_sink)
    }

    /// Renders `component` with `slots` as its children.
    ///
    /// # Errors
    ///
    /// Returns whatever the component or its children fail with, or
    /// `RenderError::Timeout` when a producer exceeds the render timeout.
    pub async fn render(
        &self,
        pass: &RenderPass,
        component: &dyn Component,
        slots: Arc<dyn Slots>,
    ) -> Result<RenderOutput, RenderError> {
        let sink = self.sink();
        let name = component.name().to_string();
        let kind = component.kind();
        sink.try_emit(
            "render.started",
            Some(json!({
                "component": name,
                "kind": kind.to_string(),
                "render_pass_id": pass.id.to_string(),
            })),
        );

        let started = Instant::now();
        let result = match component.instantiate(pass, slots) {
            Ok(RenderUnit::Single(output)) => Ok(output),
            Ok(RenderUnit::Producer(future)) => self.await_producer(future).await,
            Err(e) => Err(e),
        };
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        match &result {
            Ok(output) => {
                debug!(component = %name, %kind, duration_ms, bytes = output.html.len(), "Rendered component");
                sink.try_emit(
                    "render.completed",
                    Some(json!({
                        "component": name,
                        "render_pass_id": pass.id.to_string(),
                        "duration_ms": duration_ms,
                    })),
                );
            }
            Err(e) => {
                warn!(component = %name, %kind, error = %e, "Component render failed");
                sink.try_emit(
                    "render.failed",
                    Some(json!({
                        "component": name,
                        "render_pass_id": pass.id.to_string(),
                        "error": e.to_dict(),
                    })),
                );
            }
        }

        result
    }

    /// Renders a component and returns only its markup.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub async fn render_to_string(
        &self,
        pass: &RenderPass,
        component: &dyn Component,
        slots: Arc<dyn Slots>,
    ) -> Result<String, RenderError> {
        self.render(pass, component, slots)
            .await
            .map(RenderOutput::into_html)
    }

    async fn await_producer(&self, future: RenderFuture) -> Result<RenderOutput, RenderError> {
        match self.config.render_timeout() {
            None => future.await,
            Some(limit) => run_with_timeout(limit, future)
                .await
                .into_result(RenderError::Timeout(limit)),
        }
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
