//! Mock slots for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::context::Accessor;
use crate::core::{RenderOutput, RenderPass};
use crate::errors::RenderError;
use crate::slots::Slots;

/// A slot that records what an accessor returns each time it renders.
///
/// Stands in for a descendant component calling the accessor.
pub struct RecordingSlot<T> {
    accessor: Accessor<T>,
    seen: Mutex<Vec<Option<Arc<T>>>>,
    output: RenderOutput,
}

impl<T> RecordingSlot<T> {
    /// Creates a recording slot that renders empty output.
    #[must_use]
    pub fn new(accessor: Accessor<T>) -> Self {
        Self::with_output(accessor, RenderOutput::empty())
    }

    /// Creates a recording slot that renders `output`.
    pub fn with_output(accessor: Accessor<T>, output: impl Into<RenderOutput>) -> Self {
        Self {
            accessor,
            seen: Mutex::new(Vec::new()),
            output: output.into(),
        }
    }

    /// Returns every observed value, in render order.
    #[must_use]
    pub fn seen(&self) -> Vec<Option<Arc<T>>> {
        self.seen.lock().clone()
    }

    /// Returns the most recently observed value.
    #[must_use]
    pub fn last_seen(&self) -> Option<Arc<T>> {
        self.seen.lock().last().cloned().flatten()
    }

    /// Returns the number of renders.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl<T> std::fmt::Debug for RecordingSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSlot")
            .field("context", &self.accessor.name())
            .field("render_count", &self.render_count())
            .finish()
    }
}

#[async_trait]
impl<T: Send + Sync> Slots for RecordingSlot<T> {
    async fn render_default(&self, _pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        self.seen.lock().push(self.accessor.get());
        Ok(self.output.clone())
    }
}

/// A slot that always fails.
#[derive(Debug, Clone)]
pub struct FailingSlot {
    error: String,
}

impl FailingSlot {
    /// Creates a failing slot with the given message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[async_trait]
impl Slots for FailingSlot {
    async fn render_default(&self, _pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        Err(RenderError::slot(self.error.clone()))
    }
}

/// A slot that sleeps before delegating to an inner slot.
pub struct SlowSlot {
    delay: Duration,
    inner: Arc<dyn Slots>,
}

impl SlowSlot {
    /// Creates a slow slot.
    #[must_use]
    pub fn new(delay: Duration, inner: Arc<dyn Slots>) -> Self {
        Self { delay, inner }
    }
}

impl std::fmt::Debug for SlowSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlowSlot")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Slots for SlowSlot {
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        tokio::time::sleep(self.delay).await;
        self.inner.render_default(pass).await
    }
}

/// A slot with configurable output that counts calls.
#[derive(Debug, Default)]
pub struct MockSlot {
    output: Mutex<RenderOutput>,
    call_count: Mutex<usize>,
    passes: Mutex<Vec<uuid::Uuid>>,
}

impl MockSlot {
    /// Creates a mock slot with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output to return.
    pub fn set_output(&self, output: impl Into<RenderOutput>) {
        *self.output.lock() = output.into();
    }

    /// Returns the number of times the slot was rendered.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }

    /// Returns the render pass IDs of each call.
    #[must_use]
    pub fn recorded_passes(&self) -> Vec<uuid::Uuid> {
        self.passes.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        *self.call_count.lock() = 0;
        self.passes.lock().clear();
    }
}

#[async_trait]
impl Slots for MockSlot {
    async fn render_default(&self, pass: &RenderPass) -> Result<RenderOutput, RenderError> {
        *self.call_count.lock() += 1;
        self.passes.lock().push(pass.id);
        Ok(self.output.lock().clone())
    }
}
