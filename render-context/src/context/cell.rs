//! The shared slot behind a provider/accessor pair.

use crate::config::{ContextConfig, ReentryPolicy};
use crate::core::ContextState;
use crate::errors::ContextError;
use crate::events::{get_event_sink, EventSink};
use crate::observability::ContextSpanAttributes;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// One live publication of a value.
struct Activation<T> {
    id: u64,
    value: Arc<T>,
}

/// Holds the value a provider publishes while it renders its children.
///
/// The cell is owned by one factory and shared (through `Arc`) by every
/// provider and accessor that factory hands out. The last entry in the
/// activation list is the value accessors observe. How entries are added
/// and removed depends on the configured [`ReentryPolicy`].
///
/// The cell is not a synchronization point for a render: two providers from
/// the same factory rendering interleaved subtrees at the same time will
/// observe each other's values unless the policy is `Reject`.
pub struct ContextCell<T> {
    config: ContextConfig,
    sink: Option<Arc<dyn EventSink>>,
    next_id: AtomicU64,
    activations: RwLock<Vec<Activation<T>>>,
}

impl<T> ContextCell<T> {
    /// Creates an unset cell.
    #[must_use]
    pub fn new(config: ContextConfig) -> Self {
        Self {
            config,
            sink: None,
            next_id: AtomicU64::new(1),
            activations: RwLock::new(Vec::new()),
        }
    }

    /// Reports events to `sink` instead of the process-wide sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns the context name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the re-entry policy.
    #[must_use]
    pub fn policy(&self) -> ReentryPolicy {
        self.config.reentry
    }

    /// Returns the value currently published, if any.
    #[must_use]
    pub fn current(&self) -> Option<Arc<T>> {
        self.activations.read().last().map(|a| Arc::clone(&a.value))
    }

    /// Returns the cell state.
    #[must_use]
    pub fn state(&self) -> ContextState {
        if self.is_active() {
            ContextState::Active
        } else {
            ContextState::Unset
        }
    }

    /// Returns true if a value is published.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.activations.read().is_empty()
    }

    /// Returns the number of live activations.
    ///
    /// Always 0 or 1 under `Replace` and `Reject`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.activations.read().len()
    }

    /// Publishes `value` and returns the id of the new activation.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Reentrant` if the policy is `Reject` and the
    /// cell is already active.
    pub(crate) fn enter(&self, value: T, render_pass: Option<Uuid>) -> Result<u64, ContextError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let depth = {
            let mut activations = self.activations.write();
            match self.config.reentry {
                ReentryPolicy::Replace => activations.clear(),
                ReentryPolicy::Nest => {}
                ReentryPolicy::Reject => {
                    if let Some(active) = activations.last().map(|a| a.id) {
                        let depth = activations.len();
                        drop(activations);
                        warn!(
                            context = %self.config.name,
                            active,
                            "Rejected nested provider"
                        );
                        self.emit("context.rejected", id, depth, render_pass);
                        return Err(ContextError::Reentrant {
                            context: self.config.name.clone(),
                            active,
                        });
                    }
                }
            }
            activations.push(Activation {
                id,
                value: Arc::new(value),
            });
            activations.len()
        };

        debug!(context = %self.config.name, activation = id, depth, "Context provided");
        self.emit("context.provided", id, depth, render_pass);
        Ok(id)
    }

    /// Ends the activation `id`.
    ///
    /// Under `Replace` this clears the cell regardless of which activation
    /// is exiting. Otherwise only the matching entry is removed, so an
    /// enclosing activation becomes visible again.
    pub(crate) fn exit(&self, id: u64) {
        let depth = {
            let mut activations = self.activations.write();
            match self.config.reentry {
                ReentryPolicy::Replace => activations.clear(),
                ReentryPolicy::Nest | ReentryPolicy::Reject => {
                    activations.retain(|a| a.id != id);
                }
            }
            activations.len()
        };

        debug!(context = %self.config.name, activation = id, depth, "Context cleared");
        self.emit("context.cleared", id, depth, None);
    }

    fn emit(&self, event_type: &str, id: u64, depth: usize, render_pass: Option<Uuid>) {
        if !self.config.emit_events {
            return;
        }
        let mut attrs = ContextSpanAttributes::new(&self.config.name, id)
            .with_depth(depth)
            .with_policy(self.config.reentry);
        if let Some(pass) = render_pass {
            attrs = attrs.with_render_pass(pass);
        }
        let sink = self.sink.clone().unwrap_or_else(get_event_sink);
        sink.try_emit(event_type, Some(attrs.to_event_data()));
    }
}

impl<T> Default for ContextCell<T> {
    fn default() -> Self {
        Self::new(ContextConfig::default())
    }
}

impl<T> fmt::Debug for ContextCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextCell")
            .field("name", &self.config.name)
            .field("policy", &self.config.reentry)
            .field("depth", &self.depth())
            .finish()
    }
}
