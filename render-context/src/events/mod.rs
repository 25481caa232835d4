//! Event sinks for observability.
//!
//! Context cells and the renderer report lifecycle events here. A sink can
//! be passed to a [`Renderer`](crate::render::Renderer) directly; otherwise
//! the process-wide sink is used, which defaults to [`NoOpEventSink`].

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL_EVENT_SINK: RwLock<Option<Arc<dyn EventSink>>> = RwLock::new(None);

/// Sets the process-wide event sink.
pub fn set_event_sink(sink: Arc<dyn EventSink>) {
    *GLOBAL_EVENT_SINK.write() = Some(sink);
}

/// Clears the process-wide event sink.
pub fn clear_event_sink() {
    *GLOBAL_EVENT_SINK.write() = None;
}

/// Gets the process-wide event sink.
///
/// Returns a `NoOpEventSink` if no sink is set.
pub fn get_event_sink() -> Arc<dyn EventSink> {
    GLOBAL_EVENT_SINK
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(NoOpEventSink))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_sink_default() {
        let sink = get_event_sink();
        sink.try_emit("test", None);
    }

    #[test]
    fn test_cells_report_to_global_sink() {
        use crate::config::ContextConfig;
        use crate::context::ContextCell;

        let sink = Arc::new(CollectingEventSink::new());
        set_event_sink(sink.clone());

        let cell = Arc::new(ContextCell::new(
            ContextConfig::new().with_name("global-sink-check"),
        ));
        drop(crate::context::ActivationGuard::enter(cell, 1_u8, None));
        clear_event_sink();

        let ours: Vec<String> = sink
            .events()
            .into_iter()
            .filter(|(_, data)| {
                data.as_ref()
                    .is_some_and(|d| d["context"] == "global-sink-check")
            })
            .map(|(t, _)| t)
            .collect();
        assert_eq!(ours, vec!["context.provided", "context.cleared"]);
    }
}
