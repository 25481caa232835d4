//! The tagged value a component hands to the renderer.

use super::RenderOutput;
use crate::errors::RenderError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;

/// A boxed, sendable future producing exactly one rendered output.
pub type RenderFuture = BoxFuture<'static, Result<RenderOutput, RenderError>>;

/// What a component produces when instantiated.
///
/// The renderer dispatches on the variant instead of probing for marker
/// properties. A producer yields exactly one value; there is no stream.
pub enum RenderUnit {
    /// Output that is already available.
    Single(RenderOutput),
    /// Output that becomes available once the future completes.
    Producer(RenderFuture),
}

impl RenderUnit {
    /// Creates a unit from ready output.
    #[must_use]
    pub fn single(output: impl Into<RenderOutput>) -> Self {
        Self::Single(output.into())
    }

    /// Creates a unit from a future.
    pub fn producer<F>(future: F) -> Self
    where
        F: Future<Output = Result<RenderOutput, RenderError>> + Send + 'static,
    {
        Self::Producer(future.boxed())
    }

    /// Returns true if rendering still has to be awaited.
    #[must_use]
    pub fn is_producer(&self) -> bool {
        matches!(self, Self::Producer(_))
    }

    /// Drives the unit to its single output.
    pub async fn resolve(self) -> Result<RenderOutput, RenderError> {
        match self {
            Self::Single(output) => Ok(output),
            Self::Producer(future) => future.await,
        }
    }
}

impl fmt::Debug for RenderUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(output) => f.debug_tuple("Single").field(output).finish(),
            Self::Producer(_) => f.debug_tuple("Producer").field(&"<future>").finish(),
        }
    }
}

impl From<RenderOutput> for RenderUnit {
    fn from(output: RenderOutput) -> Self {
        Self::Single(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_resolves_immediately() {
        let unit = RenderUnit::single("<b>x</b>");
        assert!(!unit.is_producer());
        assert_eq!(unit.resolve().await.unwrap().html(), "<b>x</b>");
    }

    #[tokio::test]
    async fn test_producer_is_lazy() {
        let polled = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = polled.clone();
        let unit = RenderUnit::producer(async move {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok(RenderOutput::new("late"))
        });

        assert!(unit.is_producer());
        assert!(!polled.load(std::sync::atomic::Ordering::SeqCst));
        assert_eq!(unit.resolve().await.unwrap().html(), "late");
        assert!(polled.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_producer_propagates_error() {
        let unit = RenderUnit::producer(async { Err(RenderError::slot("nope")) });
        assert!(matches!(unit.resolve().await, Err(RenderError::Slot(_))));
    }

    #[test]
    fn test_debug_hides_future() {
        let unit = RenderUnit::producer(async { Ok(RenderOutput::empty()) });
        assert_eq!(format!("{unit:?}"), r#"Producer("<future>")"#);
    }
}
