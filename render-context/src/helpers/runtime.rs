//! Runtime helpers for bounded rendering.

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Result of a timed operation.
#[derive(Debug)]
pub enum TimedResult<T, E> {
    /// Operation completed successfully.
    Ok(T),
    /// Operation failed with an error.
    Err(E),
    /// Operation timed out.
    Timeout,
}

impl<T, E> TimedResult<T, E> {
    /// Returns true if the operation succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, TimedResult::Ok(_))
    }

    /// Returns true if the operation failed.
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, TimedResult::Err(_))
    }

    /// Returns true if the operation timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, TimedResult::Timeout)
    }

    /// Converts to a standard Result, treating timeout as an error.
    pub fn into_result(self, timeout_error: E) -> Result<T, E> {
        match self {
            TimedResult::Ok(v) => Ok(v),
            TimedResult::Err(e) => Err(e),
            TimedResult::Timeout => Err(timeout_error),
        }
    }
}

/// Runs a future with a timeout.
///
/// On timeout the future is dropped before this returns, so any guards it
/// holds have already run.
pub async fn run_with_timeout<T, E, F>(duration: Duration, future: F) -> TimedResult<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match timeout(duration, future).await {
        Ok(Ok(value)) => TimedResult::Ok(value),
        Ok(Err(error)) => TimedResult::Err(error),
        Err(_) => TimedResult::Timeout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_result() {
        let ok: TimedResult<i32, &str> = TimedResult::Ok(42);
        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert!(!ok.is_timeout());

        let err: TimedResult<i32, &str> = TimedResult::Err("error");
        assert!(err.is_err());

        let timeout: TimedResult<i32, &str> = TimedResult::Timeout;
        assert!(timeout.is_timeout());
    }

    #[test]
    fn test_timed_result_into_result() {
        let ok: TimedResult<i32, &str> = TimedResult::Ok(42);
        assert_eq!(ok.into_result("timeout"), Ok(42));

        let timeout: TimedResult<i32, &str> = TimedResult::Timeout;
        assert_eq!(timeout.into_result("timeout"), Err("timeout"));
    }

    #[tokio::test]
    async fn test_run_with_timeout_success() {
        let result: TimedResult<i32, &str> =
            run_with_timeout(Duration::from_secs(1), async { Ok(42) }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_with_timeout_timeout() {
        let result: TimedResult<i32, &str> = run_with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(42)
        })
        .await;
        assert!(result.is_timeout());
    }

    #[tokio::test]
    async fn test_timeout_drops_future() {
        struct Flag(std::sync::Arc<std::sync::atomic::AtomicBool>);
        impl Drop for Flag {
            fn drop(&mut self) {
                self.0.store(true, std::sync::atomic::Ordering::SeqCst);
            }
        }

        let dropped = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = Flag(dropped.clone());
        let result: TimedResult<(), &str> = run_with_timeout(Duration::from_millis(5), async move {
            let _flag = flag;
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(())
        })
        .await;

        assert!(result.is_timeout());
        assert!(dropped.load(std::sync::atomic::Ordering::SeqCst));
    }
}
