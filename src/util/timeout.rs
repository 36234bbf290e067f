//! Timeout helper.

use std::future::Future;
use std::time::Duration;

use crate::error::AgentError;

/// Wrap a future with a timeout.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, AgentError>>,
) -> Result<T, AgentError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(AgentError::Timeout(duration.as_millis() as u64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_is_a_timeout_error() {
        let err = with_timeout(Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await
        .unwrap_err();

        assert!(matches!(err, AgentError::Timeout(50)));
    }

    #[tokio::test]
    async fn finished_future_passes_through() {
        let out = with_timeout(Duration::from_secs(1), async { Ok(42) }).await.unwrap();

        assert_eq!(out, 42);
    }
}
