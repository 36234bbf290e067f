//! Provider decorator applying a caller-chosen retry and deadline policy.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{ModelProvider, ProviderRequest, ProviderResponse};
use crate::error::AgentError;
use crate::util::{with_timeout, RetryPolicy};

/// Wraps another provider; each `complete` call gets an optional per-attempt
/// deadline and is retried according to `retry`.
pub struct ResilientProvider {
    inner: Arc<dyn ModelProvider>,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl ResilientProvider {
    pub fn new(inner: Arc<dyn ModelProvider>) -> Self {
        Self {
            inner,
            retry: RetryPolicy::none(),
            timeout: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl ModelProvider for ResilientProvider {
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    async fn complete(&self, request: &ProviderRequest) -> Result<ProviderResponse, AgentError> {
        let inner = &self.inner;
        let timeout = self.timeout;
        self.retry
            .execute(move || async move {
                match timeout {
                    Some(deadline) => with_timeout(deadline, inner.complete(request)).await,
                    None => inner.complete(request).await,
                }
            })
            .await
    }
}
