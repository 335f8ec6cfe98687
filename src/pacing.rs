use async_trait::async_trait;
use std::time::Duration;

/// Wait inserted between generation requests.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, interval: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn pause(&self, _interval: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_pacer_waits() {
        let started = Instant::now();
        TokioPacer.pause(Duration::from_millis(30)).await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_noop_pacer_returns_immediately() {
        let started = Instant::now();
        NoopPacer.pause(Duration::from_secs(65)).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
