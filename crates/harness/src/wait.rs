//! Bounded condition polling
//!
//! The suite never sleeps for a fixed duration. Every synchronization point
//! polls its condition under a budget and either observes it or times out
//! with a diagnostic naming what it was waiting for.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::error::{HarnessError, HarnessResult};

/// Polling policy: overall budget and probe cadence.
#[derive(Debug, Clone, Copy)]
pub struct Wait {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            interval: Duration::from_millis(100),
        }
    }
}

impl Wait {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Poll `probe` until it yields a value or the budget lapses.
    ///
    /// `Ok(None)` means the budget lapsed without a hit; probe errors
    /// propagate immediately. The probe always runs at least once.
    pub async fn poll<T, F, Fut>(&self, mut probe: F) -> HarnessResult<Option<T>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = HarnessResult<Option<T>>>,
    {
        let start = Instant::now();
        loop {
            if let Some(value) = probe().await? {
                return Ok(Some(value));
            }
            if start.elapsed() >= self.timeout {
                return Ok(None);
            }
            sleep(self.interval).await;
        }
    }

    /// Like [`poll`](Self::poll), but a lapsed budget is an error naming
    /// the awaited condition.
    pub async fn require<T, F, Fut>(&self, waiting_for: &str, probe: F) -> HarnessResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = HarnessResult<Option<T>>>,
    {
        self.poll(probe).await?.ok_or_else(|| HarnessError::WaitTimeout {
            waiting_for: waiting_for.to_string(),
            budget_ms: self.timeout.as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn poll_returns_first_hit() {
        let wait = Wait::default();
        let mut attempts = 0;

        let value = wait
            .poll(|| {
                attempts += 1;
                let hit = attempts >= 3;
                async move { Ok(hit.then_some("ready")) }
            })
            .await
            .unwrap();

        assert_eq!(value, Some("ready"));
        assert_eq!(attempts, 3);
    }

    #[tokio::test]
    async fn poll_gives_up_after_budget() {
        let wait = Wait {
            timeout: Duration::from_millis(30),
            interval: Duration::from_millis(10),
        };

        let value: Option<()> = wait.poll(|| async { Ok(None) }).await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn require_names_the_condition_on_timeout() {
        let wait = Wait {
            timeout: Duration::from_millis(10),
            interval: Duration::from_millis(5),
        };

        let err = wait
            .require::<(), _, _>("document ready", || async { Ok(None) })
            .await
            .unwrap_err();

        match err {
            HarnessError::WaitTimeout { waiting_for, .. } => {
                assert_eq!(waiting_for, "document ready");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn probe_errors_propagate() {
        let wait = Wait::default();

        let err = wait
            .poll::<(), _, _>(|| async {
                Err(HarnessError::Session("gone".into()))
            })
            .await
            .unwrap_err();

        assert!(matches!(err, HarnessError::Session(_)));
    }
}
