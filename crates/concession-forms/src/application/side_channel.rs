//! Best-effort side channel
//!
//! Calls whose outcome is recorded but never allowed to change the result of
//! the operation that issued them.

use std::fmt::Display;
use std::future::Future;

/// What happened to a best-effort call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed(String),
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Await `call` and capture its outcome instead of propagating it.
pub async fn best_effort<F, E>(label: &'static str, call: F) -> Delivery
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match call.await {
        Ok(()) => {
            tracing::debug!(call = label, "best-effort call delivered");
            Delivery::Delivered
        }
        Err(e) => {
            tracing::debug!(call = label, error = %e, "best-effort call failed, ignoring");
            Delivery::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failure_is_captured() {
        let outcome = best_effort("test", async { Err::<(), _>("boom") }).await;
        assert_eq!(outcome, Delivery::Failed("boom".into()));
        assert!(!outcome.is_delivered());
    }

    #[tokio::test]
    async fn test_success() {
        let outcome = best_effort("test", async { Ok::<(), String>(()) }).await;
        assert!(outcome.is_delivered());
    }
}
