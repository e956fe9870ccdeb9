//! Workflow webhook
//!
//! Posts each stored submission to the configured workflow endpoint. The
//! response is not read: whatever status comes back counts as delivered.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::domain::aggregates::Submission;
use crate::ports::outbound::{NotificationError, WorkflowNotifier};

pub struct HttpWorkflowNotifier {
    client: reqwest::Client,
    url: String,
}

impl HttpWorkflowNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl WorkflowNotifier for HttpWorkflowNotifier {
    async fn notify(&self, submission: &Submission) -> Result<(), NotificationError> {
        let payload =
            serde_json::to_string(submission).map_err(|e| NotificationError::Encoding(e.to_string()))?;

        self.client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Used when no workflow endpoint is configured
#[derive(Default)]
pub struct NoOpNotifier;

#[async_trait]
impl WorkflowNotifier for NoOpNotifier {
    async fn notify(&self, _submission: &Submission) -> Result<(), NotificationError> {
        Ok(())
    }
}
