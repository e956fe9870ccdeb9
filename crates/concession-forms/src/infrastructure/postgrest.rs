//! PostgREST datastore client
//!
//! Talks to a Supabase-style REST endpoint: `slots` holds the per-date
//! timeslot counts and `form_submissions` receives new applications.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::domain::aggregates::SubmissionRecord;
use crate::domain::services::SlotCount;
use crate::ports::outbound::{ConcessionStore, RepositoryError};

const SLOTS_TABLE: &str = "slots";
const SUBMISSIONS_TABLE: &str = "form_submissions";

pub struct PostgrestStore {
    client: reqwest::Client,
    base_url: String,
}

impl PostgrestStore {
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self, RepositoryError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = api_key {
            let invalid = |e: reqwest::header::InvalidHeaderValue| RepositoryError::Connection(e.to_string());
            headers.insert("apikey", HeaderValue::from_str(key).map_err(invalid)?);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", key)).map_err(invalid)?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, RepositoryError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Query(format!("{}: {}", status, text)));
        }
        Ok(response)
    }
}

#[async_trait]
impl ConcessionStore for PostgrestStore {
    async fn slot_counts(&self, date: NaiveDate) -> Result<Vec<SlotCount>, RepositoryError> {
        let response = self
            .client
            .get(self.table_url(SLOTS_TABLE))
            .query(&[
                ("select", "timeslot,count".to_string()),
                ("collectiondate", format!("eq.{}", date.format("%Y-%m-%d"))),
            ])
            .send()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    async fn insert_submission(&self, record: &SubmissionRecord) -> Result<(), RepositoryError> {
        let response = self
            .client
            .post(self.table_url(SUBMISSIONS_TABLE))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}
