//! HTTP client for the spreadsheet-backed project store.
//!
//! The store is a single URL. `GET` answers with an envelope
//! `{ success, data | error }`; `POST` takes the whole project array and
//! replaces the sheet contents.

use crate::domain::Project;
use crate::error::StoreError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct FetchReply {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Project>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PushReply {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    endpoint: String,
}

impl RemoteStore {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pomotrack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full project list
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, StoreError> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        let body = response.text().await?;
        let reply: FetchReply = serde_json::from_str(&body)?;
        if reply.success {
            Ok(reply.data.unwrap_or_default())
        } else {
            Err(StoreError::Remote(
                reply
                    .error
                    .unwrap_or_else(|| "Failed to fetch projects.".to_string()),
            ))
        }
    }

    /// Replace the remote list with `projects`.
    ///
    /// The reply body is optional; only a readable `success: false` counts
    /// as a failure besides transport errors and error statuses.
    pub async fn push_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(projects)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<PushReply>(&body) {
            Ok(reply) if !reply.success => Err(StoreError::Remote(
                reply
                    .error
                    .unwrap_or_else(|| "Failed to save projects.".to_string()),
            )),
            _ => Ok(()),
        }
    }
}
