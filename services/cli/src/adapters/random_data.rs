//! services/cli/src/adapters/random_data.rs
//!
//! This module contains the adapter for the random-data-api.com user
//! endpoint. It implements the `UserSource` port from the core crate.

use async_trait::async_trait;
use tracing::warn;
use user_browser_core::domain::UserRecord;
use user_browser_core::ports::{FetchError, SourceResult, UserSource};

/// An adapter that implements the `UserSource` port over a plain HTTP GET.
///
/// One request per `fetch_user` call, no retries; the client's timeout
/// bounds how long a single attempt may take.
#[derive(Clone)]
pub struct RandomDataSource {
    client: reqwest::Client,
    endpoint: String,
}

impl RandomDataSource {
    /// Creates a new `RandomDataSource` for the given endpoint URL.
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl UserSource for RandomDataSource {
    async fn fetch_user(&self) -> SourceResult<UserRecord> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "request to the user endpoint failed");
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "user endpoint returned a non-success status");
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<UserRecord>().await.map_err(|e| {
            warn!(error = %e, "user endpoint returned an undecodable body");
            FetchError::Malformed(e.to_string())
        })
    }
}
