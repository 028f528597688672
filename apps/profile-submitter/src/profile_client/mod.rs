//! Profile client: the only code in this crate that talks to the profile endpoints.
//!
//! Every public operation resolves to a `SubmissionResult`. Failures are classified
//! internally as `SubmitError` and flattened at the boundary; nothing is retried.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::cache::UserCache;
use crate::errors::SubmitError;
use crate::models::{Profile, SubmissionRequest, SubmissionResult};

/// Applied to the whole request, connect through body.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Cache data type under which fetched profiles are stored.
pub const PROFILE_DATA_TYPE: &str = "profile";

#[derive(Clone)]
pub struct ProfileClient {
    client: Client,
}

impl ProfileClient {
    pub fn new(timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn with_default_timeout() -> Result<Self, SubmitError> {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Sends the profile as query parameters in a single GET to `request.endpoint`.
    pub async fn submit(&self, request: &SubmissionRequest) -> SubmissionResult {
        info!(
            "Submitting profile for user {} to {}",
            request.user_id, request.endpoint
        );

        let outcome = self.try_submit(request).await;
        if let Err(e) = &outcome {
            warn!("Profile submission for user {} failed: {e}", request.user_id);
        }
        SubmissionResult::from_outcome(outcome)
    }

    /// Reads back a stored profile with `GET <endpoint>?user_id=<id>`.
    pub async fn fetch(&self, user_id: &str, endpoint: &str) -> SubmissionResult {
        info!("Fetching profile for user {user_id} from {endpoint}");

        let outcome = self.try_fetch(user_id, endpoint).await;
        if let Err(e) = &outcome {
            warn!("Profile fetch for user {user_id} failed: {e}");
        }
        SubmissionResult::from_outcome(outcome)
    }

    /// Like `fetch`, but answers from `cache` while the entry is fresh.
    /// Only successful payloads are cached.
    pub async fn fetch_cached(
        &self,
        cache: &UserCache,
        user_id: &str,
        endpoint: &str,
    ) -> SubmissionResult {
        if let Some(data) = cache.get(user_id, PROFILE_DATA_TYPE) {
            debug!("Profile cache hit for user {user_id}");
            return SubmissionResult::ok(StatusCode::OK.as_u16(), data);
        }

        let result = self.fetch(user_id, endpoint).await;
        if let (true, Some(data)) = (result.success, &result.data) {
            cache.set(user_id, PROFILE_DATA_TYPE, data.clone());
        }
        result
    }

    async fn try_submit(&self, request: &SubmissionRequest) -> Result<(u16, Value), SubmitError> {
        let params = build_query_params(request)?;

        let response = self
            .client
            .get(&request.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        debug!("Profile endpoint responded with {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let text = response.text().await?;
        Ok((status.as_u16(), parse_body(&text)))
    }

    async fn try_fetch(&self, user_id: &str, endpoint: &str) -> Result<(u16, Value), SubmitError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        let status = response.status();
        debug!("Profile endpoint responded with {status}");

        if status == StatusCode::NOT_FOUND {
            return Err(SubmitError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let text = response.text().await?;
        Ok((status.as_u16(), parse_body(&text)))
    }
}

/// One-shot submission with a fresh client and the default 30s timeout.
pub async fn submit_profile(
    user_id: &str,
    profile: Profile,
    resume_file_url: Option<&str>,
    resume_file_name: Option<&str>,
    endpoint: &str,
) -> SubmissionResult {
    let client = match ProfileClient::with_default_timeout() {
        Ok(c) => c,
        Err(e) => return SubmissionResult::failed(e.status_code(), e.to_string()),
    };

    let request = SubmissionRequest {
        user_id: user_id.to_string(),
        profile,
        resume_file_url: resume_file_url.map(str::to_string),
        resume_file_name: resume_file_name.map(str::to_string),
        endpoint: endpoint.to_string(),
    };

    client.submit(&request).await
}

/// Builds the query string pairs. `profile_data` is compact JSON in the map's order;
/// resume fields are left out entirely when absent or empty.
pub(crate) fn build_query_params(
    request: &SubmissionRequest,
) -> Result<Vec<(&'static str, String)>, SubmitError> {
    let mut params = vec![
        ("user_id", request.user_id.clone()),
        ("profile_data", serde_json::to_string(&request.profile)?),
    ];

    let optional = [
        ("resume_file_url", &request.resume_file_url),
        ("resume_file_name", &request.resume_file_name),
    ];
    for (key, value) in optional {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            params.push((key, v.to_string()));
        }
    }

    Ok(params)
}

/// Empty body yields `{}`; a body that is not JSON is kept verbatim under `raw`.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}
