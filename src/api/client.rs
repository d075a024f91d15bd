//! HTTP API Client
//!
//! Calls to the activities REST API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::state::snapshot::ActivitiesSnapshot;

// ============ Response Types ============

/// Body of a successful write
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of an error response. `detail` is usually a string but validation
/// failures send a list of objects instead.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

// ============ Client Trait ============

/// The three calls the board makes against the activities API
#[async_trait(?Send)]
pub trait ActivitiesApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;

    /// `DELETE /activities/{activity}/participants?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;
}

// ============ URLs ============

pub fn activities_url(api_base: &str) -> String {
    format!("{}/activities", api_base)
}

pub fn signup_url(api_base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        api_base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub fn participants_url(api_base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants?email={}",
        api_base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

// ============ Body Decoding ============

/// Decode the body of a 2xx response
pub fn decode_success<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode the body of a non-2xx response
pub fn decode_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => ApiError::Status {
            status,
            detail: error
                .detail
                .and_then(|d| d.as_str().map(str::to_string)),
        },
        Err(e) => ApiError::Decode(e.to_string()),
    }
}

// ============ Browser Client ============

/// `ActivitiesApi` over the browser's fetch, via `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpActivitiesApi {
    api_base: String,
}

impl HttpActivitiesApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if response.ok() {
            decode_success(&body)
        } else {
            Err(decode_error(status, &body))
        }
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for HttpActivitiesApi {
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError> {
        let url = activities_url(&self.api_base);
        tracing::debug!(%url, "fetching activities");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        let url = signup_url(&self.api_base, activity, email);
        tracing::debug!(%url, "signing up participant");

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        let url = participants_url(&self.api_base, activity, email);
        tracing::debug!(%url, "unregistering participant");

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read(response).await
    }
}
