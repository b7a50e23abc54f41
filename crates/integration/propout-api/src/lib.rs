//! Typed client for the PropOut booking backend.
//!
//! Three calls, no caching, no retries. The backend wraps every read in a
//! `{success, data}` envelope; that envelope is unwrapped here so the rest of
//! the client works with plain records.

use propout_core::{BookingReceipt, BookingRequest, Property, PropertyFilters};
use serde::Deserialize;
use tracing::debug;

/// Production backend. Override with `PROPOUT_API_URL` for local stacks.
pub const DEFAULT_BASE_URL: &str = "https://propout-backend.vercel.app/api";

pub const BASE_URL_ENV: &str = "PROPOUT_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, timeout or body-decode failure from the HTTP stack.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx reply; `message` is the backend's error body when it sent one.
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// Text fit for showing to the user: the server's own message when
    /// present, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { status, .. } => {
                format!("The server rejected the request ({status}).")
            }
            Self::Transport(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Property>,
}

#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    data: Property,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the backend's `{message}` out of an error body, if it parses as one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Client against `PROPOUT_API_URL`, falling back to the production
    /// backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /properties`, filtered. Returns the unwrapped list.
    pub async fn get_properties(
        &self,
        filters: &PropertyFilters,
    ) -> Result<Vec<Property>, ApiError> {
        let url = format!("{}/properties", self.base_url);
        debug!(%url, ?filters, "fetching property list");
        let response = self
            .http
            .get(&url)
            .query(&filters.to_query())
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let envelope: ListEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    /// `GET /properties/{id}`. A missing record surfaces as
    /// `ApiError::Status` with the backend's 404 body.
    pub async fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        let url = format!("{}/properties/{}", self.base_url, id);
        debug!(%url, "fetching property");
        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let envelope: ItemEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    /// `POST /bookings`. The receipt is the raw response body; rejections
    /// carry the server's message for display.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, ApiError> {
        let url = format!("{}/bookings", self.base_url);
        debug!(%url, "submitting booking request");
        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}
