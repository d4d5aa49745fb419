//! HTTP client for the simulation backend.
//!
//! [`ApiClient`] speaks the backend's five-endpoint surface: `GET /state`,
//! `POST /optimize`, `POST /reset`, `POST /tick/normal`, and
//! `POST /tick/optimized`. Snapshot bodies are decoded strictly: a body
//! missing any core field is a decode failure, never a default.
//!
//! The client implements [`SimulationBackend`], so a run controller can
//! drive it directly.

use signalbox_core::backend::SimulationBackend;
use signalbox_types::{RunMode, SimulationSnapshot};
use tracing::debug;

use crate::error::ClientError;

/// Default base URL for a locally hosted simulation backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/simulation";

/// Client for the simulation backend's HTTP API.
///
/// No per-request timeout is set: a hanging backend stalls the run
/// rather than failing it mid-tick.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the current simulation state without advancing it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend answers
    /// with a non-success status, or the body is not a valid snapshot.
    pub async fn fetch_state(&self) -> Result<SimulationSnapshot, ClientError> {
        let url = format!("{}/state", self.base_url);
        debug!(%url, "fetching simulation state");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("GET /state failed: {e}")))?;

        decode_snapshot(check_status(response).await?).await
    }
}

impl SimulationBackend for ApiClient {
    type Error = ClientError;

    async fn request_plan(&self) -> Result<String, ClientError> {
        let url = format!("{}/optimize", self.base_url);
        debug!(%url, "requesting AI plan");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("POST /optimize failed: {e}")))?;

        check_status(response)
            .await?
            .text()
            .await
            .map_err(|e| ClientError::Decode(format!("plan body read failed: {e}")))
    }

    async fn reset(&self) -> Result<(), ClientError> {
        let url = format!("{}/reset", self.base_url);
        debug!(%url, "resetting simulation");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("POST /reset failed: {e}")))?;

        // The body is ignored, the status is not: a failed reset must not
        // let a run proceed on stale state.
        check_status(response).await.map(|_response| ())
    }

    async fn tick(&self, mode: RunMode) -> Result<SimulationSnapshot, ClientError> {
        let segment = if mode.is_optimized() { "optimized" } else { "normal" };
        let url = format!("{}/tick/{segment}", self.base_url);
        debug!(%url, "advancing one tick");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("POST /tick/{segment} failed: {e}")))?;

        decode_snapshot(check_status(response).await?).await
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// Pass a success response through; turn anything else into a status error
/// carrying whatever error body the backend sent.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_owned());
    Err(ClientError::Status(format!("{status}: {error_body}")))
}

/// Decode a snapshot body. Strict: missing core fields fail the decode.
async fn decode_snapshot(response: reqwest::Response) -> Result<SimulationSnapshot, ClientError> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(format!("snapshot decode failed: {e}")))
}
