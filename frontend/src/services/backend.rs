//! Service HTTP navigateur (gloo-net) pour le workflow d'upload.
//!
//! Same contract as the native reqwest backend: one attempt per call,
//! no timeout beyond the browser's, non-2xx mapped to `Status`.

use gloo_net::http::{Request, Response};
use snareshare::config::{endpoint, AD_FORM_PATH, PRESIGN_PATH};
use snareshare::{
    AdSubmission, Backend, SelectedFile, TransportError, TransportResult, UploadCredentials,
};

use crate::config::API_BASE_URL;

/// Fetch-based backend for the browser.
#[derive(Debug, Clone)]
pub struct FetchBackend {
    api_base: String,
}

impl FetchBackend {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl Default for FetchBackend {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl Backend for FetchBackend {
    async fn fetch_credentials(&self, filename: &str) -> TransportResult<UploadCredentials> {
        let url = endpoint(&self.api_base, PRESIGN_PATH);
        let response = Request::get(&url)
            .query([("filename", filename)])
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        ensure_ok(response)
            .await?
            .json::<UploadCredentials>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn put_object(&self, upload_url: &str, file: &SelectedFile) -> TransportResult<()> {
        let body = js_sys::Uint8Array::from(file.bytes.as_slice());
        let request = Request::put(upload_url)
            .header("Content-Type", file.content_type())
            .body(body)
            .map_err(|e| TransportError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn submit_ad_form(&self, submission: &AdSubmission) -> TransportResult<()> {
        let url = endpoint(&self.api_base, AD_FORM_PATH);
        let request = Request::post(&url)
            .json(submission)
            .map_err(|e| TransportError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        ensure_ok(response).await.map(|_| ())
    }
}

async fn ensure_ok(response: Response) -> TransportResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(TransportError::Status { status, body })
}
