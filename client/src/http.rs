//! reqwest implementation of [`Backend`].
//!
//! No timeout is configured and nothing is retried: a call either
//! settles with the library defaults or fails once.

use reqwest::{header, Client, Response};

use crate::api::Backend;
use crate::config::{endpoint, AD_FORM_PATH, API_BASE_URL, PRESIGN_PATH};
use crate::error::{TransportError, TransportResult};
use crate::models::{AdSubmission, SelectedFile, UploadCredentials};

/// HTTP client for the presigning backend and object storage.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    api_base: String,
}

impl HttpBackend {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_base)
    }

    pub fn with_client(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl Backend for HttpBackend {
    async fn fetch_credentials(&self, filename: &str) -> TransportResult<UploadCredentials> {
        let url = endpoint(&self.api_base, PRESIGN_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("filename", filename)])
            .send()
            .await
            .map_err(request_error)?;

        ensure_success(response)
            .await?
            .json::<UploadCredentials>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn put_object(&self, upload_url: &str, file: &SelectedFile) -> TransportResult<()> {
        let response = self
            .client
            .put(upload_url)
            .header(header::CONTENT_TYPE, file.content_type())
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(request_error)?;

        ensure_success(response).await.map(|_| ())
    }

    async fn submit_ad_form(&self, submission: &AdSubmission) -> TransportResult<()> {
        let url = endpoint(&self.api_base, AD_FORM_PATH);
        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(request_error)?;

        ensure_success(response).await.map(|_| ())
    }
}

fn request_error(e: reqwest::Error) -> TransportError {
    TransportError::Request(e.to_string())
}

/// Turn a non-2xx response into [`TransportError::Status`], keeping the body.
async fn ensure_success(response: Response) -> TransportResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}
