//! Backend seam.
//!
//! The orchestrator talks to the presigning service, object storage and
//! the ad-form endpoint only through [`Backend`]. The CLI plugs in
//! [`crate::http::HttpBackend`] (reqwest), the browser a gloo-net
//! implementation, and tests an in-memory mock.
//!
//! Futures are not required to be `Send`: every surface drives the
//! workflow from a single task.

use crate::error::TransportResult;
use crate::models::{AdSubmission, SelectedFile, UploadCredentials};

/// The three outbound calls of the upload workflow.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /api/get-presigned-url?filename=<name>`.
    async fn fetch_credentials(&self, filename: &str) -> TransportResult<UploadCredentials>;

    /// `PUT <upload_url>` with the raw bytes and `file.content_type()`.
    async fn put_object(&self, upload_url: &str, file: &SelectedFile) -> TransportResult<()>;

    /// `POST /api/ad-form`. The response body is ignored.
    async fn submit_ad_form(&self, submission: &AdSubmission) -> TransportResult<()>;
}

impl<B: Backend + ?Sized> Backend for &B {
    async fn fetch_credentials(&self, filename: &str) -> TransportResult<UploadCredentials> {
        (**self).fetch_credentials(filename).await
    }

    async fn put_object(&self, upload_url: &str, file: &SelectedFile) -> TransportResult<()> {
        (**self).put_object(upload_url, file).await
    }

    async fn submit_ad_form(&self, submission: &AdSubmission) -> TransportResult<()> {
        (**self).submit_ad_form(submission).await
    }
}
