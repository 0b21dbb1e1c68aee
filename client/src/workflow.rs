//! The upload sequence.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ credentials  │────▶│  PUT bytes   │────▶│ POST ad form │ (ad flow only)
//! │ GET presign  │     │ uploadUrl    │     │ creativeUrl  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Steps run strictly in order and the first failure stops the run.
//! No retries.

use crate::api::Backend;
use crate::error::{UploadError, UploadResult};
use crate::state::UploadJob;

/// Run one attempt and return the download URL.
pub async fn run<B: Backend>(backend: &B, job: UploadJob) -> UploadResult<String> {
    let UploadJob { file, form } = job;

    log::info!("🔑 Requesting upload URL for {}", file.name);
    let credentials = backend
        .fetch_credentials(&file.name)
        .await
        .map_err(UploadError::Credential)?;

    log::info!(
        "📤 Uploading {} ({} bytes, {})",
        file.name,
        file.len(),
        file.content_type()
    );
    backend
        .put_object(&credentials.upload_url, &file)
        .await
        .map_err(UploadError::Transfer)?;

    if let Some(form) = form {
        log::info!("📝 Submitting ad form for {}", form.event_name);
        let submission = form.into_submission(credentials.download_url.clone());
        backend
            .submit_ad_form(&submission)
            .await
            .map_err(UploadError::Submission)?;
    }

    log::info!("✅ Uploaded {} → {}", file.name, credentials.download_url);
    Ok(credentials.download_url)
}
