//! Application configuration.
//!
//! Build-time constants shared by the CLI and the browser frontend.
//! There is no runtime configuration file and no environment lookup;
//! the CLI can only override the API origin with `--api-url`.

/// Backend API base URL.
///
/// The service issuing presigned URLs and accepting ad-form submissions.
pub const API_BASE_URL: &str = "http://localhost:3001";

/// Path of the presigned URL endpoint (`GET ?filename=<name>`).
pub const PRESIGN_PATH: &str = "/api/get-presigned-url";

/// Path of the ad-form submission endpoint (`POST`, JSON body).
pub const AD_FORM_PATH: &str = "/api/ad-form";

/// Content type sent with the PUT when the file reports none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The only failure text ever shown to the user.
pub const GENERIC_FAILURE_MESSAGE: &str = "Upload failed. Please try again.";

/// Button label while idle or settled.
pub const UPLOAD_LABEL: &str = "Upload";

/// Button label while an upload is in flight.
pub const UPLOADING_LABEL: &str = "Uploading...";

/// Join the API origin with an endpoint path, tolerating a trailing slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
