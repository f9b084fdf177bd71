use std::time::Duration;

/// Errors from Dev2Cloud client operations.
///
/// `Api` carries the HTTP status code from the service, or code `0` for
/// conditions synthesized client-side (provision failure, provision
/// timeout, malformed response). `Configuration` is raised before any
/// network activity and is never retried.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("API error {code}: {detail}")]
    Api { code: u16, detail: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl Error {
    /// Client-synthesized API error (code 0 — not from the HTTP layer).
    pub(crate) fn synthesized(detail: impl Into<String>) -> Self {
        Error::Api {
            code: 0,
            detail: detail.into(),
        }
    }

    pub(crate) fn provision_failed(sandbox_id: &str) -> Self {
        Error::synthesized(format!("sandbox {sandbox_id} failed to provision"))
    }

    pub(crate) fn provision_timeout(sandbox_id: &str, timeout: Duration) -> Self {
        Error::synthesized(format!(
            "sandbox {sandbox_id} did not become ready within {}s",
            timeout.as_secs()
        ))
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Error::synthesized(detail.into())
    }
}
