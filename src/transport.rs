//! One-shot HTTP transport for the sandbox API.
//!
//! API: POST /api/v1/sandboxes, GET /api/v1/sandboxes,
//! GET /api/v1/sandboxes/{id}, DELETE /api/v1/sandboxes/{id}
//!
//! One request, one response — no retries, no polling. Non-2xx responses
//! map to `Error::Api` carrying the status code and a best-effort detail
//! string.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Error;

const SANDBOXES_PATH: &str = "/api/v1/sandboxes";
const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP adapter for the fixed sandbox resource.
///
/// The API key travels as a default header on every request; it is set
/// once at construction.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    base_url: String,
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(config: &Config) -> Result<Self, Error> {
        let mut key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            Error::Configuration("API key contains characters not valid in an HTTP header".into())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, sandbox_id: Option<&str>) -> String {
        match sandbox_id {
            Some(id) => format!("{}{}/{}", self.base_url, SANDBOXES_PATH, id),
            None => format!("{}{}", self.base_url, SANDBOXES_PATH),
        }
    }

    pub(crate) async fn post(&self, body: &impl Serialize) -> Result<serde_json::Value, Error> {
        let resp = self.http.post(self.url(None)).json(body).send().await?;
        Self::read_json(Self::check(resp).await?).await
    }

    pub(crate) async fn get(&self, sandbox_id: Option<&str>) -> Result<serde_json::Value, Error> {
        let resp = self.http.get(self.url(sandbox_id)).send().await?;
        Self::read_json(Self::check(resp).await?).await
    }

    pub(crate) async fn delete(&self, sandbox_id: &str) -> Result<(), Error> {
        let resp = self.http.delete(self.url(Some(sandbox_id))).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Classify a response: pass 2xx through, turn anything else into an
    /// `Api` error with the status code and extracted detail.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let code = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(Error::Api {
            code,
            detail: detail_from_body(body),
        })
    }

    async fn read_json(resp: reqwest::Response) -> Result<serde_json::Value, Error> {
        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("malformed response body: {e}")))
    }
}

/// Extract the error detail: the `detail` field of a structured body when
/// present, else the raw response text.
fn detail_from_body(body: String) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or(body)
}
