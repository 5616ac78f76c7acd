//! Synchronous JSON POST transport.
//!
//! All platform traffic goes through the [`Transport`] trait so the publish
//! logic can be exercised in tests with a recording fake. The production
//! implementation is a blocking `reqwest` client: one-shot POSTs, no retries,
//! default connection timeouts, nothing clever.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Status code and raw body text of a completed request.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// One-shot JSON POST. `Content-Type: application/json` is implied; `headers`
/// carries anything extra (Authorization, protocol-version headers).
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
        headers: &[(&str, String)],
    ) -> Result<Response, HttpError>;
}

/// Blocking reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
        headers: &[(&str, String)],
    ) -> Result<Response, HttpError> {
        let mut request = self.client.post(url).json(payload);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Response { status, body })
    }
}
