//! Sign-in HTTP call and the transport seam it runs over.
//!
//! Browser builds (`csr`): real requests via `gloo-net`.
//! Tests: any `Transport` implementation, typically an in-memory mock.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, unreadable body) becomes a
//! `SubmissionError`. Nothing here panics and nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::EndpointConfig;
use crate::form::values::FormValues;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors produced while submitting credentials.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("sign-in failed: {status}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body is not JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The request body could not be serialized. The two-string
    /// `FormValues` body never produces this; it carries `serde_json`
    /// errors should the body type gain a fallible field.
    #[error("request encode failed: {0}")]
    Encode(String),
}

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP seam used by the form controller. Enables mocking in tests.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] when no response was received.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, SubmissionError>;
}

/// `gloo-net` backed transport for the browser.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, SubmissionError> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

/// Encode validated credentials as the request body.
pub(crate) fn sign_in_body(values: &FormValues) -> Result<String, SubmissionError> {
    serde_json::to_string(values).map_err(|e| SubmissionError::Encode(e.to_string()))
}

/// Interpret a sign-in response: 2xx with a JSON body is success.
pub(crate) fn parse_sign_in_reply(reply: HttpReply) -> Result<serde_json::Value, SubmissionError> {
    if !reply.is_success() {
        return Err(SubmissionError::Status { status: reply.status, body: reply.body });
    }
    serde_json::from_str(&reply.body).map_err(|e| SubmissionError::Parse(e.to_string()))
}

/// POST credentials to the configured sign-in endpoint.
///
/// Callers must only pass values that passed `validate`.
///
/// # Errors
///
/// Returns a [`SubmissionError`] on transport failure, non-2xx status, or a
/// response body that is not JSON.
pub(crate) async fn sign_in<T>(
    transport: &T,
    endpoint: &EndpointConfig,
    values: &FormValues,
) -> Result<serde_json::Value, SubmissionError>
where
    T: Transport + ?Sized,
{
    let body = sign_in_body(values)?;
    let reply = transport.post_json(&endpoint.url(), body).await?;
    parse_sign_in_reply(reply)
}
