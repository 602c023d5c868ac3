//! Blocking HTTP execution of the requests built by `petstore_core`.
//!
//! The agent never turns a status code into an error: 4xx/5xx come back as
//! an `HttpResponse` and only connection-level failures are `TransportError`.

use petstore_core::{HttpMethod, HttpRequest, HttpResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{method} {url} failed")]
    Request {
        method: HttpMethod,
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("reading response body from {url} failed")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

pub struct Transport {
    agent: ureq::Agent,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&req.url), &req.headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&req.url), &req.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&req.url), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&req.url), &req.headers).send_empty(),
        };
        let mut response = result.map_err(|source| TransportError::Request {
            method: req.method,
            url: req.url.clone(),
            source,
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| header_pair(name, value))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|source| TransportError::Body {
                url: req.url.clone(),
                source,
            })?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Non-UTF-8 bytes in a header value become U+FFFD.
fn header_pair(name: &ureq::http::HeaderName, value: &ureq::http::HeaderValue) -> (String, String) {
    (
        name.as_str().to_string(),
        String::from_utf8_lossy(value.as_bytes()).into_owned(),
    )
}
