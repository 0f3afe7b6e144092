//! Async execution of plain-data requests.
//!
//! # Design
//! `Transport` is the seam between the sans-IO `HeroClient` and the network.
//! `HeroService` is generic over it, so tests inject a scripted transport and
//! production code uses [`ReqwestTransport`]. A transport reports a non-2xx
//! status as an ordinary `HttpResponse`; only failures to complete the
//! round-trip are `TransportError`s.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and yields the buffered `HttpResponse`.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client (timeouts, TLS roots, proxies).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Connection(Box::new(e))
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = req.method.as_str(), url = %req.path, "sending request");

        let mut builder = self.inner.request(req.method.into(), req.path.as_str());
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(map_error)?;

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[tokio::test]
    async fn malformed_url_is_reported_as_invalid() {
        let transport = ReqwestTransport::new();
        let req = HttpRequest {
            method: HttpMethod::Get,
            path: "not a url".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.execute(req).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_reported_as_connection_error() {
        // Bind then drop to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let transport = ReqwestTransport::new();
        let req = HttpRequest {
            method: HttpMethod::Get,
            path: format!("http://127.0.0.1:{port}/api/heroes"),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.execute(req).await.unwrap_err();
        assert!(matches!(err, TransportError::Connection(_)), "got {err:?}");
    }
}
