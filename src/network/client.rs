//! HTTP client wrapper - one GET against the configured base URL

use std::time::{Duration, Instant};

use anyhow::Context;
use bytes::Bytes;
use reqwest::Url;

use crate::network::endpoint::Endpoint;
use crate::network::error::NetworkError;

/// Network client bound to a single base URL.
///
/// Built once at startup and handed to whatever needs it; cloning is cheap
/// because `reqwest::Client` is reference counted internally.
#[derive(Clone, Debug)]
pub struct NetworkClient {
    client: reqwest::Client,
    base_url: Url,
}

impl NetworkClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid base URL: {}", base_url))?;
        Ok(NetworkClient {
            client: create_client(timeout),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `endpoint` and return the raw body.
    ///
    /// Transport failures map to [`NetworkError::UrlError`], a non-2xx status
    /// to [`NetworkError::InvalidResponse`] and an empty body to
    /// [`NetworkError::CannotParseData`].
    pub async fn get(&self, endpoint: &Endpoint) -> Result<Bytes, NetworkError> {
        let url = endpoint.url(&self.base_url)?;
        let start = Instant::now();
        tracing::info!(url = %url, "Executing request");

        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::warn!(url = %url, "Request timed out");
            } else if e.is_connect() {
                tracing::warn!(url = %url, error = %e, "Connection failed");
            } else {
                tracing::warn!(url = %url, error = %e, "Request failed");
            }
            NetworkError::UrlError
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Unexpected status");
            return Err(NetworkError::InvalidResponse);
        }

        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Error reading body");
            NetworkError::UrlError
        })?;

        tracing::info!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            time_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        if body.is_empty() {
            return Err(NetworkError::CannotParseData);
        }
        Ok(body)
    }
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `response` verbatim to the first connection and return the base URL
    pub async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut read = Vec::new();
            while !read.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                read.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Build a complete HTTP/1.1 response
    pub fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }
}
