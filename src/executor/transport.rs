use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::endpoint::ConcreteRequest;
use crate::error::Error;

/// What a transport hands back: status, headers, and the unread body bytes.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Pluggable "send request, get response" capability.
///
/// Non-2xx statuses are not transport failures; they come back as ordinary
/// responses with whatever bytes the server sent. Only failures to complete
/// the exchange (connect errors, timeouts) surface as [`Error::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ConcreteRequest) -> Result<TransportResponse, Error>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Default, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ConcreteRequest) -> Result<TransportResponse, Error> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| Error::Transport(e.to_string()))?;
        let mut builder = self.client.request(method, request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?
            .to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}
