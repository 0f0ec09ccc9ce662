use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoint::{build_request, ConcreteRequest, Endpoint};
use crate::error::Error;
use crate::history::{HistoryRecord, HistoryRecorder};

use super::models::Response;
use super::transport::{ReqwestTransport, Transport, TransportResponse};

type Observer = dyn Fn(&HistoryRecord) + Send + Sync;

/// Executes endpoint descriptors over a pluggable transport.
///
/// Each invocation builds its own immutable request and resolves to exactly
/// one terminal outcome; nothing is shared between concurrent invocations
/// except the optional recorder, which serializes its own appends. Dropping
/// an in-flight future delivers nothing and records nothing.
pub struct Client {
    transport: Arc<dyn Transport>,
    recorder: Option<Arc<dyn HistoryRecorder>>,
    observer: Option<Arc<Observer>>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new()),
            recorder: None,
            observer: None,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn HistoryRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Installs a hook invoked once per completed invocation, successful or
    /// not. Tests assert against this instead of console output.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&HistoryRecord) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Executes the endpoint and returns the unmodified response body.
    pub async fn execute_raw<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Response<Vec<u8>>, Error> {
        let response = self.dispatch(endpoint).await?;
        Ok(Response {
            value: response.body,
            status: response.status,
            headers: response.headers,
        })
    }

    /// Executes the endpoint and parses the body as an untyped JSON value.
    pub async fn execute_untyped<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Response<serde_json::Value>, Error> {
        let response = self.dispatch(endpoint).await?;
        let value = serde_json::from_slice(&response.body).map_err(Error::Decode)?;
        Ok(Response {
            value,
            status: response.status,
            headers: response.headers,
        })
    }

    /// Executes the endpoint and decodes the body into `T`.
    pub async fn execute_typed<T: DeserializeOwned, E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Response<T>, Error> {
        let response = self.dispatch(endpoint).await?;
        let value = serde_json::from_slice(&response.body).map_err(Error::Decode)?;
        Ok(Response {
            value,
            status: response.status,
            headers: response.headers,
        })
    }

    /// Shared dispatch: build, send, record. Bails before touching the
    /// transport when the descriptor cannot produce a request.
    async fn dispatch<E: Endpoint>(&self, endpoint: &E) -> Result<TransportResponse, Error> {
        let request = build_request(endpoint)?;
        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");

        let result = self.transport.send(&request).await;
        match &result {
            Ok(response) => {
                debug!(status = response.status, bytes = response.body.len(), "request completed")
            }
            Err(error) => debug!(%error, "request failed"),
        }
        self.record(&request, &result);
        result
    }

    fn record(&self, request: &ConcreteRequest, result: &Result<TransportResponse, Error>) {
        if self.recorder.is_none() && self.observer.is_none() {
            return;
        }
        let record = HistoryRecord::from_exchange(request, result);
        if let Some(observer) = &self.observer {
            observer(&record);
        }
        if let Some(recorder) = &self.recorder {
            if let Err(error) = recorder.append(record) {
                debug!(%error, "history append failed");
            }
        }
    }
}
