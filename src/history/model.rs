use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::endpoint::ConcreteRequest;
use crate::error::Error;
use crate::executor::TransportResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSnapshot {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSnapshot {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExchangeOutcome {
    Response(ResponseSnapshot),
    Failure(String),
}

/// One executed exchange, as the history viewer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub request: RequestSnapshot,
    pub outcome: ExchangeOutcome,
}

impl HistoryRecord {
    pub(crate) fn from_exchange(
        request: &ConcreteRequest,
        result: &Result<TransportResponse, Error>,
    ) -> Self {
        let outcome = match result {
            Ok(response) => ExchangeOutcome::Response(ResponseSnapshot {
                status: response.status,
                headers: response.headers.clone(),
                body: response.body.clone(),
            }),
            Err(error) => ExchangeOutcome::Failure(error.to_string()),
        };
        Self {
            timestamp: Utc::now(),
            request: RequestSnapshot {
                method: request.method.as_str().to_string(),
                url: request.url.to_string(),
                headers: request.headers.clone(),
                body: request.body.clone(),
            },
            outcome,
        }
    }
}
