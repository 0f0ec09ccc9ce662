use thiserror::Error;

/// Failure surfaced to the caller of an execute operation.
///
/// Precondition violations (for example a urlencoded body that is not a flat
/// string map) are programming errors and panic instead of appearing here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("descriptor could not be resolved into a request")]
    InvalidRequest,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("history recorder failure: {0}")]
    Recorder(String),
}
