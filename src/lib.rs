pub mod body;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod history;
pub mod multipart;

pub use endpoint::{build_request, BodyPayload, ConcreteRequest, ContentType, Endpoint, Method};
pub use error::Error;
pub use executor::{Client, ReqwestTransport, Response, Transport, TransportResponse};
pub use history::{HistoryRecord, HistoryRecorder, MemoryRecorder};
pub use multipart::{FormFile, MimeType};
