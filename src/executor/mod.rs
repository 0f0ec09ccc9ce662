mod models;
mod runner;
mod transport;

pub use models::Response;
pub use runner::Client;
pub use transport::{ReqwestTransport, Transport, TransportResponse};
