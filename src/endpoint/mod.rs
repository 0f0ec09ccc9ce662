mod builder;
mod model;

pub use builder::{build_request, ConcreteRequest};
pub use model::{BodyPayload, ContentType, Endpoint, Method};
