use std::collections::BTreeMap;

use crate::multipart::FormFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// How the body payload is serialized before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Form,
    UrlEncoded,
}

/// Body payload variants a descriptor may carry.
///
/// A closed set so the serializer can match exhaustively instead of probing
/// an open dynamic type at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyPayload {
    Raw(Vec<u8>),
    Map(BTreeMap<String, String>),
    Json(serde_json::Value),
}

/// Declarative description of one endpoint.
///
/// Implementors supply `base_url` and override whatever else differs from
/// the defaults; the shared build/execute logic lives in free functions and
/// [`Client`](crate::executor::Client) rather than in the trait itself.
///
/// When [`file`](Endpoint::file) returns a value it takes precedence over
/// [`body`](Endpoint::body) when the request body is assembled.
pub trait Endpoint {
    fn base_url(&self) -> String;

    fn path(&self) -> String {
        String::new()
    }

    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn headers(&self) -> Option<BTreeMap<String, String>> {
        None
    }

    fn body(&self) -> Option<BodyPayload> {
        None
    }

    fn method(&self) -> Method {
        Method::Get
    }

    fn content_type(&self) -> ContentType {
        ContentType::Form
    }

    fn file(&self) -> Option<FormFile> {
        None
    }
}
