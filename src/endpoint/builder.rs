use url::Url;

use crate::body::serialize_body;
use crate::error::Error;

use super::model::{Endpoint, Method};

/// Fully resolved request, ready for a transport. Built fresh per execution
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ConcreteRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Resolves a descriptor into a [`ConcreteRequest`].
///
/// The relative path is appended to the base URL's path by plain
/// concatenation; slashes the caller wrote are not deduplicated. A host-only
/// base URL contributes an empty path, not the parser's synthetic `/`.
/// Headers are copied verbatim and nothing (not even Content-Type) is
/// injected implicitly. Query values are encoded form-style (space as `+`);
/// the urlencoded body path pins `%20` instead.
pub fn build_request(endpoint: &impl Endpoint) -> Result<ConcreteRequest, Error> {
    let mut url = Url::parse(&endpoint.base_url()).map_err(|_| Error::InvalidRequest)?;

    let path = endpoint.path();
    if !path.is_empty() {
        let base = url.path();
        let joined = if base == "/" {
            path
        } else {
            format!("{base}{path}")
        };
        url.set_path(&joined);
    }

    let query = endpoint.query();
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &query {
            pairs.append_pair(name, value);
        }
    }

    let headers: Vec<(String, String)> = endpoint
        .headers()
        .map(|map| map.into_iter().collect())
        .unwrap_or_default();

    let body = match endpoint.file() {
        Some(file) => file.encode(),
        None => serialize_body(endpoint.content_type(), endpoint.body()).unwrap_or_default(),
    };

    Ok(ConcreteRequest {
        method: endpoint.method(),
        url,
        headers,
        body,
    })
}
