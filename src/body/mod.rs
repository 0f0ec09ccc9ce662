use crate::endpoint::{BodyPayload, ContentType};

/// Serializes a descriptor's body payload according to its content type.
///
/// `Form` is lenient: a raw payload passes through unchanged, anything else
/// is rendered as pretty-printed JSON, and a payload that cannot be
/// serialized simply yields no body. `UrlEncoded` requires a flat string
/// map; any other payload is a programming error and panics.
pub fn serialize_body(content_type: ContentType, payload: Option<BodyPayload>) -> Option<Vec<u8>> {
    match content_type {
        ContentType::Form => match payload? {
            BodyPayload::Raw(bytes) => Some(bytes),
            BodyPayload::Map(map) => serde_json::to_vec_pretty(&map).ok(),
            BodyPayload::Json(value) => serde_json::to_vec_pretty(&value).ok(),
        },
        ContentType::UrlEncoded => match payload {
            Some(BodyPayload::Map(map)) => {
                let encoded = map
                    .iter()
                    .map(|(key, value)| {
                        format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                    })
                    .collect::<Vec<_>>()
                    .join("&");
                Some(encoded.into_bytes())
            }
            other => panic!("urlencoded body requires a flat string map, got {other:?}"),
        },
    }
}
