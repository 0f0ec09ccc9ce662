//! multipart/form-data encoding for file attachments.

use std::collections::BTreeMap;

use uuid::Uuid;

const LINE_BREAK: &str = "\r\n";

/// MIME types a file attachment may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Png,
    Jpeg,
    Pdf,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Png => "image/png",
            MimeType::Jpeg => "image/jpeg",
            MimeType::Pdf => "application/pdf",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            MimeType::Png => "png",
            MimeType::Jpeg => "jpeg",
            MimeType::Pdf => "pdf",
        }
    }
}

/// A binary attachment plus the text parts sent alongside it.
///
/// `parameters` are emitted before the binary part, in the map's sorted key
/// order. Names and values are not escaped; callers must not embed quote
/// characters in them.
#[derive(Debug, Clone)]
pub struct FormFile {
    pub content: Vec<u8>,
    pub name: String,
    pub field_name: String,
    pub mime: MimeType,
    pub parameters: BTreeMap<String, String>,
}

impl FormFile {
    pub fn new(content: Vec<u8>, name: impl Into<String>, mime: MimeType) -> Self {
        Self {
            content,
            name: name.into(),
            field_name: "file".to_string(),
            mime,
            parameters: BTreeMap::new(),
        }
    }

    pub fn field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Encodes the attachment as a complete multipart/form-data body.
    ///
    /// The boundary token is UUID-derived and not checked against the
    /// content; a payload that happens to contain the token would corrupt
    /// the encoding. Every separator is CRLF.
    pub fn encode(&self) -> Vec<u8> {
        let boundary = format!("Boundary-{}", Uuid::new_v4());
        let full_name = format!("{}.{}", self.name, self.mime.file_extension());
        let mut body = Vec::new();

        for (key, value) in &self.parameters {
            append(&mut body, &format!("--{boundary}{LINE_BREAK}"));
            append(
                &mut body,
                &format!("Content-Disposition: form-data; name=\"{key}\"{LINE_BREAK}{LINE_BREAK}"),
            );
            append(&mut body, &format!("{value}{LINE_BREAK}"));
        }

        append(&mut body, &format!("--{boundary}{LINE_BREAK}"));
        append(
            &mut body,
            &format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"{LINE_BREAK}",
                self.field_name, full_name
            ),
        );
        append(
            &mut body,
            &format!("Content-Type: {}{LINE_BREAK}{LINE_BREAK}", self.mime.as_str()),
        );
        body.extend_from_slice(&self.content);
        append(&mut body, LINE_BREAK);
        append(&mut body, &format!("--{boundary}--{LINE_BREAK}"));

        body
    }
}

fn append(body: &mut Vec<u8>, text: &str) {
    body.extend_from_slice(text.as_bytes());
}
