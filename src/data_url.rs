// Data URLs: `data:<mime>;base64,<payload>`

use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;
use std::sync::Arc;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Self-describing file payload, usable as a media source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl {
    mime: String,
    bytes: Arc<[u8]>,
}

impl DataUrl {
    pub fn new(mime: &str, bytes: impl Into<Arc<[u8]>>) -> Self {
        let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
        Self {
            mime: mime.to_string(),
            bytes: bytes.into(),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}
