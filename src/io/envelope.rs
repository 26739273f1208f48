//! Base64 file envelope
//!
//! Requests and AR responses travel as `{"ContentBase64": "...", "Filename": "..."}`
//! with standard (padded) base64 content.

use crate::types::TransformError;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEnvelope {
    #[serde(rename = "ContentBase64", default)]
    pub content_base64: String,
    #[serde(rename = "Filename", default)]
    pub filename: Option<String>,
}

impl FileEnvelope {
    pub fn from_json(json: &[u8]) -> Result<Self, TransformError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Wrap `content`, keeping the request's file name
    pub fn encode(content: &[u8], filename: Option<String>) -> Self {
        FileEnvelope {
            content_base64: general_purpose::STANDARD.encode(content),
            filename,
        }
    }

    /// The response for "nothing to deliver"
    pub fn empty() -> Self {
        FileEnvelope::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content_base64.is_empty()
    }

    pub fn decode_content(&self) -> Result<Vec<u8>, TransformError> {
        Ok(general_purpose::STANDARD.decode(self.content_base64.trim())?)
    }

    pub fn to_json(&self) -> Result<String, TransformError> {
        Ok(serde_json::to_string(self)?)
    }
}
