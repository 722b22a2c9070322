//! Uploaded document metadata.
//!
//! Upload does not validate `size_bytes` against `mime_type`.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    pub uploaded_by: EntityId,
    pub uploaded_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub uploaded_by: EntityId,
    pub content: Option<String>,
}

/// Coarse document category derived from the MIME string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Word,
    Image,
    Other,
}

impl DocumentKind {
    /// Classifies by substring, first match wins: `pdf`, then
    /// `word`/`document`, then `image`.
    pub fn classify(mime_type: &str) -> Self {
        if mime_type.contains("pdf") {
            Self::Pdf
        } else if mime_type.contains("word") || mime_type.contains("document") {
            Self::Word
        } else if mime_type.contains("image") {
            Self::Image
        } else {
            Self::Other
        }
    }
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::classify(&self.mime_type)
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentKind;

    #[test]
    fn classifies_common_mime_types() {
        assert_eq!(DocumentKind::classify("application/pdf"), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::classify(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            DocumentKind::Word
        );
        assert_eq!(DocumentKind::classify("application/msword"), DocumentKind::Word);
        assert_eq!(DocumentKind::classify("image/png"), DocumentKind::Image);
        assert_eq!(DocumentKind::classify("text/plain"), DocumentKind::Other);
    }
}
