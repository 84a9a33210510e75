//! # Bills & Documents
//!
//! Metadata for bills and other paperwork attached to a project. The
//! project link is a plain id: removing a project leaves its documents in
//! place, and they then resolve to "Unknown Project".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown for documents whose project no longer exists
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Whether a document is a bill or general paperwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Bill,
    Document,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Bill, DocumentKind::Document];

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Bill => "Bills",
            DocumentKind::Document => "Documents",
        }
    }

    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bill" | "bills" => Some(DocumentKind::Bill),
            "document" | "documents" | "doc" | "docs" => Some(DocumentKind::Document),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// A stored bill or document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    /// Owning project (not enforced)
    pub project_id: Uuid,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Label such as "PDF" or "JPG"
    pub file_type: String,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        project_id: Uuid,
        kind: DocumentKind,
        file_type: impl Into<String>,
    ) -> Self {
        Document {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            project_id,
            kind,
            file_type: file_type.into(),
        }
    }

    /// PDFs get a document icon, everything else an image icon.
    pub fn is_pdf(&self) -> bool {
        self.file_type.eq_ignore_ascii_case("pdf")
    }

    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json_shape() {
        let doc = Document::new(
            "Steel Invoice",
            NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(),
            Uuid::nil(),
            DocumentKind::Bill,
            "PDF",
        );
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "bill");
        assert_eq!(json["date"], "2025-11-09");
        assert_eq!(json["file_type"], "PDF");
        assert!(doc.is_pdf());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(DocumentKind::from_str_flexible("Bills"), Some(DocumentKind::Bill));
        assert_eq!(DocumentKind::from_str_flexible("doc"), Some(DocumentKind::Document));
        assert_eq!(DocumentKind::from_str_flexible("photo"), None);
    }
}
