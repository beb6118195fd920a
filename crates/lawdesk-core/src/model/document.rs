use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a filed document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum DocumentType {
    #[serde(rename = "FIR")]
    Fir,
    Petition,
    Order,
    Judgment,
    Evidence,
    #[default]
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 6] = [
        DocumentType::Fir,
        DocumentType::Petition,
        DocumentType::Order,
        DocumentType::Judgment,
        DocumentType::Evidence,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Fir => "FIR",
            DocumentType::Petition => "Petition",
            DocumentType::Order => "Order",
            DocumentType::Judgment => "Judgment",
            DocumentType::Evidence => "Evidence",
            DocumentType::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown document type '{}'", s))
    }
}

/// Metadata for a file attached to a case (not the file content)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub uri: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
    pub case_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_id: Option<String>,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for attaching a document to a case
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub uri: String,
    pub size: u64,
    /// Blank means `application/octet-stream`
    pub mime_type: String,
    pub hearing_id: Option<String>,
    pub uploaded_by: String,
    pub tags: Vec<String>,
}

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Trim tags, drop blanks and collapse duplicates, keeping first-seen order
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            " petition ".to_string(),
            "".to_string(),
            "initial".to_string(),
            "petition".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(normalize_tags(tags), vec!["petition", "initial"]);
    }

    #[test]
    fn test_type_field_is_named_type() {
        let json = serde_json::to_value(DocumentDraft {
            name: "FIR copy.pdf".to_string(),
            doc_type: DocumentType::Fir,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["type"], "FIR");
        assert!(json.get("docType").is_none());
    }

    #[test]
    fn test_document_type_parse() {
        assert_eq!("fir".parse::<DocumentType>(), Ok(DocumentType::Fir));
        assert_eq!("Judgment".parse::<DocumentType>(), Ok(DocumentType::Judgment));
        assert!("memo".parse::<DocumentType>().is_err());
    }
}
