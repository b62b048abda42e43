//! Document and ranking result structures

use serde::{Deserialize, Serialize};

/// Placeholder for a field that could not be found in a document.
pub const UNKNOWN: &str = "Unknown";

/// An uploaded document: display name plus raw bytes. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Fields pulled out of a document's text, before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for CandidateFields {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            email: UNKNOWN.to_string(),
            phone: UNKNOWN.to_string(),
        }
    }
}

impl CandidateFields {
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN && self.email == UNKNOWN && self.phone == UNKNOWN
    }
}

/// A document that went through extraction and is waiting to be scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedCandidate {
    pub file_name: String,
    pub text: String,
    pub fields: CandidateFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub file_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score: f64,
}

impl CandidateRecord {
    pub fn new(file_name: String, fields: CandidateFields, score: f64) -> Self {
        Self {
            file_name,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            score,
        }
    }
}

/// A document left out of the ranking because it could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}

/// Records ordered by non-increasing score, equal scores kept in upload order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    records: Vec<CandidateRecord>,
    skipped: Vec<SkippedDocument>,
}

impl RankedResult {
    /// Sort records given in upload order. The sort is stable.
    pub fn from_upload_order(mut records: Vec<CandidateRecord>) -> Self {
        records.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self {
            records,
            skipped: Vec::new(),
        }
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedDocument>) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn top(&self) -> Option<&CandidateRecord> {
        self.records.first()
    }

    /// Documents left out because they could not be parsed.
    pub fn skipped(&self) -> &[SkippedDocument] {
        &self.skipped
    }
}
