//! Candidate field extraction: name, email and phone

use crate::processing::document::{CandidateFields, UNKNOWN};
use crate::processing::entities::{shared_recognizer, EntityLabel, EntityRecognizer};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w\.-]+@[\w\.-]+").unwrap());

// Deliberately loose: dates and ID numbers can match too.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?\d{2,4}\)?[-.\s]?\d{3}[-.\s]?\d{4,7}").unwrap());

/// Pulls the first person name, email and phone number out of document text.
///
/// Every field falls back to `"Unknown"`; extraction never fails.
pub struct FieldExtractor<'r> {
    recognizer: &'r (dyn EntityRecognizer + Sync),
}

impl Default for FieldExtractor<'static> {
    fn default() -> Self {
        Self::new(shared_recognizer())
    }
}

impl<'r> FieldExtractor<'r> {
    pub fn new(recognizer: &'r (dyn EntityRecognizer + Sync)) -> Self {
        Self { recognizer }
    }

    pub fn extract_fields(&self, text: &str) -> CandidateFields {
        CandidateFields {
            name: self.extract_name(text).unwrap_or_else(unknown),
            email: extract_email(text).unwrap_or_else(unknown),
            phone: extract_phone(text).unwrap_or_else(unknown),
        }
    }

    /// First person entity in document order.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        self.recognizer
            .recognize(text)
            .into_iter()
            .find(|entity| entity.label == EntityLabel::Person)
            .map(|entity| entity.text)
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

fn unknown() -> String {
    UNKNOWN.to_string()
}
