//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PDF '{file}': {message}")]
    PdfParse { file: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeRankerError {
    pub fn pdf_parse(file: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ResumeRankerError::PdfParse {
            file: file.into(),
            message: err.to_string(),
        }
    }

    /// Whether this error only concerns one document of a batch.
    pub fn is_document_error(&self) -> bool {
        matches!(self, ResumeRankerError::PdfParse { .. })
    }
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;
