//! Input processing module
//! Handles file detection, document loading, and text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
pub use text_extractor::{join_pages, PdfTextExtractor, TextExtractor};
