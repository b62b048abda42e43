//! Input manager for loading uploaded documents and job descriptions

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::markdown_to_text;
use crate::processing::document::Document;
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Load documents in the order given.
    ///
    /// A directory expands to the PDF files directly inside it, sorted by file name.
    pub async fn load_documents(&self, paths: &[PathBuf]) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        for path in paths {
            if !path.exists() {
                return Err(ResumeRankerError::InvalidInput(format!(
                    "File does not exist: {}",
                    path.display()
                )));
            }

            if path.is_dir() {
                let files = self.pdf_files_in(path).await?;
                info!("Found {} PDF files in {}", files.len(), path.display());
                for file in files {
                    documents.push(self.load_document(&file).await?);
                }
            } else {
                documents.push(self.load_document(path).await?);
            }
        }

        Ok(documents)
    }

    pub async fn load_document(&self, path: &Path) -> Result<Document> {
        if !FileType::from_path(path).is_document() {
            return Err(ResumeRankerError::UnsupportedFormat(format!(
                "Only PDF documents can be ranked: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        debug!("Loaded {} ({} bytes)", name, bytes.len());
        Ok(Document::new(name, bytes))
    }

    /// Read a job description from a plain text or Markdown file.
    pub async fn load_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;
        let text = match FileType::from_path(path) {
            FileType::Text => content,
            FileType::Markdown => {
                info!("Rendering markdown job description: {}", path.display());
                markdown_to_text(&content)
            }
            _ => {
                return Err(ResumeRankerError::UnsupportedFormat(format!(
                    "Job description must be .txt or .md: {}",
                    path.display()
                )));
            }
        };

        Ok(text.trim().to_string())
    }

    async fn pdf_files_in(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file() && FileType::from_path(&path).is_document() {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}
