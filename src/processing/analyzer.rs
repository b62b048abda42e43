//! Ranking engine: text extraction, field extraction and scoring for a batch

use crate::config::Config;
use crate::error::Result;
use crate::input::text_extractor::{PdfTextExtractor, TextExtractor};
use crate::processing::document::{
    CandidateRecord, Document, ExtractedCandidate, RankedResult, SkippedDocument,
};
use crate::processing::fields::FieldExtractor;
use crate::processing::ranker::Ranker;
use crate::processing::tfidf::TfidfVectorizer;
use log::{debug, info, warn};

/// Runs documents through extraction in upload order, then ranks the batch once.
pub struct RankingEngine<'r> {
    extractor: Box<dyn TextExtractor + Send + Sync>,
    fields: FieldExtractor<'r>,
    ranker: Ranker<TfidfVectorizer>,
    skip_unparseable: bool,
}

impl Default for RankingEngine<'static> {
    fn default() -> Self {
        Self::new(
            Box::new(PdfTextExtractor),
            FieldExtractor::default(),
            Ranker::default(),
        )
    }
}

impl<'r> RankingEngine<'r> {
    pub fn new(
        extractor: Box<dyn TextExtractor + Send + Sync>,
        fields: FieldExtractor<'r>,
        ranker: Ranker<TfidfVectorizer>,
    ) -> Self {
        Self {
            extractor,
            fields,
            ranker,
            skip_unparseable: false,
        }
    }

    /// PDF extraction with the configured vectorizer and skip policy.
    pub fn from_config(config: &Config, fields: FieldExtractor<'r>) -> Self {
        Self::new(
            Box::new(PdfTextExtractor),
            fields,
            Ranker::new(TfidfVectorizer::from_config(&config.ranking)),
        )
        .with_skip_unparseable(config.extraction.skip_unparseable)
    }

    pub fn with_skip_unparseable(mut self, skip: bool) -> Self {
        self.skip_unparseable = skip;
        self
    }

    pub fn extract_candidate(&self, document: &Document) -> Result<ExtractedCandidate> {
        let text = self.extractor.extract(document)?;
        debug!(
            "Extracted {} characters from '{}'",
            text.chars().count(),
            document.name
        );

        let fields = self.fields.extract_fields(&text);
        Ok(ExtractedCandidate {
            file_name: document.name.clone(),
            text,
            fields,
        })
    }

    /// Score candidates given in upload order and sort them.
    pub fn rank_extracted(&self, query: &str, candidates: Vec<ExtractedCandidate>) -> RankedResult {
        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        let scores = self.ranker.rank(query, &texts);

        let records = candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, score)| {
                CandidateRecord::new(candidate.file_name, candidate.fields, score)
            })
            .collect();

        RankedResult::from_upload_order(records)
    }

    /// Extract every document, rank them against the query and sort by score.
    ///
    /// An unparseable document aborts the batch unless skipping is enabled, in which
    /// case it is left out and listed in [`RankedResult::skipped`].
    pub fn rank_documents(&self, query: &str, documents: &[Document]) -> Result<RankedResult> {
        self.rank_documents_with(query, documents, |_| {})
    }

    /// Like [`rank_documents`](Self::rank_documents), calling `on_extracted` after
    /// each document has been through extraction.
    pub fn rank_documents_with<F>(
        &self,
        query: &str,
        documents: &[Document],
        mut on_extracted: F,
    ) -> Result<RankedResult>
    where
        F: FnMut(&Document),
    {
        info!("Ranking {} documents", documents.len());

        let mut candidates = Vec::with_capacity(documents.len());
        let mut skipped = Vec::new();

        for document in documents {
            match self.extract_candidate(document) {
                Ok(candidate) => candidates.push(candidate),
                Err(e) if self.skip_unparseable && e.is_document_error() => {
                    warn!("Skipping '{}': {}", document.name, e);
                    skipped.push(SkippedDocument {
                        file_name: document.name.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
            on_extracted(document);
        }

        Ok(self.rank_extracted(query, candidates).with_skipped(skipped))
    }
}
