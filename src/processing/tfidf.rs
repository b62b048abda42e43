//! TF-IDF vector space built from a single corpus

use crate::config::RankingConfig;
use crate::processing::text_processor::TextProcessor;
use log::debug;
use ndarray::{Array1, Array2};
use std::collections::{BTreeMap, BTreeSet};

/// Turns a corpus into one row vector per document.
pub trait CorpusVectorizer {
    fn vectorize_corpus(&self, documents: &[&str]) -> Array2<f64>;
}

/// Term-frequency / inverse-document-frequency weighting.
///
/// The vocabulary and document frequencies come only from the corpus passed to
/// [`CorpusVectorizer::vectorize_corpus`]; nothing is kept between calls. Columns
/// follow the alphabetical order of the vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    processor: TextProcessor,
    sublinear_tf: bool,
    smooth_idf: bool,
    normalize: bool,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::from_config(&RankingConfig::default())
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self {
            processor: TextProcessor::new().with_lowercase(config.lowercase),
            sublinear_tf: config.sublinear_tf,
            smooth_idf: config.smooth_idf,
            normalize: config.normalize,
        }
    }

    /// Term to column index for the given tokenized corpus.
    pub fn vocabulary(tokenized: &[Vec<String>]) -> BTreeMap<&str, usize> {
        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();

        terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term, column))
            .collect()
    }

    fn idf(&self, document_frequency: usize, n_documents: usize) -> f64 {
        let (n, df) = (n_documents as f64, document_frequency as f64);
        if self.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

impl CorpusVectorizer for TfidfVectorizer {
    fn vectorize_corpus(&self, documents: &[&str]) -> Array2<f64> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.processor.tokenize(doc))
            .collect();
        let vocabulary = Self::vocabulary(&tokenized);
        debug!(
            "Vectorizing {} documents over {} terms",
            documents.len(),
            vocabulary.len()
        );

        let mut matrix = Array2::<f64>::zeros((documents.len(), vocabulary.len()));
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                matrix[[row, vocabulary[token.as_str()]]] += 1.0;
            }
        }

        if self.sublinear_tf {
            matrix.mapv_inplace(|tf| if tf > 0.0 { 1.0 + tf.ln() } else { 0.0 });
        }

        let idf: Array1<f64> = matrix
            .columns()
            .into_iter()
            .map(|column| {
                let df = column.iter().filter(|&&tf| tf > 0.0).count();
                self.idf(df, documents.len())
            })
            .collect();
        matrix *= &idf;

        if self.normalize {
            for mut row in matrix.rows_mut() {
                let norm = row.dot(&row).sqrt();
                if norm > 0.0 {
                    row.mapv_inplace(|weight| weight / norm);
                }
            }
        }

        matrix
    }
}
