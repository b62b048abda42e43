//! Cosine-similarity ranking of candidate texts against a query

use crate::processing::tfidf::{CorpusVectorizer, TfidfVectorizer};
use ndarray::ArrayView1;

pub struct Ranker<V = TfidfVectorizer> {
    vectorizer: V,
}

impl Default for Ranker<TfidfVectorizer> {
    fn default() -> Self {
        Self::new(TfidfVectorizer::new())
    }
}

impl<V: CorpusVectorizer> Ranker<V> {
    pub fn new(vectorizer: V) -> Self {
        Self { vectorizer }
    }

    /// Score every candidate against the query.
    ///
    /// The corpus is the query followed by the candidates, vectorized together.
    /// Output index `i` belongs to `candidates[i]`.
    pub fn rank<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<f64> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let corpus: Vec<&str> = std::iter::once(query)
            .chain(candidates.iter().map(AsRef::as_ref))
            .collect();
        let vectors = self.vectorizer.vectorize_corpus(&corpus);

        let query_vector = vectors.row(0);
        vectors
            .outer_iter()
            .skip(1)
            .map(|candidate| cosine_similarity(query_vector, candidate))
            .collect()
    }
}

/// Cosine of the angle between two vectors, 0 when either has zero norm.
pub fn cosine_similarity(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        a.dot(&b) / (norm_a * norm_b)
    }
}
