//! Report structures for ranked results

use crate::processing::document::{RankedResult, SkippedDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub rows: Vec<ReportRow>,
    pub skipped: Vec<SkippedDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// First characters of the job description
    pub query_preview: String,
    pub documents_ranked: usize,
    pub documents_skipped: usize,
    /// Decimal digits kept in `ReportRow::score`
    pub score_precision: usize,
}

/// One table row. `score` is rounded for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub rank: usize,
    pub file_name: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub score: f64,
}

const QUERY_PREVIEW_CHARS: usize = 80;

/// Digits beyond this are below f64 resolution for scores in [0, 1].
pub const MAX_SCORE_PRECISION: usize = 15;

impl RankingReport {
    pub fn from_result(result: &RankedResult, query: &str, score_precision: usize) -> Self {
        let score_precision = score_precision.min(MAX_SCORE_PRECISION);
        let rows = result
            .iter()
            .enumerate()
            .map(|(index, record)| ReportRow {
                rank: index + 1,
                file_name: record.file_name.clone(),
                name: record.name.clone(),
                email: record.email.clone(),
                contact: record.phone.clone(),
                score: round_score(record.score, score_precision),
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                query_preview: truncate_text(query, QUERY_PREVIEW_CHARS),
                documents_ranked: result.len(),
                documents_skipped: result.skipped().len(),
                score_precision,
            },
            rows,
            skipped: result.skipped().to_vec(),
        }
    }

    /// Keep only the first `n` rows. Ranks and counts are unchanged.
    pub fn truncated(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }
}

/// Round half to even, keeping at most [`MAX_SCORE_PRECISION`] decimals.
pub fn round_score(score: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_SCORE_PRECISION) as i32);
    (score * factor).round_ties_even() / factor
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= max_chars {
        flattened
    } else {
        let head: String = flattened.chars().take(max_chars).collect();
        format!("{}...", head.trim_end())
    }
}
