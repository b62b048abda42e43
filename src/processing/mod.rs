//! Text processing and ranking module

pub mod document;
pub mod entities;
pub mod fields;
pub mod text_processor;
pub mod tfidf;
pub mod ranker;
pub mod analyzer;

pub use analyzer::RankingEngine;
pub use document::{CandidateFields, CandidateRecord, Document, RankedResult, UNKNOWN};
pub use entities::{Entity, EntityLabel, EntityRecognizer, HeuristicRecognizer};
pub use fields::FieldExtractor;
pub use ranker::Ranker;
pub use tfidf::{CorpusVectorizer, TfidfVectorizer};
