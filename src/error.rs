use std::io;

use thiserror::Error;

/// Failures while building a `RankingIndex`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("cannot build an index from an empty corpus")]
    EmptyCorpus,
    #[error("corpus produced no terms after tokenization")]
    DegenerateVocabulary,
}

/// Failures while reading a corpus file from disk.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse corpus json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corpus item {index} has no `text` field")]
    MissingText { index: usize },
    #[error("corpus item {index} is neither a string nor an object")]
    UnsupportedFormat { index: usize },
}
