//! BM25 relevance ranking over a fixed, in-memory corpus.

pub mod config;
pub mod error;
pub mod indexer;
pub mod query_parser;
pub mod scoring;
pub mod search_engine;
pub mod utils;

pub use error::{CorpusError, IndexError};
pub use scoring::bm_25::Bm25Params;
pub use search_engine::search_engine::RankingIndex;
