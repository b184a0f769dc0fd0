use tracing::info;

use crate::{
    error::IndexError,
    indexer::corpus_statistics::CorpusStatistics,
    query_parser::tokenizer::tokenize,
    scoring::{
        bm_25::{Bm25Params, compute_term_score},
        idf::IdfTable,
    },
};

/// BM25 ranking index over a fixed, in-memory corpus.
///
/// All statistics are computed eagerly in the constructor and never change
/// afterwards, so a single index can be shared behind an `Arc` and scored
/// from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct RankingIndex {
    params: Bm25Params,
    statistics: CorpusStatistics,
    idf: IdfTable,
}

impl RankingIndex {
    /// Builds an index with the default parameters (k1 = 1.5, b = 0.75, epsilon = 0.25).
    pub fn new<I, S>(documents: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_params(documents, Bm25Params::default())
    }

    pub fn with_params<I, S>(documents: I, params: Bm25Params) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let statistics = CorpusStatistics::build(documents)?;
        let idf = IdfTable::compute(&statistics, params.epsilon)?;
        info!(
            documents = statistics.document_count(),
            terms = idf.len(),
            "ranking index built"
        );

        Ok(Self {
            params,
            statistics,
            idf,
        })
    }

    /// BM25 score of every document against `query`, in document order.
    ///
    /// Query terms are expected to come from the same tokenizer as the corpus.
    /// Repeated terms count once per occurrence; unknown terms add nothing.
    pub fn get_scores<S: AsRef<str>>(&self, query: &[S]) -> Vec<f64> {
        let mut scores = vec![0.0; self.document_count()];
        let avg_doc_len = self.statistics.average_document_length();

        for term in query {
            let term = term.as_ref();
            let Some(idf) = self.idf.get(term) else {
                continue;
            };

            let documents = self
                .statistics
                .term_frequencies()
                .iter()
                .zip(self.statistics.document_lengths());
            for (score, (frequencies, &doc_len)) in scores.iter_mut().zip(documents) {
                let f_td = frequencies.get(term).copied().unwrap_or(0);
                *score += compute_term_score(idf, f_td, doc_len, avg_doc_len, &self.params);
            }
        }

        scores
    }

    /// Tokenizes `raw_query` the same way documents were tokenized, then scores it.
    pub fn score_text(&self, raw_query: &str) -> Vec<f64> {
        self.get_scores(&tokenize(raw_query))
    }

    /// Documents with a positive score, best first, at most `k` of them.
    /// Equal scores are ordered by document index.
    pub fn top_k<S: AsRef<str>>(&self, query: &[S], k: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .get_scores(query)
            .into_iter()
            .enumerate()
            .filter(|&(_, score)| score > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }

    /// Index of the highest scoring document, if any document scores above zero.
    pub fn best_match<S: AsRef<str>>(&self, query: &[S]) -> Option<usize> {
        self.top_k(query, 1).first().map(|&(doc, _)| doc)
    }

    pub fn params(&self) -> &Bm25Params {
        &self.params
    }

    pub fn statistics(&self) -> &CorpusStatistics {
        &self.statistics
    }

    pub fn document_count(&self) -> usize {
        self.statistics.document_count()
    }

    pub fn average_document_length(&self) -> f64 {
        self.statistics.average_document_length()
    }

    pub fn document_length(&self, doc: usize) -> Option<usize> {
        self.statistics.document_length(doc)
    }

    pub fn term_frequency(&self, doc: usize, term: &str) -> u32 {
        self.statistics.term_frequency(doc, term)
    }

    pub fn document_frequency(&self, term: &str) -> u32 {
        self.statistics.document_frequency(term)
    }

    /// Stored (possibly floored) IDF of `term`; `None` for terms outside the corpus.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term)
    }

    pub fn average_idf(&self) -> f64 {
        self.idf.average_idf()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}
