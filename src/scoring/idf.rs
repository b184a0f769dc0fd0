use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{error::IndexError, indexer::corpus_statistics::CorpusStatistics};

/// Compute raw IDF for a term
/// IDF = ln(N - f_t + 0.5) - ln(f_t + 0.5)
///
/// Negative once a term appears in more than half of the documents.
///
/// # Arguments
/// * `n` - Total number of documents (N)
/// * `f_t` - Number of documents containing term t (document frequency)
pub fn compute_idf(n: usize, f_t: u32) -> f64 {
    let n = n as f64;
    let f_t = f64::from(f_t);

    (n - f_t + 0.5).ln() - (f_t + 0.5).ln()
}

/// IDF weight per corpus term, with negative weights floored to
/// `epsilon * average_idf`.
#[derive(Debug, Clone)]
pub struct IdfTable {
    weights: FxHashMap<String, f64>,
    average_idf: f64,
}

impl IdfTable {
    pub fn compute(stats: &CorpusStatistics, epsilon: f64) -> Result<Self, IndexError> {
        let n = stats.document_count();
        let mut weights: FxHashMap<String, f64> = FxHashMap::default();
        weights.reserve(stats.vocabulary_size());

        let mut idf_sum = 0.0;
        let mut negative_terms = Vec::new();
        for (term, f_t) in stats.vocabulary() {
            let idf = compute_idf(n, f_t);
            idf_sum += idf;
            if idf < 0.0 {
                negative_terms.push(term);
            }
            weights.insert(term.to_owned(), idf);
        }

        if weights.is_empty() {
            return Err(IndexError::DegenerateVocabulary);
        }

        // averaged over raw values, negative ones included
        let average_idf = idf_sum / weights.len() as f64;
        let floor = epsilon * average_idf;
        for term in &negative_terms {
            if let Some(weight) = weights.get_mut(*term) {
                *weight = floor;
            }
        }

        debug!(
            terms = weights.len(),
            floored = negative_terms.len(),
            average_idf,
            "computed idf table"
        );

        Ok(IdfTable {
            weights,
            average_idf,
        })
    }

    /// Weight of `term`, or `None` if the corpus never contained it.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn average_idf(&self) -> f64 {
        self.average_idf
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
