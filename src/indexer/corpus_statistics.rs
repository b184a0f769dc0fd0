use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{error::IndexError, query_parser::tokenizer::tokenize};

/// Aggregate statistics over an immutable corpus snapshot.
///
/// Documents are identified by their position in the input. Nothing here is
/// mutated once `build` returns.
#[derive(Debug, Clone)]
pub struct CorpusStatistics {
    document_lengths: Vec<usize>,
    term_frequencies: Vec<FxHashMap<String, u32>>,
    document_frequency: FxHashMap<String, u32>,
    // distinct terms in order of first appearance across the corpus
    vocabulary: Vec<String>,
    average_document_length: f64,
}

#[derive(Default)]
struct StatisticsAccumulator {
    document_lengths: Vec<usize>,
    term_frequencies: Vec<FxHashMap<String, u32>>,
    document_frequency: FxHashMap<String, u32>,
    vocabulary: Vec<String>,
    total_length: usize,
}

impl StatisticsAccumulator {
    fn push(mut self, tokens: Vec<String>) -> Self {
        let length = tokens.len();
        self.document_lengths.push(length);
        self.total_length += length;

        let mut frequencies: FxHashMap<String, u32> = FxHashMap::default();
        let mut first_seen = Vec::new();
        for token in tokens {
            match frequencies.entry(token) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    first_seen.push(entry.key().clone());
                    entry.insert(1);
                }
            }
        }

        // once per document, not once per occurrence
        for term in first_seen {
            match self.document_frequency.entry(term) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    self.vocabulary.push(entry.key().clone());
                    entry.insert(1);
                }
            }
        }

        self.term_frequencies.push(frequencies);
        self
    }

    fn finish(self) -> Result<CorpusStatistics, IndexError> {
        let document_count = self.document_lengths.len();
        if document_count == 0 {
            return Err(IndexError::EmptyCorpus);
        }

        let average_document_length = self.total_length as f64 / document_count as f64;
        debug!(
            document_count,
            vocabulary_size = self.vocabulary.len(),
            average_document_length,
            "built corpus statistics"
        );

        Ok(CorpusStatistics {
            document_lengths: self.document_lengths,
            term_frequencies: self.term_frequencies,
            document_frequency: self.document_frequency,
            vocabulary: self.vocabulary,
            average_document_length,
        })
    }
}

impl CorpusStatistics {
    /// Tokenizes every document in order and folds them into corpus statistics.
    pub fn build<I, S>(documents: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        documents
            .into_iter()
            .map(|document| tokenize(document.as_ref()))
            .fold(StatisticsAccumulator::default(), StatisticsAccumulator::push)
            .finish()
    }

    pub fn document_count(&self) -> usize {
        self.document_lengths.len()
    }

    pub fn average_document_length(&self) -> f64 {
        self.average_document_length
    }

    pub fn document_lengths(&self) -> &[usize] {
        &self.document_lengths
    }

    pub fn document_length(&self, doc: usize) -> Option<usize> {
        self.document_lengths.get(doc).copied()
    }

    pub fn term_frequencies(&self) -> &[FxHashMap<String, u32>] {
        &self.term_frequencies
    }

    /// Occurrences of `term` in document `doc`; 0 when absent or out of range.
    pub fn term_frequency(&self, doc: usize, term: &str) -> u32 {
        self.term_frequencies
            .get(doc)
            .and_then(|frequencies| frequencies.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Distinct terms with their document frequency, in first-seen order.
    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.vocabulary
            .iter()
            .map(|term| (term.as_str(), self.document_frequency[term]))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CorpusStatistics {
        CorpusStatistics::build(["the cat sat", "the dog ran", "the cat ran fast"]).unwrap()
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let documents: Vec<String> = Vec::new();
        assert_eq!(
            CorpusStatistics::build(documents).unwrap_err(),
            IndexError::EmptyCorpus
        );
    }

    #[test]
    fn test_document_lengths_and_average() {
        let stats = sample();
        assert_eq!(stats.document_count(), 3);
        assert_eq!(stats.document_lengths(), &[2, 2, 3]);
        assert!((stats.average_document_length() - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_is_mean_of_lengths() {
        let stats = CorpusStatistics::build(["a b c d", "the", "x y", "one two three four five"])
            .unwrap();
        let lengths = stats.document_lengths();
        let mean = lengths.iter().map(|&l| l as f64).sum::<f64>() / lengths.len() as f64;
        assert!((stats.average_document_length() - mean).abs() < 1e-9);
        assert_eq!(stats.document_length(1), Some(0));
        assert_eq!(stats.document_length(9), None);
    }

    #[test]
    fn test_document_frequency_counts_documents_not_occurrences() {
        let stats = CorpusStatistics::build(["cat cat cat", "cat dog", "dog"]).unwrap();
        assert_eq!(stats.document_frequency("cat"), 2);
        assert_eq!(stats.document_frequency("dog"), 2);
        assert_eq!(stats.document_frequency("bird"), 0);
        assert_eq!(stats.term_frequency(0, "cat"), 3);
        assert_eq!(stats.term_frequency(1, "cat"), 1);
        assert_eq!(stats.term_frequency(2, "cat"), 0);
        assert_eq!(stats.term_frequency(7, "cat"), 0);
    }

    #[test]
    fn test_vocabulary_is_in_first_seen_order() {
        let stats = sample();
        let vocabulary: Vec<(&str, u32)> = stats.vocabulary().collect();
        assert_eq!(
            vocabulary,
            vec![("cat", 2), ("sat", 1), ("dog", 1), ("ran", 2), ("fast", 1)]
        );
        assert_eq!(stats.vocabulary_size(), 5);
    }

    #[test]
    fn test_documents_without_terms_are_counted() {
        let stats = CorpusStatistics::build(["the a an", "cat"]).unwrap();
        assert_eq!(stats.document_count(), 2);
        assert_eq!(stats.document_lengths(), &[0, 1]);
        assert!(stats.term_frequencies()[0].is_empty());
        assert!((stats.average_document_length() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_double_space_counts_toward_length() {
        let stats = CorpusStatistics::build(["cat  sat", "dog ran"]).unwrap();
        assert_eq!(stats.document_lengths(), &[3, 2]);
        assert_eq!(stats.term_frequency(0, ""), 1);
        assert_eq!(stats.document_frequency(""), 1);
        assert!((stats.average_document_length() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_document_has_one_empty_term() {
        let stats = CorpusStatistics::build(["", "cat"]).unwrap();
        assert_eq!(stats.document_lengths(), &[1, 1]);
        assert_eq!(stats.term_frequency(0, ""), 1);
    }
}
