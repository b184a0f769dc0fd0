pub mod corpus_statistics;
