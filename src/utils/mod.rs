pub mod corpus_reader;
