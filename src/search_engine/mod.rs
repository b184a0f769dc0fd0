pub mod search_engine;
