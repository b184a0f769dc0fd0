pub mod bm_25;
pub mod idf;
