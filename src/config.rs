use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::scoring::bm_25::Bm25Params;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub corpus_path: String,
    pub k1: f64,
    pub b: f64,
    pub epsilon: f64,
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        let params = Bm25Params::default();
        Config {
            corpus_path: "corpus.txt".to_string(),
            k1: params.k1,
            b: params.b,
            epsilon: params.epsilon,
            top_k: 5,
        }
    }
}

impl Config {
    pub fn params(&self) -> Bm25Params {
        Bm25Params::new(self.k1, self.b, self.epsilon)
    }
}

/// Reads `path` as JSON. A missing or unreadable file falls back to defaults.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "config not found, using default configuration");
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error parsing config, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "error reading config, using defaults");
            Config::default()
        }
    }
}
