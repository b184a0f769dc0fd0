//! Loads a document corpus from disk.
//!
//! The format is picked from the file extension: `.json` holds an array,
//! `.jsonl` one value per line, anything else one document per line.
//! A trailing `.bz2` or `.zst` is decompressed first.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use bzip2::read::BzDecoder;
use serde_json::Value;
use tracing::debug;

use crate::error::CorpusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Text,
    Json,
    JsonLines,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => CorpusFormat::Json,
            Some("jsonl") | Some("ndjson") => CorpusFormat::JsonLines,
            _ => CorpusFormat::Text,
        }
    }
}

pub fn read_corpus(path: &Path) -> Result<Vec<String>, CorpusError> {
    let file = File::open(path)?;
    let (reader, inner_path): (Box<dyn Read>, PathBuf) =
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bz2") => (Box::new(BzDecoder::new(file)), path.with_extension("")),
            Some("zst") => (
                Box::new(zstd::stream::read::Decoder::new(file)?),
                path.with_extension(""),
            ),
            _ => (Box::new(file), path.to_path_buf()),
        };

    let format = CorpusFormat::from_path(&inner_path);
    let documents = parse_corpus(BufReader::new(reader), format)?;
    debug!(path = %path.display(), ?format, documents = documents.len(), "read corpus");
    Ok(documents)
}

pub fn parse_corpus<R: BufRead>(reader: R, format: CorpusFormat) -> Result<Vec<String>, CorpusError> {
    match format {
        CorpusFormat::Text => {
            let mut documents = Vec::new();
            for line in reader.lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    documents.push(line);
                }
            }
            Ok(documents)
        }
        CorpusFormat::Json => {
            let items: Vec<Value> = serde_json::from_reader(reader)?;
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| item_text(index, item))
                .collect()
        }
        CorpusFormat::JsonLines => serde_json::Deserializer::from_reader(reader)
            .into_iter::<Value>()
            .enumerate()
            .map(|(index, item)| item_text(index, item?))
            .collect(),
    }
}

fn item_text(index: usize, item: Value) -> Result<String, CorpusError> {
    match item {
        Value::String(text) => Ok(text),
        Value::Object(mut fields) => match fields.remove("text") {
            Some(Value::String(text)) => Ok(text),
            _ => Err(CorpusError::MissingText { index }),
        },
        _ => Err(CorpusError::UnsupportedFormat { index }),
    }
}
