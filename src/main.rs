use std::{env, path::Path, process};

use bm25_ranker::{
    RankingIndex,
    config::{Config, load_config},
    query_parser::tokenizer::tokenize,
    utils::corpus_reader::read_corpus,
};
use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const PREVIEW_CHARS: usize = 80;

fn preview(document: &str) -> String {
    let mut preview: String = document.chars().take(PREVIEW_CHARS).collect();
    if document.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

fn print_help() {
    println!("The valid commands are->");
    println!("stats: Prints corpus statistics");
    println!("idf [term]: Prints the stored idf weight of a term");
    println!("query [query string]: Prints the best matching documents");
    println!("scores [query string]: Prints the score of every document");
    println!("exit: Quits");
}

fn build_index(config: &Config) -> Result<(Vec<String>, RankingIndex), String> {
    let documents = read_corpus(Path::new(&config.corpus_path))
        .map_err(|e| format!("could not read {}: {}", config.corpus_path, e))?;
    let index = RankingIndex::with_params(&documents, config.params())
        .map_err(|e| format!("could not build index: {}", e))?;
    Ok((documents, index))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bm25_ranker=info")),
        )
        .init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = load_config(Path::new(&config_path));

    println!("\nCurrent Configuration:");
    println!("  Corpus Path: {}", config.corpus_path);
    println!("  k1:          {}", config.k1);
    println!("  b:           {}", config.b);
    println!("  epsilon:     {}", config.epsilon);
    println!("  top k:       {}", config.top_k);

    let (documents, index) = match build_index(&config) {
        Ok(built) => built,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            error!(error = %e, "could not start line editor");
            process::exit(1);
        }
    };

    println!("\nType 'help' for commands or 'exit' to quit.\n");
    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line) {
                    warn!(error = %e, "could not record history entry");
                }

                let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
                match command {
                    "help" => print_help(),
                    "stats" => {
                        println!("The number of documents is {}", index.document_count());
                        println!("The number of terms is {}", index.vocabulary_size());
                        println!(
                            "The average document length is {:.4}",
                            index.average_document_length()
                        );
                        println!("The average idf is {:.4}", index.average_idf());
                    }
                    "idf" => match index.idf(rest.trim()) {
                        Some(idf) => println!(
                            "{} idf {:.6} (in {} documents)",
                            rest.trim(),
                            idf,
                            index.document_frequency(rest.trim())
                        ),
                        None => println!("{} does not occur in the corpus", rest.trim()),
                    },
                    "query" => {
                        let results = index.top_k(&tokenize(rest), config.top_k);
                        if results.is_empty() {
                            println!("No matching documents");
                        }
                        for (doc, score) in results {
                            println!("[{}] score {:.6} {}", doc, score, preview(&documents[doc]));
                        }
                    }
                    "scores" => {
                        for (doc, score) in index.score_text(rest).iter().enumerate() {
                            println!("[{}] {:.6}", doc, score);
                        }
                    }
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        println!(
                            "Invalid command. Type help if you want to see the valid commands"
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}
