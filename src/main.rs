//! mapmerge CLI
//!
//! Entry point for the `mapmerge` command-line tool.

use clap::{Parser, Subcommand};
use mapmerge::{document, merge_layers, MergeOptions, Value};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "mapmerge")]
#[command(about = "Deep-merge layered configuration documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge documents in order; later files take precedence
    Merge {
        /// Input documents (JSON, TOML, or YAML)
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,

        /// Maximum nested mapping depth before the merge fails
        #[arg(long)]
        max_depth: Option<usize>,

        /// Concatenate sequences instead of replacing them
        #[arg(long)]
        append_sequences: bool,

        /// Output YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },

    /// Parse a document and report its top-level shape
    Check {
        /// Document to check
        file: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge {
            files,
            max_depth,
            append_sequences,
            yaml,
        } => {
            run_merge(files, max_depth, append_sequences, yaml);
        }
        Commands::Check { file, json } => {
            run_check(file, json);
        }
    }
}

fn run_merge(files: Vec<PathBuf>, max_depth: Option<usize>, append_sequences: bool, yaml: bool) {
    let mut layers = Vec::with_capacity(files.len());
    for path in &files {
        match document::load(path) {
            Ok(doc) => layers.push(doc),
            Err(e) => {
                eprintln!("Error loading {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    let mut options = MergeOptions::new();
    if let Some(limit) = max_depth {
        options = options.with_max_depth(limit);
    }
    if append_sequences {
        options = options.with_append_sequences();
    }

    let merged = match merge_layers(layers, &options) {
        Ok(merged) => merged,
        Err(e) => {
            eprintln!("Merge error: {}", e);
            process::exit(1);
        }
    };

    let rendered = if yaml {
        document::to_yaml_string(&merged)
    } else {
        document::to_json_string(&merged)
    };

    match rendered {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

/// Shape report for the `check` subcommand.
#[derive(Serialize)]
struct DocumentSummary {
    path: String,
    format: String,
    kind: &'static str,
    top_level_keys: usize,
}

fn run_check(file: PathBuf, json_output: bool) {
    let doc = match document::load(&file) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error loading {}: {}", file.display(), e);
            process::exit(1);
        }
    };

    let (kind, top_level_keys) = match &doc {
        Value::Mapping(map) => ("mapping", map.len()),
        Value::Sequence(seq) => ("sequence", seq.len()),
        Value::Null => ("null", 0),
        _ => ("scalar", 0),
    };

    let summary = DocumentSummary {
        path: file.display().to_string(),
        format: document::extension(&file).to_string(),
        kind,
        top_level_keys,
    };

    if json_output {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("Document valid: {}", summary.path);
        println!();
        println!("  Format: {}", summary.format);
        println!("  Shape: {}", summary.kind);
        if summary.kind == "mapping" {
            println!("  Top-level keys: {}", summary.top_level_keys);
        } else if summary.kind == "sequence" {
            println!("  Elements: {}", summary.top_level_keys);
        }
    }
}
