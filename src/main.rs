//! Lexikon - Main entrypoint.
//!
//! Command-line front-end for the prefix indexes. It initializes logging,
//! loads configuration, builds an index from a vocabulary file and answers a
//! single query.

use clap::{Parser, Subcommand};
use lexikon_lib::config::{self, ConfigLoader, LexikonConfig, LogConfig};
use lexikon_lib::data_structures::prefix_trie::PrefixIndex;
use lexikon_lib::error::{
    ErrorContext, ErrorReporter, LexikonError, LexikonResult, TracingErrorReporter,
};
use lexikon_lib::vocabulary;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lexikon.
#[derive(Parser, Debug)]
#[clap(name = "Lexikon", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List the words of a term list starting with a prefix
    Search {
        /// Term list, one term per line
        #[clap(long, value_parser)]
        vocab: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of words (defaults to the configured ceiling)
        #[clap(short, long)]
        limit: Option<usize>,

        /// Print the result as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Count the insertions of a term list sharing a prefix
    Count {
        /// Term list, one term per line
        #[clap(long, value_parser)]
        vocab: PathBuf,

        /// Prefix to count
        prefix: String,
    },

    /// List the ids of a `term<TAB>id` list whose terms start with a prefix
    Postings {
        /// Posting list, `term<TAB>id` per line
        #[clap(long, value_parser)]
        vocab: PathBuf,

        /// Prefix to look up
        prefix: String,

        /// Maximum number of terms to visit (defaults to the configured ceiling)
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LexikonResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    result.map_err(|e| LexikonError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn open(path: &Path) -> LexikonResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn run(command: Command, config: &LexikonConfig) -> LexikonResult<()> {
    let trie_config = config.index.trie_config();

    match command {
        Command::Search {
            vocab,
            prefix,
            limit,
            json,
        } => {
            let index = vocabulary::build_existence_index(open(&vocab)?, trie_config)?;
            let words = match limit {
                Some(limit) => index.search_prefix_with_limit(&prefix, limit),
                None => index.search_prefix(&prefix),
            };
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in words {
                    println!("{word}");
                }
            }
        }
        Command::Count { vocab, prefix } => {
            let index = vocabulary::build_existence_index(open(&vocab)?, trie_config)?;
            println!(
                "{}\t{}",
                index.prefix_count(&prefix),
                index.word_count()
            );
        }
        Command::Postings {
            vocab,
            prefix,
            limit,
        } => {
            let index = vocabulary::build_posting_index(open(&vocab)?, trie_config)?;
            let ids = match limit {
                Some(limit) => index.search_prefix_for_indexes_with_limit(&prefix, limit),
                None => index.search_prefix_for_indexes(&prefix),
            };
            println!("{}", serde_json::to_string(&ids)?);
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LexikonConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LexikonError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(args.command, &config) {
        TracingErrorReporter.report(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
