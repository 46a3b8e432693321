mod dataset;

use anyhow::Result;
use clap::{Parser, Subcommand};
use core::{corpus_vocabulary, recommend, RecommendConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recommender")]
#[command(about = "Recommend manga by synopsis similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the corpus against a title or free-text query
    Recommend {
        /// Dataset path (.csv, .json, or .jsonl)
        #[arg(long)]
        input: PathBuf,
        /// A known title (its synopsis is substituted) or raw text
        #[arg(long)]
        query: String,
        /// Number of recommendations to return
        #[arg(long, default_value_t = 10)]
        top_n: usize,
        /// Vocabulary cap for the diagnostics pass
        #[arg(long, default_value_t = 10_000)]
        vocab_size: usize,
        /// Stopword language
        #[arg(long, default_value = "english")]
        stopwords: String,
        /// Emit results as a JSON array instead of plain lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the most frequent vocabulary terms of a dataset
    Stats {
        /// Dataset path (.csv, .json, or .jsonl)
        #[arg(long)]
        input: PathBuf,
        /// Vocabulary cap
        #[arg(long, default_value_t = 10_000)]
        vocab_size: usize,
        /// How many top terms to print
        #[arg(long, default_value_t = 20)]
        show: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend { input, query, top_n, vocab_size, stopwords, json } => {
            let config = RecommendConfig { vocab_size, top_n, stopword_language: stopwords };
            run_recommend(&input, &query, &config, json)
        }
        Commands::Stats { input, vocab_size, show } => {
            let config = RecommendConfig { vocab_size, ..Default::default() };
            run_stats(&input, &config, show)
        }
    }
}

fn run_recommend(input: &Path, query: &str, config: &RecommendConfig, json: bool) -> Result<()> {
    let corpus = dataset::load_corpus(input)?;

    let vocabulary = corpus_vocabulary(&corpus, config)?;
    tracing::info!(vocab_terms = vocabulary.len(), "built corpus vocabulary");

    let results = recommend(&corpus, query, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    println!("Top {} recommendations:", results.len());
    for rec in &results {
        println!(" - {} ({:.4})", rec.title, rec.score);
    }
    Ok(())
}

fn run_stats(input: &Path, config: &RecommendConfig, show: usize) -> Result<()> {
    let corpus = dataset::load_corpus(input)?;
    let vocabulary = corpus_vocabulary(&corpus, config)?;
    println!(
        "{} documents, {} vocabulary entries (cap {})",
        corpus.len(),
        vocabulary.len(),
        config.vocab_size
    );
    for (term, count) in vocabulary.ranked_terms().take(show) {
        println!("{count:>8}  {term}");
    }
    Ok(())
}
