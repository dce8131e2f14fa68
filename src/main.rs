// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use the_wordladder::config::{load_config, Config, RuntimeBuilder, SourceConfig, Strategy};
use the_wordladder::engine::PipelineOutcome;

#[derive(Parser, Debug)]
#[command(name = "wordladder")]
#[command(
    about = "Find the words that stay words while removing one letter at a time",
    long_about = None
)]
struct Cli {
    /// YAML or TOML config file; without one the nine-letter-word puzzle runs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list to read, a local path or an http(s) URL (resets --skip-lines to 0)
    #[arg(short, long)]
    source: Option<String>,

    /// Header lines to drop from the top of the word list
    #[arg(long)]
    skip_lines: Option<usize>,

    /// Shortest bucket length
    #[arg(long)]
    min_length: Option<usize>,

    /// Target length
    #[arg(long)]
    max_length: Option<usize>,

    /// Worker pool size
    #[arg(short, long)]
    workers: Option<usize>,

    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print per-stage counts and the runtime to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Sequential,
    WorkerPool,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => Strategy::Sequential,
            StrategyArg::WorkerPool => Strategy::WorkerPool,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One word per line
    Text,
    /// The whole outcome, including per-stage counts
    Json,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Diagnostics go to stderr; stdout carries only the result
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .init();
}

/// Start from the config file (or the built-in puzzle) and apply command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(source) = &cli.source {
        config.source = SourceConfig::parse(source);
        config.corpus.skip_lines = 0;
    }
    if let Some(skip_lines) = cli.skip_lines {
        config.corpus.skip_lines = skip_lines;
    }
    if let Some(min_length) = cli.min_length {
        config.min_length = min_length;
    }
    if let Some(max_length) = cli.max_length {
        config.max_length = max_length;
    }
    if let Some(workers) = cli.workers {
        config.executor_options.worker_count = Some(workers);
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }

    Ok(config)
}

fn print_stats(outcome: &PipelineOutcome) {
    eprintln!("Corpus size: {}", outcome.corpus_size);
    for stage in &outcome.stages {
        eprintln!(
            "{} letter words: {} ({} contained in {} letter words after one letter removal, {}ms)",
            stage.length,
            stage.bucket_size,
            stage.surviving,
            stage.length - 1,
            stage.elapsed_ms
        );
    }
    eprintln!("Result size: {}", outcome.words.len());
    eprintln!("Runtime: {}ms", outcome.elapsed_ms);
}

fn print_outcome(outcome: &PipelineOutcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for word in &outcome.words {
                println!("{}", word);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome).context("failed to encode outcome")?;
            println!("{}", json);
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    let (loader, pipeline) = RuntimeBuilder::pipeline_from_config(&config)?;

    let cancel = pipeline.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let outcome = pipeline.run(loader.as_ref()).await?;

    if cli.stats {
        print_stats(&outcome);
    }
    print_outcome(&outcome, cli.format)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
