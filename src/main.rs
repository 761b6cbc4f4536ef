use std::{sync::Arc, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_grid_solver::{
    config::{Args, Config, OutputFormat},
    spawn_search, Board, Dictionary, GridGenerator, Report, Scorer,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_grid_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?.with_args(args)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    // Build the dictionary before anything searches it
    let dictionary = Dictionary::load(&config.dictionary.path, config.dictionary.min_word_length)
        .await
        .context("Could not load dictionary")?;

    let board = load_board(&config).await?;
    tracing::info!("Solving {}x{} board", board.size(), board.size());

    let report = solve(board, dictionary).await?;

    match config.output.format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Generate, read from file, or read from stdin, depending on config
async fn load_board(config: &Config) -> Result<Board> {
    let size = config.board.size;

    if config.board.random {
        let board = GridGenerator::generate(size)?;
        tracing::info!("Generated random board:\n{}", board);
        return Ok(board);
    }

    let input = match &config.board.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read board from {}", path.display()))?,
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read board from stdin")?;
            input
        }
    };

    Board::parse(&input, size).context("Invalid board")
}

/// Run the search on a worker and tally what it streams back
async fn solve(board: Board, dictionary: Dictionary) -> Result<Report> {
    let board = Arc::new(board);
    let started = Instant::now();

    tracing::info!("Finding words...");
    let (mut words, search) = spawn_search(board.clone(), Arc::new(dictionary));

    let mut found = Vec::new();
    while let Some(word) = words.recv().await {
        found.push(word);
    }
    let stats = search.await.context("Search task failed")?;

    let report = Scorer::tally(found).with_board(&board);
    tracing::info!(
        "Found {} unique words ({} occurrences, {} paths) in {:?}",
        report.word_count,
        stats.words_emitted,
        stats.paths_explored,
        started.elapsed()
    );

    Ok(report)
}
