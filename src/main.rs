//! Text processing API server and CLI
//!
//! Runs the HTTP server by default; the `process` subcommand is an offline
//! fallback that runs the batch pipeline over a JSON file without a server.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use textsum_rs::server::builder::run_server;
use textsum_rs::{
    BatchOrchestrator, Config, LsaSummarizer, TextProcessor, DEFAULT_SENTENCE_COUNT,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "api", version, about = "Text processing and summarization API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Override the listen port (otherwise PORT env or 5000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Process a JSON batch file offline
    Process {
        /// Input JSON file (single object or array with `description` fields)
        #[arg(long)]
        input: PathBuf,
        /// Where to write the result; printed to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// Number of summary sentences
        #[arg(long, default_value_t = DEFAULT_SENTENCE_COUNT)]
        sentences: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let debug = std::env::var("DEBUG")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Process {
            input,
            output,
            sentences,
        }) => run_process(input, output, sentences),
        Some(Command::Serve { port }) => serve(port).await,
        None => serve(None).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(port) = port {
        config.server.port = port;
    }
    run_server(config).await?;
    Ok(())
}

fn run_process(
    input: PathBuf,
    output: Option<PathBuf>,
    sentences: usize,
) -> anyhow::Result<()> {
    // Same boundary coercion as the HTTP layer: invalid counts fall back
    let sentences = if sentences >= 1 {
        sentences
    } else {
        DEFAULT_SENTENCE_COUNT
    };

    let processor = Arc::new(TextProcessor::new(Arc::new(LsaSummarizer::new())));
    let orchestrator = BatchOrchestrator::new(processor);

    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let data: serde_json::Value =
        serde_json::from_str(&content).context("input file is not valid JSON")?;

    let result = orchestrator.process_batch(&data, sentences)?;
    let rendered = serde_json::to_string_pretty(&result)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Processed {} items into {}",
                result.total_items,
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
