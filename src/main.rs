use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;

mod align;
mod browser;
mod diff;
mod server;
mod views;

#[derive(Parser)]
#[command(name = "sidediff")]
#[command(about = "Render a unified diff side by side in your browser")]
struct Cli {
    /// Diff file to render (defaults to standard input)
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sidediff=info,tower_http=warn"));
    tracing_subscriber::registry()
        // stdout carries only the serving address
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let text = read_input(cli.input.as_deref())?;
    let diffs = diff::parse(&text).context("failed to parse diff")?;
    info!("parsed {} file(s)", diffs.len());
    server::serve(diffs).await
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}
