mod cli;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use callertree::{CallGraph, CorpusLoader, Language, ReverseCallTreeUseCase};
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let symbol = cli.symbol().to_string();
    match run(&cli, &symbol) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error generating reverse call tree for function '{}': {:#}", symbol, e);
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries the JSON. `RUST_LOG` overrides the flags.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(cli: &Cli, symbol: &str) -> Result<()> {
    let language: Language = cli.language.parse()?;
    if let Some(file_path) = &cli.file_path {
        debug!("Ignoring file path {} for reverse call tree", file_path.display());
    }

    info!(
        "Building reverse call tree for '{}' in {} ({})",
        symbol,
        cli.repo_path.display(),
        language
    );

    let corpus = CorpusLoader::new(language)
        .context("Failed to initialise parser")?
        .load(&cli.repo_path);
    let graph = ReverseCallTreeUseCase::new(Arc::new(corpus)).execute(symbol)?;
    let json = render(&graph, cli.compact)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} nodes to {}", graph.node_count(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

/// Pretty JSON uses a four-space indent.
fn render(graph: &CallGraph, compact: bool) -> Result<String> {
    if compact {
        return Ok(serde_json::to_string(graph)?);
    }
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    graph.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
