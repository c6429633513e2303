use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Print the text hidden in the `Err1:` lines of a log
#[derive(Parser, Debug)]
#[command(name = "err1dec", version)]
struct Cli {
    /// Log file to scan
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // stdout carries only decoded text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    err1dec::decode_file(&cli.input, io::BufWriter::new(stdout.lock()))
        .with_context(|| format!("Failed on {}", cli.input.display()))?;

    Ok(())
}
