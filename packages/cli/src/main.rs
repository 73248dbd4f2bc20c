mod commands;

use clap::{Parser, Subcommand};
use commands::{apply, blocks, export, new, ApplyArgs, ExportArgs, NewArgs};

/// Mailsmith CLI - compose and export table-based marketing emails
#[derive(Parser, Debug)]
#[command(name = "mailsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a fresh document with default header and footer
    New(NewArgs),

    /// Render a document JSON file to email HTML
    Export(ExportArgs),

    /// Apply a JSON command script to a document
    Apply(ApplyArgs),

    /// List the block catalog
    Blocks,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::New(args) => new(args),
        Command::Export(args) => export(args),
        Command::Apply(args) => apply(args),
        Command::Blocks => blocks(),
    }
}
