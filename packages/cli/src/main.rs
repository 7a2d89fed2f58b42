mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, check, new, ApplyArgs, CheckArgs, NewArgs};
use tracing_subscriber::EnvFilter;

/// Form CLI - script structural edits against form documents
#[derive(Parser, Debug)]
#[command(name = "form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log resolved addresses and applied mutations
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an empty form document
    New(NewArgs),

    /// Apply a JSON list of mutations to a document
    Apply(ApplyArgs),

    /// Report structural problems in a document
    Check(CheckArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::New(args) => new(args, &cwd),
                Command::Apply(args) => apply(args, &cwd),
                Command::Check(args) => check(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
