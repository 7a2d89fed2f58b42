use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use form_editor::{EditSession, EditorError, Mutation};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Form document to edit
    pub document: PathBuf,

    /// JSON array of mutations
    pub mutations: PathBuf,

    /// Write the result here instead of over the input
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut session = EditSession::load(&args.document)
        .with_context(|| format!("Cannot open {}", args.document.display()))?;
    session.set_history_limit(config.max_undo_levels);
    session.set_pretty(config.pretty);

    let source = fs::read_to_string(&args.mutations)?;
    let mutations: Vec<Mutation> = serde_json::from_str(&source)
        .with_context(|| format!("Invalid mutation list in {}", args.mutations.display()))?;

    println!("{}", "✏️  Applying mutations...".bright_blue().bold());

    let refused = apply_all(&mut session, &mutations)?;

    match &args.out {
        Some(out) => session.save_as(out)?,
        None => session.save()?,
    }
    info!(
        applied = mutations.len() - refused,
        refused,
        version = session.version,
        "Applied mutation list"
    );

    println!();
    println!("Applied {} of {} mutations", mutations.len() - refused, mutations.len());
    if let Some(path) = session.path() {
        println!("   Output: {}", path.display());
    }
    Ok(())
}

/// Apply each mutation in turn, printing the outcome; returns how many were refused
fn apply_all(session: &mut EditSession, mutations: &[Mutation]) -> Result<usize> {
    let mut refused = 0;
    for mutation in mutations {
        match session.try_apply(mutation) {
            Ok(Some(id)) => println!("  {} {} → {}", "✓".green(), mutation.name(), id),
            Ok(None) => println!("  {} {}", "✓".green(), mutation.name()),
            Err(EditorError::Mutation(err)) => {
                refused += 1;
                debug!(action = mutation.name(), %err, "Mutation refused");
                println!("  {} {} - {}", "✗".yellow(), mutation.name(), err);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(refused)
}
