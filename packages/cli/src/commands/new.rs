use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use form_editor::EditSession;
use form_protocol::FormDocument;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Where to write the document
    pub path: PathBuf,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    if args.path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), args.path.display().to_string().bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut session = EditSession::new(FormDocument::empty());
    session.set_pretty(config.pretty);
    session.save_as(&args.path)?;

    println!("  {} Created {}", "✓".green(), args.path.display());
    Ok(())
}
