use anyhow::Result;
use clap::Args;
use colored::Colorize;
use form_editor::{check_document, DiagnosticLevel};
use form_protocol::FormDocument;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Form document to check
    pub document: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn check(args: CheckArgs, _cwd: &str) -> Result<()> {
    let source = fs::read_to_string(&args.document)?;
    let document = FormDocument::from_json(&source)?;
    let diagnostics = check_document(&document);

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics.len() - errors;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        println!("{}", args.document.display());
        for diagnostic in &diagnostics {
            let level_str = match diagnostic.level {
                DiagnosticLevel::Error => "error".red().bold(),
                DiagnosticLevel::Warning => "warning".yellow().bold(),
            };
            println!(
                "  {} [{}] {} ({})",
                level_str, diagnostic.rule, diagnostic.message, diagnostic.node_id
            );
        }

        println!();
        if errors > 0 {
            println!("   {} {}", "Errors:".red(), errors);
        }
        if warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), warnings);
        }
        if diagnostics.is_empty() {
            println!("   {} No issues found!", "✓".green());
        }
    }

    // Exit with error code if there are errors
    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
