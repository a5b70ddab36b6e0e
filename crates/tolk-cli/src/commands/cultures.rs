//! Implementation of the `tolk cultures` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tolk::TranslatorConfig;

use super::{build_translator, resource_directory};

/// Arguments for the cultures command.
#[derive(Debug, clap::Args)]
pub struct CulturesArgs {
    /// Resource directory to scan
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the cultures command.
#[derive(Debug, Serialize)]
struct CulturesJson {
    cultures: Vec<String>,
    current: Option<String>,
}

/// Run the cultures command.
pub fn run_cultures(args: CulturesArgs, config: TranslatorConfig) -> Result<i32> {
    let directory = resource_directory(args.resources, &config)?;
    let translator = build_translator(directory, config);
    let cultures = translator.cultures();
    let current = translator.current_culture();

    if args.json {
        let output = CulturesJson {
            cultures: cultures.iter().map(|c| c.name().to_string()).collect(),
            current: current.as_ref().map(|c| c.name().to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    if cultures.is_empty() {
        eprintln!("{}", "no cultures found".yellow());
    }
    for culture in &cultures {
        if current.as_ref() == Some(culture) {
            println!("{} {}", culture.bold(), "(current)".dimmed());
        } else {
            println!("{culture}");
        }
    }
    Ok(exitcode::OK)
}
