//! Implementation of the `tolk translate` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tolk::{Culture, ErrorHandling, TranslatorConfig};

use super::{build_translator, load_store, resource_directory};

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Resource directory holding the resource set
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Base name of the resource set (e.g., Resources)
    #[arg(long, required = true)]
    pub base: String,

    /// Resource key to translate
    #[arg(long, required = true)]
    pub key: String,

    /// Culture to translate to. Defaults to the current culture.
    #[arg(long)]
    pub culture: Option<Culture>,

    /// Error handling policy. Defaults to the configured policy.
    #[arg(long)]
    pub error_handling: Option<ErrorHandling>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Debug, Serialize)]
struct TranslateJson {
    key: String,
    culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs, config: TranslatorConfig) -> Result<i32> {
    let directory = resource_directory(args.resources, &config)?;
    let store = load_store(&directory, &args.base)?;
    let translator = build_translator(directory, config);

    let culture = args.culture.or_else(|| translator.current_culture());
    let error_handling = args.error_handling.unwrap_or_default();
    tracing::debug!(key = %args.key, culture = ?culture, %error_handling, "translating");

    let result = translator.translate_to(Some(&store), &args.key, culture.as_ref(), error_handling);

    if args.json {
        let output = TranslateJson {
            key: args.key,
            culture: culture.as_ref().map(|c| c.name().to_string()),
            text: result.as_ref().ok().cloned(),
            error: result.as_ref().err().map(ToString::to_string),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        match &result {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Translation error: {e}"),
        }
    }

    if result.is_ok() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
