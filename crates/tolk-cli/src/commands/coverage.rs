//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use tolk::{Culture, ResourceStore, TranslatorConfig, ValidationWarning};

use super::{build_translator, load_store, resource_directory};
use crate::output::table::{format_coverage_table, CultureCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Resource directory holding the resource set.
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Base name of the resource set (e.g., Resources).
    #[arg(long, required = true)]
    pub base: String,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs, config: TranslatorConfig) -> Result<i32> {
    let directory = resource_directory(args.resources, &config)?;
    let store = load_store(&directory, &args.base)?;
    let translator = build_translator(directory, config);

    let coverage = culture_coverage(&store, &translator.cultures(), &translator.validate(&store));
    let any_incomplete = coverage.iter().any(|c| !c.is_complete());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&coverage).into_diagnostic()?);
    } else if coverage.is_empty() {
        eprintln!("{}", "no cultures found".yellow());
    } else {
        println!("{}", format_coverage_table(&coverage));

        for culture in &coverage {
            if !culture.missing.is_empty() {
                println!("\nMissing in {}:", culture.culture.bold());
                for key in &culture.missing {
                    println!("  - {key}");
                }
            }
            if !culture.unknown.is_empty() {
                println!("\nNot in invariant resources, {}:", culture.culture.bold());
                for key in &culture.unknown {
                    println!("  - {}", key.dimmed());
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Group validation warnings into one coverage row per culture.
fn culture_coverage(
    store: &dyn ResourceStore,
    cultures: &[Culture],
    warnings: &[ValidationWarning],
) -> Vec<CultureCoverage> {
    let total = store.keys(&Culture::invariant()).len();

    cultures
        .iter()
        .filter(|culture| !culture.is_invariant())
        .map(|culture| {
            let mut missing = Vec::new();
            let mut unknown = Vec::new();
            for warning in warnings.iter().filter(|w| w.culture() == culture) {
                match warning {
                    ValidationWarning::MissingTranslation { key, .. } => missing.push(key.clone()),
                    ValidationWarning::UnknownKey { key, .. } => unknown.push(key.clone()),
                }
            }
            CultureCoverage {
                culture: culture.name().to_string(),
                translated: total - missing.len(),
                total,
                missing,
                unknown,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tolk::{validate_translations, MemoryStore};

    use super::*;

    fn culture(tag: &str) -> Culture {
        Culture::parse(tag).unwrap()
    }

    #[test]
    fn rows_count_translated_and_missing_keys() {
        let store = MemoryStore::new("Resources")
            .with(Culture::invariant(), "Greeting", "Hello")
            .with(Culture::invariant(), "Farewell", "Goodbye")
            .with(culture("sv"), "Greeting", "Hej")
            .with(culture("sv"), "Welcome", "Välkommen")
            .with(culture("en"), "Greeting", "Hello!")
            .with(culture("en"), "Farewell", "Bye!");
        let cultures = vec![culture("en"), culture("sv"), culture("de")];
        let warnings = validate_translations(&store, &cultures);

        let coverage = culture_coverage(&store, &cultures, &warnings);
        let rows: Vec<(&str, usize, usize)> = coverage
            .iter()
            .map(|c| (c.culture.as_str(), c.translated, c.total))
            .collect();
        assert_eq!(rows, vec![("en", 2, 2), ("sv", 1, 2), ("de", 0, 2)]);
        assert_eq!(coverage[1].missing, vec!["Farewell".to_string()]);
        assert_eq!(coverage[1].unknown, vec!["Welcome".to_string()]);
    }
}
