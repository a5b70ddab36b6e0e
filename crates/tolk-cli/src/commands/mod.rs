//! CLI command implementations.

mod check;
mod coverage;
mod cultures;
mod translate;

use std::path::{Path, PathBuf};

use miette::{miette, Result};
use tolk::{FileStore, Translator, TranslatorConfig};

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use cultures::{run_cultures, CulturesArgs};
pub use translate::{run_translate, TranslateArgs};

use crate::output::load_error_report;

/// The resource directory from the flag, falling back to the config file.
fn resource_directory(flag: Option<PathBuf>, config: &TranslatorConfig) -> Result<PathBuf> {
    flag.or_else(|| config.resource_directory.clone()).ok_or_else(|| {
        miette!("no resource directory given; pass --resources or set resource_directory in the config file")
    })
}

/// A translator scanning `directory`, with every other setting from `config`.
fn build_translator(directory: PathBuf, config: TranslatorConfig) -> Translator {
    Translator::new(TranslatorConfig {
        resource_directory: Some(directory),
        ..config
    })
}

fn load_store(directory: &Path, base_name: &str) -> Result<FileStore> {
    FileStore::load(directory, base_name).map_err(load_error_report)
}
