//! Miette diagnostics for resource file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;
use tolk::parser::ParseError;
use tolk::LoadError;

/// A miette-compatible diagnostic for a position in a resource file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(tolk::resource))]
pub struct ResourceDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ResourceDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let ParseError::Syntax { message, .. } = err;
        Self::at(path, content, line, column, format!("syntax error: {message}"), None)
    }

    /// Create a diagnostic for a key defined twice in one culture.
    pub fn duplicate_key(path: &Path, content: &str, line: usize, key: &str) -> Self {
        Self::at(
            path,
            content,
            line,
            1,
            format!("duplicate key '{key}'"),
            Some("each key may appear once per culture".to_string()),
        )
    }

    fn at(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        // Convert line:column to byte offset.
        let line_start = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let column_offset = content[line_start.min(content.len())..]
            .chars()
            .take(column.saturating_sub(1))
            .map(char::len_utf8)
            .sum::<usize>();

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = (line_start + column_offset).min(content.len());

        ResourceDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}

/// Turn a load error into a report, with source context when the file can
/// still be read.
pub fn load_error_report(err: LoadError) -> Report {
    match err {
        LoadError::Parse {
            path,
            line,
            column,
            message,
        } => match read_to_string(&path) {
            Ok(content) => {
                let err = ParseError::Syntax {
                    line,
                    column,
                    message,
                };
                ResourceDiagnostic::from_parse_error(&path, &content, &err).into()
            }
            Err(_) => miette!("{}:{line}:{column}: {message}", path.display()),
        },
        LoadError::DuplicateKey { path, line, key } => match read_to_string(&path) {
            Ok(content) => ResourceDiagnostic::duplicate_key(&path, &content, line, &key).into(),
            Err(_) => miette!("{}:{line}: duplicate key '{key}'", path.display()),
        },
        other @ (LoadError::Io { .. } | LoadError::MissingResources { .. }) => miette!("{other}"),
    }
}
