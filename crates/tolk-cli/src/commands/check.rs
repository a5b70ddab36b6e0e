//! Implementation of the `tolk check` command.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tolk::parser::{parse_resources, ResourceEntry};

use crate::output::ResourceDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.tolk)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileCheck {
    file: String,
    entries: usize,
    problems: Vec<Problem>,
}

#[derive(Debug, Serialize)]
struct Problem {
    line: usize,
    column: usize,
    message: String,
}

/// What went wrong in one file, with the diagnostic to print.
enum Outcome {
    Unreadable(String),
    Checked {
        entries: usize,
        problems: Vec<(Problem, ResourceDiagnostic)>,
    },
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut any_invalid = false;
    let mut any_unreadable = false;
    let mut results = Vec::new();

    for path in &args.files {
        let outcome = check_file(path);
        let (entries, problems) = match outcome {
            Outcome::Unreadable(message) => {
                any_unreadable = true;
                if !args.json {
                    eprintln!("{} {}: {message}", "✗".red(), path.display());
                }
                let problem = Problem {
                    line: 0,
                    column: 0,
                    message,
                };
                (0, vec![problem])
            }
            Outcome::Checked { entries, problems } => {
                any_invalid |= !problems.is_empty();
                let (problems, diagnostics): (Vec<Problem>, Vec<ResourceDiagnostic>) =
                    problems.into_iter().unzip();
                if !args.json {
                    if problems.is_empty() {
                        println!("{} {} ({entries} entries)", "✓".green(), path.display());
                    }
                    for diagnostic in diagnostics {
                        eprintln!("{:?}", Report::new(diagnostic));
                    }
                }
                (entries, problems)
            }
        };

        results.push(FileCheck {
            file: path.display().to_string(),
            entries,
            problems,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    }

    Ok(if any_unreadable {
        exitcode::NOINPUT
    } else if any_invalid {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}

fn check_file(path: &Path) -> Outcome {
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Outcome::Unreadable(format!("cannot read file: {e}")),
    };

    match parse_resources(&content) {
        Ok(entries) => Outcome::Checked {
            entries: entries.len(),
            problems: duplicate_keys(&entries)
                .into_iter()
                .map(|entry| {
                    let problem = Problem {
                        line: entry.line,
                        column: 1,
                        message: format!("duplicate key '{}'", entry.key),
                    };
                    let diagnostic =
                        ResourceDiagnostic::duplicate_key(path, &content, entry.line, &entry.key);
                    (problem, diagnostic)
                })
                .collect(),
        },
        Err(e) => {
            let (line, column) = e.position();
            let problem = Problem {
                line,
                column,
                message: e.to_string(),
            };
            let diagnostic = ResourceDiagnostic::from_parse_error(path, &content, &e);
            Outcome::Checked {
                entries: 0,
                problems: vec![(problem, diagnostic)],
            }
        }
    }
}

/// Every entry whose key already appeared earlier in the file.
fn duplicate_keys(entries: &[ResourceEntry]) -> Vec<&ResourceEntry> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| !seen.insert(entry.key.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn problems(outcome: Outcome) -> Vec<Problem> {
        match outcome {
            Outcome::Checked { problems, .. } => {
                problems.into_iter().map(|(problem, _)| problem).collect()
            }
            Outcome::Unreadable(message) => panic!("unexpected unreadable file: {message}"),
        }
    }

    #[test]
    fn valid_file_has_no_problems() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Resources.tolk");
        fs::write(&path, "A = \"a\";\nB = \"b\";\n").unwrap();

        assert!(problems(check_file(&path)).is_empty());
    }

    #[test]
    fn syntax_error_is_located() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Resources.tolk");
        fs::write(&path, "A = \"a\"\nB = \"b\";\n").unwrap();

        let problems = problems(check_file(&path));
        assert_eq!(problems.len(), 1);
        assert_eq!((problems[0].line, problems[0].column), (2, 1));
    }

    #[test]
    fn duplicate_keys_are_reported_after_first_use() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Resources.tolk");
        fs::write(&path, "A = \"a\";\nB = \"b\";\nA = \"again\";\n").unwrap();

        let problems = problems(check_file(&path));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].line, 3);
        assert_eq!(problems[0].message, "duplicate key 'A'");
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            check_file(&dir.path().join("absent.tolk")),
            Outcome::Unreadable(_)
        ));
    }
}
