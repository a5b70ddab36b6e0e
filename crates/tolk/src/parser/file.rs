//! Resource file parser.

use winnow::combinator::{alt, cut_err, delimited, preceded, repeat};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use super::error::ParseError;

/// A single `key = "text";` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub key: String,
    pub value: String,
    /// 1-based line of the key.
    pub line: usize,
}

/// Parse the contents of a resource file into entries, in file order.
///
/// Duplicate keys are not rejected here; stores decide how to treat them.
pub fn parse_resources(input: &str) -> Result<Vec<ResourceEntry>, ParseError> {
    let mut remaining = input;
    let mut entries = Vec::new();

    skip_ws_and_comments(&mut remaining).map_err(|e| syntax_error(input, remaining, &e))?;
    while !remaining.is_empty() {
        let (line, _) = calculate_position(input, remaining);
        let (key, value) = entry(&mut remaining).map_err(|e| syntax_error(input, remaining, &e))?;
        entries.push(ResourceEntry { key, value, line });
        skip_ws_and_comments(&mut remaining).map_err(|e| syntax_error(input, remaining, &e))?;
    }

    Ok(entries)
}

fn syntax_error(original: &str, remaining: &str, error: &ErrMode<ContextError>) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let found = remaining
        .chars()
        .next()
        .map_or_else(|| "end of file".to_string(), |c| format!("'{}'", c.escape_debug()));

    let expected: Vec<String> = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e
            .context()
            .filter_map(|context| {
                if let StrContext::Expected(value) = context {
                    Some(value.to_string())
                } else {
                    None
                }
            })
            .collect(),
        ErrMode::Incomplete(_) => Vec::new(),
    };

    let message = if expected.is_empty() {
        format!("unexpected {found}")
    } else {
        format!("expected {}, found {found}", expected.join(" or "))
    };

    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

fn expected(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}

/// Parse one entry: key = "text";
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let key = resource_key
        .context(expected("resource key"))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    cut_err('=').context(expected("'='")).parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = cut_err(quoted_text)
        .context(expected("quoted text"))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    cut_err(';').context(expected("';'")).parse_next(input)?;
    Ok((key.to_string(), value))
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Keys are ASCII alphanumerics plus `_`, `.` and `-`.
fn resource_key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
    })
    .parse_next(input)
}

/// A piece of quoted text.
enum Fragment<'i> {
    Literal(&'i str),
    Escaped(char),
}

/// Parse quoted text: "content" with backslash escapes.
fn quoted_text(input: &mut &str) -> ModalResult<String> {
    delimited('"', text_content, cut_err('"').context(expected("closing '\"'")))
        .parse_next(input)
}

fn text_content(input: &mut &str) -> ModalResult<String> {
    repeat(0.., text_fragment)
        .fold(String::new, |mut text, fragment| {
            match fragment {
                Fragment::Literal(s) => text.push_str(s),
                Fragment::Escaped(c) => text.push(c),
            }
            text
        })
        .parse_next(input)
}

fn text_fragment<'i>(input: &mut &'i str) -> ModalResult<Fragment<'i>> {
    alt((
        take_till(1.., ['"', '\\']).map(Fragment::Literal),
        escaped_char.map(Fragment::Escaped),
    ))
    .parse_next(input)
}

/// Parse an escape sequence: \" \\ \n \t \r
fn escaped_char(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        cut_err(alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
            'r'.value('\r'),
        )))
        .context(expected("escape sequence")),
    )
    .parse_next(input)
}
