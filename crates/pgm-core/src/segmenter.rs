//! Line-oriented SQL statement segmenter.
//!
//! Splits one migration file's text into an ordered list of executable
//! statements. Blank lines and `--` comment lines are skipped; remaining
//! lines are trimmed and space-joined into the current statement, which a
//! trailing `;` terminates. Function definitions are the exception: once a
//! statement opens with `CREATE [OR REPLACE] FUNCTION`, termination also
//! requires the line to end with one of a fixed set of procedural-language
//! tags (`sql`, `plpgsql`, `plperl`, `plpythonu`, `pltcl`) immediately
//! before the terminator, so function bodies containing internal `;` stay
//! one statement.
//!
//! This is a textual heuristic, not a SQL grammar: it does not understand
//! terminators inside quoted strings or dollar-quoted bodies in languages
//! outside the fixed tag set. Keep migration files within those bounds.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Line prefix marking a SQL comment
const COMMENT_MARKER: &str = "--";

/// Statement terminator at end of line
const TERMINATOR: char = ';';

/// Procedural-language tags that may close a function body.
///
/// Fixed set, matched case-insensitively as the last word before the
/// terminator. Extending it changes which files segment as one statement,
/// so treat it as part of the on-disk format.
const FUNCTION_LANGUAGE_TAGS: &[&str] = &["sql", "plpgsql", "plperl", "plpythonu", "pltcl"];

/// Segment `text` into executable statements, terminators stripped.
///
/// `path` is only used for error context. Fails with
/// [`CoreError::EmptyMigration`] if no statements result.
pub fn segment(path: &Path, text: &str) -> CoreResult<Vec<String>> {
    let mut statements = Vec::new();
    let mut buffer = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(trimmed);

        if terminates_statement(&buffer, trimmed) {
            buffer.pop();
            statements.push(buffer.trim_end().to_string());
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        log::warn!(
            "discarding unterminated trailing text in {}: {:?}",
            path.display(),
            buffer
        );
    }

    if statements.is_empty() {
        return Err(CoreError::EmptyMigration {
            path: path.display().to_string(),
        });
    }

    Ok(statements)
}

/// Whether `line` ends the statement accumulated in `buffer`.
///
/// Single seam for the termination heuristic: a future tokenizer-based
/// implementation replaces this predicate without touching the line loop.
fn terminates_statement(buffer: &str, line: &str) -> bool {
    if !line.ends_with(TERMINATOR) {
        return false;
    }
    if is_function_definition(buffer) {
        return ends_with_language_tag(line);
    }
    true
}

/// Whether the buffered statement opens a function definition
fn is_function_definition(buffer: &str) -> bool {
    let words: Vec<String> = buffer
        .split_whitespace()
        .take(4)
        .map(str::to_ascii_lowercase)
        .collect();

    match words.as_slice() {
        [a, b, ..] if a == "create" && b == "function" => true,
        [a, b, c, d] if a == "create" && b == "or" && c == "replace" && d == "function" => true,
        _ => false,
    }
}

/// Whether the line's last word is a known language tag followed by `;`
fn ends_with_language_tag(line: &str) -> bool {
    let Some(last) = line.split_whitespace().last() else {
        return false;
    };
    let Some(tag) = last.strip_suffix(TERMINATOR) else {
        return false;
    };
    FUNCTION_LANGUAGE_TAGS.contains(&tag.to_ascii_lowercase().as_str())
}

#[cfg(test)]
#[path = "segmenter_test.rs"]
mod tests;
