/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   The diagnostic sink the lexer and parser report into, and the
 *            rendering of collected diagnostics for humans and machines.
 *
 * This file is part of the Mico compiler project.
 *
 * Mico is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use serde::Serialize;
use tracing::debug;

/// A single error record: where, and what went wrong.
///
/// Records are kept in the order they were reported, which for a single
/// left-to-right parse is also source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub span: Span,
    pub message: String,
}

/// Collects diagnostics during a compile.
///
/// Both error families land here: lexical errors go straight in, while the
/// parser gates its syntactic errors through cascade suppression before
/// calling [`error`](Reporter::error). The final error count is simply the
/// number of collected records; zero means the source was accepted.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error at the given position.
    pub fn error(&mut self, span: Span, message: impl Into<String>) {
        let message = message.into();
        debug!(line = span.line, col = span.column, %message, "error reported");
        self.diagnostics.push(Diagnostic { span, message });
    }

    /// Number of errors recorded so far.
    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Serializes a diagnostic list as pretty-printed JSON, one object per
/// record with `line`, `column` and `message` fields.
pub fn to_json(diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnostics)
}

/// Renders human-friendly, compiler-style diagnostics.
///
/// Output shows the file/line/column header, the offending source line, and
/// a caret pointing at the error column:
///
/// ```text
/// error: comparison operator expected
///   --> demo.mico:3:12
///    |
///   3 |     if (1 = 2) return;
///    |           ^
/// ```
pub struct DiagnosticPrinter {
    source: String,
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints one formatted diagnostic to stderr.
    pub fn print(&self, diagnostic: &Diagnostic) {
        let Span { line, column } = diagnostic.span;

        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        eprintln!(
            "error: {}\n  --> {}:{}:{}",
            diagnostic.message, self.file_name, line, column
        );
        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        let mut underline = String::new();
        for _ in 1..column {
            underline.push(' ');
        }
        underline.push('^');
        eprintln!("   | {}", underline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_keeps_records_in_order() {
        let mut reporter = Reporter::new();
        reporter.error(Span { line: 1, column: 2 }, "first");
        reporter.error(Span { line: 3, column: 4 }, "second");
        assert_eq!(reporter.count(), 2);
        let diagnostics = reporter.into_diagnostics();
        assert_eq!(diagnostics[0].message, "first");
        assert_eq!(diagnostics[1].span, Span { line: 3, column: 4 });
    }

    #[test]
    fn json_output_flattens_position_fields() {
        let diagnostics = vec![Diagnostic {
            span: Span { line: 7, column: 3 },
            message: "; expected".into(),
        }];
        let json = to_json(&diagnostics).unwrap();
        assert!(json.contains("\"line\": 7"));
        assert!(json.contains("\"column\": 3"));
        assert!(json.contains("\"message\": \"; expected\""));
    }
}
