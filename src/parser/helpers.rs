/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
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

use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::symtab::{SymKind, SymbolId, TypeDesc};
use std::mem;
use tracing::trace;

/// Minimum number of accepted tokens between two emitted error reports.
/// Attempted reports inside the window are swallowed but still reset it.
pub(crate) const MIN_ERROR_DISTANCE: u32 = 3;

impl Parser {
    /// Accepts the lookahead token and pulls the next one from the lexer.
    pub(crate) fn scan(&mut self) {
        self.tok = mem::replace(&mut self.la, self.lexer.next_token(&mut self.reporter));
        self.sym = self.la.kind;
        self.err_dist += 1;
        trace!(
            line = self.la.span.line,
            col = self.la.span.column,
            token = %self.la,
            "recognized"
        );
    }

    /// Matches one expected terminal: on match, advance; on mismatch,
    /// report "`<kind>` expected" without advancing, leaving
    /// resynchronization to the caller's own recovery.
    pub(crate) fn expect(&mut self, expected: TokenKind) {
        if self.sym == expected {
            self.scan();
        } else {
            self.error(format!("{} expected", expected.name()));
        }
    }

    /// Reports a syntactic or declarative error at the lookahead token.
    ///
    /// The report is emitted only if at least [`MIN_ERROR_DISTANCE`] tokens
    /// were accepted since the previous attempt; either way the distance
    /// resets, so one misparse cannot flood the output with consequential
    /// errors.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        if self.err_dist >= MIN_ERROR_DISTANCE {
            self.reporter.error(self.la.span, message);
        }
        self.err_dist = 0;
    }

    /// Declares a name in the current scope, reporting a duplicate through
    /// the normal error path and continuing with the existing declaration's
    /// handle.
    pub(crate) fn declare(&mut self, kind: SymKind, name: &str, ty: TypeDesc) -> SymbolId {
        match self.tab.insert(kind, name, ty) {
            Ok(id) => id,
            Err(err) => {
                let existing = err.existing;
                self.error(err.to_string());
                existing
            }
        }
    }
}
