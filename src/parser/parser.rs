/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the `Parser` structure and the public `parse()` driver
 * used to validate a Mico source text against the language grammar while
 * feeding declarations into the symbol table and frame/entry/guard
 * instructions into the code buffer.
 *
 * The grammar itself is split across sibling modules:
 * - `declarations.rs` → Program, ConstDecl, VarDecl, ClassDecl, MethodDecl
 * - `statements.rs`   → Block, Statement, Condition
 * - `expressions.rs`  → Expr, Term, Factor, Designator, ActPars
 * - `helpers.rs`      → scan / expect / cascade-suppressed error reporting
 *
 * This file serves as the root coordinator of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::codegen::CodeBuffer;
use crate::diagnostics::{Diagnostic, Reporter};
use crate::lexer::lexer::Lexer;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::helpers::MIN_ERROR_DISTANCE;
use crate::parser::sync::SyncSets;
use crate::symtab::{Scope, SymbolTable};

/// The Mico recursive-descent parser.
///
/// All parsing state lives here: the cursor (`tok`, `la`, `sym`), the
/// cascade-suppression distance, the synchronization sets, and the two
/// collaborators the grammar's semantic actions drive. One `Parser` is
/// constructed per parse and consumed by it; independent parses never share
/// state.
pub struct Parser {
    pub(crate) lexer: Lexer,

    /// Most recently accepted token.
    pub(crate) tok: Token,

    /// Lookahead token: pulled from the lexer, not yet consumed. Exactly
    /// one token of lookahead is held at any time.
    pub(crate) la: Token,

    /// Kind of `la`, cached for dispatch.
    pub(crate) sym: TokenKind,

    /// Tokens accepted since the last (attempted) error report.
    pub(crate) err_dist: u32,

    pub(crate) reporter: Reporter,
    pub(crate) sync: SyncSets,
    pub(crate) tab: SymbolTable,
    pub(crate) code: CodeBuffer,
}

/// Everything a parse leaves behind.
pub struct ParseOutcome {
    /// Error records in report order; empty means the source was accepted.
    pub diagnostics: Vec<Diagnostic>,

    /// Emitted instruction words, recorded entry point, global slot count.
    pub code: CodeBuffer,

    /// Snapshot of the program's global scope: constants, classes, global
    /// variables and methods in declaration order.
    pub program: Scope,
}

impl ParseOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Public entry point for the Mico parsing phase.
///
/// Pulls tokens from a fresh lexer over `source`, drives the grammar to end
/// of input (recovering from errors rather than stopping at the first one),
/// and returns the collected outcome.
pub fn parse(source: &str) -> ParseOutcome {
    Parser::new(source).parse()
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            tok: Token::placeholder(),
            la: Token::placeholder(),
            sym: TokenKind::Invalid,
            // the first error of a parse is always reported
            err_dist: MIN_ERROR_DISTANCE,
            reporter: Reporter::new(),
            sync: SyncSets::new(),
            tab: SymbolTable::new(),
            code: CodeBuffer::new(),
        }
    }

    /// Runs the parse to completion.
    ///
    /// The parse always reaches the end of the derivation: errors are
    /// reported and recovered from, never escalated. Leftover input after
    /// the program's closing brace is itself an error.
    pub fn parse(mut self) -> ParseOutcome {
        self.scan(); // prime the lookahead
        let program = self.program();
        if self.sym != TokenKind::Eof {
            self.error("end of file found before end of program");
        }
        ParseOutcome {
            diagnostics: self.reporter.into_diagnostics(),
            code: self.code,
            program,
        }
    }
}
