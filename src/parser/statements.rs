/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      parser/statements.rs
 * Purpose:   Statement-level grammar: blocks, the statement dispatcher
 *            with statement-grain panic recovery, and conditions.
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

impl Parser {
    /// Block = "{" {Statement} "}".
    ///
    /// The loop terminates on the statement-sequence follow set (`}` or end
    /// of input) rather than a positive statement-start test; statement
    /// recovery consumes at least one token on every error path, so the
    /// loop always makes progress.
    pub(crate) fn block(&mut self) {
        self.expect(TokenKind::Lbrace);
        while !self.sync.stat_seq_follow.contains(self.sym) {
            self.statement();
        }
        self.expect(TokenKind::Rbrace);
    }

    /// Statement = Designator ("=" Expr | ActPars) ";"
    ///   | "if" "(" Condition ")" Statement ["else" Statement]
    ///   | "while" "(" Condition ")" Statement
    ///   | "return" [Expr] ";"
    ///   | "read" "(" Designator ")" ";"
    ///   | "print" "(" Expr ["," number] ")" ";"
    ///   | Block
    ///   | ";".
    pub(crate) fn statement(&mut self) {
        if !self.sync.stat_start.contains(self.sym) {
            self.error("invalid start of statement");
            loop {
                self.scan();
                if self.sync.stat_sync.contains(self.sym)
                    || self.sym == TokenKind::Rbrace
                    || self.sym == TokenKind::Semicolon
                {
                    break;
                }
            }
            // a trailing ';' belongs to the skipped fragment
            if self.sym == TokenKind::Semicolon {
                self.scan();
            }
            self.err_dist = 0;
        }

        match self.sym {
            TokenKind::Ident => {
                // assignment or method call
                self.designator();
                if self.sym == TokenKind::Assign {
                    self.scan();
                    self.expr();
                } else if self.sym == TokenKind::Lpar {
                    self.act_pars();
                } else {
                    self.error("= or ( expected after designator");
                }
                self.expect(TokenKind::Semicolon);
            }
            TokenKind::If => {
                self.scan();
                self.expect(TokenKind::Lpar);
                self.condition();
                self.expect(TokenKind::Rpar);
                self.statement();
                if self.sym == TokenKind::Else {
                    self.scan();
                    self.statement();
                }
            }
            TokenKind::While => {
                self.scan();
                self.expect(TokenKind::Lpar);
                self.condition();
                self.expect(TokenKind::Rpar);
                self.statement();
            }
            TokenKind::Return => {
                self.scan();
                if self.sync.expr_start.contains(self.sym) {
                    self.expr();
                }
                self.expect(TokenKind::Semicolon);
            }
            TokenKind::Read => {
                self.scan();
                self.expect(TokenKind::Lpar);
                self.designator();
                self.expect(TokenKind::Rpar);
                self.expect(TokenKind::Semicolon);
            }
            TokenKind::Print => {
                self.scan();
                self.expect(TokenKind::Lpar);
                self.expr();
                if self.sym == TokenKind::Comma {
                    self.scan();
                    self.expect(TokenKind::Number);
                }
                self.expect(TokenKind::Rpar);
                self.expect(TokenKind::Semicolon);
            }
            TokenKind::Lbrace => self.block(),
            TokenKind::Semicolon => self.scan(), // empty statement
            _ => self.error("invalid statement"),
        }
    }

    /// Condition = Expr Relop Expr. Exactly one relational operator; the
    /// grammar has no boolean connectives.
    pub(crate) fn condition(&mut self) {
        self.expr();
        self.relop();
        self.expr();
    }

    /// Relop = "==" | "!=" | "<" | "<=" | ">" | ">=".
    fn relop(&mut self) {
        match self.sym {
            TokenKind::Eql
            | TokenKind::Neq
            | TokenKind::Lss
            | TokenKind::Leq
            | TokenKind::Gtr
            | TokenKind::Geq => self.scan(),
            _ => self.error("comparison operator expected"),
        }
    }
}
