/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      parser/expressions.rs
 * Purpose:   Expression-level grammar.
 *
 * Parsing order follows the grammar's precedence layering:
 *
 *   Expr → Term → Factor → Designator
 *
 * with one token of lookahead choosing every alternative; no backtracking.
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
    /// ActPars = "(" [Expr {"," Expr}] ")".
    pub(crate) fn act_pars(&mut self) {
        self.expect(TokenKind::Lpar);
        if self.sync.expr_start.contains(self.sym) {
            self.expr();
            while self.sym == TokenKind::Comma {
                self.scan();
                self.expr();
            }
        }
        self.expect(TokenKind::Rpar);
    }

    /// Expr = ["-"] Term {("+" | "-") Term}.
    pub(crate) fn expr(&mut self) {
        if self.sym == TokenKind::Minus {
            self.scan();
        }
        self.term();
        while self.sym == TokenKind::Plus || self.sym == TokenKind::Minus {
            self.scan();
            self.term();
        }
    }

    /// Term = Factor {("*" | "/" | "%") Factor}.
    fn term(&mut self) {
        self.factor();
        while matches!(
            self.sym,
            TokenKind::Times | TokenKind::Slash | TokenKind::Rem
        ) {
            self.scan();
            self.factor();
        }
    }

    /// Factor = Designator | number | charConst | "(" Expr ")"
    ///   | "new" ident ["[" Expr "]"].
    fn factor(&mut self) {
        match self.sym {
            TokenKind::Number | TokenKind::CharCon => self.scan(),
            TokenKind::Ident => self.designator(),
            TokenKind::Lpar => {
                self.scan();
                self.expr();
                self.expect(TokenKind::Rpar);
            }
            TokenKind::New => {
                self.scan();
                self.expect(TokenKind::Ident);
                if self.sym == TokenKind::Lbrack {
                    self.scan();
                    self.expr();
                    self.expect(TokenKind::Rbrack);
                }
            }
            _ => self.error("invalid factor"),
        }
    }

    /// Designator = ident {"." ident | "[" Expr "]"}.
    ///
    /// The head identifier is resolved against the scope chain; an
    /// unresolved name is reported and parsing continues with the chain of
    /// field accesses and indexings regardless.
    pub(crate) fn designator(&mut self) {
        self.expect(TokenKind::Ident);
        if self.tab.find(&self.tok.text).is_none() {
            let name = self.tok.text.clone();
            self.error(format!("'{}' has not been declared", name));
        }
        loop {
            match self.sym {
                TokenKind::Period => {
                    self.scan();
                    self.expect(TokenKind::Ident);
                }
                TokenKind::Lbrack => {
                    self.scan();
                    self.expr();
                    self.expect(TokenKind::Rbrack);
                }
                _ => break,
            }
        }
    }
}
