/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      lexer/lexer.rs
 * Purpose:   The Mico lexical analyzer: turns the raw character stream
 *            into classified, positioned tokens, one per call.
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

use crate::diagnostics::Reporter;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// NUL doubles as the end-of-input sentinel; an embedded NUL ends the scan.
const EOF_CH: char = '\0';

/// The Mico lexer.
///
/// The lexer is pull-based: the parser requests one token at a time with
/// [`next_token`](Lexer::next_token), and the lexer holds exactly one
/// lookahead character between calls. Lexical errors are reported to the
/// supplied [`Reporter`] and never stop the token stream: a malformed
/// construct is demoted to an [`TokenKind::Invalid`] token and scanning
/// continues, consuming at least one character per produced token.
pub struct Lexer {
    chars: Vec<char>,
    /// Index of the next unread character.
    pos: usize,
    /// Current lookahead character.
    ch: char,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Creates a lexer over a complete source text with the cursor on the
    /// first character.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer {
            chars: source.chars().collect(),
            pos: 0,
            ch: EOF_CH,
            line: 1,
            col: 0,
        };
        lexer.next_ch();
        lexer
    }

    /// Advances the lookahead character and the position counters.
    ///
    /// `col` is incremented for every character consumed and reset to 0 on
    /// the line terminator, so the first character of each line lands on
    /// column 1. This holds across comment skipping and escape sequences,
    /// which all funnel through here.
    fn next_ch(&mut self) {
        if let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            self.col += 1;
            self.ch = c;
            if c == '\n' {
                self.line += 1;
                self.col = 0;
            }
        } else {
            self.ch = EOF_CH;
        }
    }

    /// Produces the next token.
    ///
    /// Called repeatedly until a token of kind [`TokenKind::Eof`] comes
    /// back; calling again after that keeps returning `Eof`. Whitespace
    /// (any character at or below space) and `//` line comments produce no
    /// tokens of their own.
    pub fn next_token(&mut self, reporter: &mut Reporter) -> Token {
        loop {
            while self.ch != EOF_CH && self.ch <= ' ' {
                self.next_ch();
            }
            let span = Span {
                line: self.line,
                column: self.col,
            };

            if self.ch.is_alphabetic() {
                return self.read_name(span);
            }
            if self.ch.is_ascii_digit() {
                return self.read_number(span, reporter);
            }
            if self.ch == '\'' {
                return self.read_char_con(span, reporter);
            }

            let kind = match self.ch {
                EOF_CH => TokenKind::Eof,
                '+' => {
                    self.next_ch();
                    TokenKind::Plus
                }
                '-' => {
                    self.next_ch();
                    TokenKind::Minus
                }
                '*' => {
                    self.next_ch();
                    TokenKind::Times
                }
                '%' => {
                    self.next_ch();
                    TokenKind::Rem
                }
                '/' => {
                    self.next_ch();
                    if self.ch == '/' {
                        while self.ch != '\n' && self.ch != EOF_CH {
                            self.next_ch();
                        }
                        continue; // a comment produces no token
                    }
                    TokenKind::Slash
                }
                '=' => {
                    self.next_ch();
                    if self.ch == '=' {
                        self.next_ch();
                        TokenKind::Eql
                    } else {
                        TokenKind::Assign
                    }
                }
                '<' => {
                    self.next_ch();
                    if self.ch == '=' {
                        self.next_ch();
                        TokenKind::Leq
                    } else {
                        TokenKind::Lss
                    }
                }
                '>' => {
                    self.next_ch();
                    if self.ch == '=' {
                        self.next_ch();
                        TokenKind::Geq
                    } else {
                        TokenKind::Gtr
                    }
                }
                '!' => {
                    self.next_ch();
                    if self.ch == '=' {
                        self.next_ch();
                        TokenKind::Neq
                    } else {
                        // no standalone "not" in the language
                        reporter.error(span, "'!' is only valid as part of '!='");
                        TokenKind::Invalid
                    }
                }
                ';' => {
                    self.next_ch();
                    TokenKind::Semicolon
                }
                ',' => {
                    self.next_ch();
                    TokenKind::Comma
                }
                '.' => {
                    self.next_ch();
                    TokenKind::Period
                }
                '(' => {
                    self.next_ch();
                    TokenKind::Lpar
                }
                ')' => {
                    self.next_ch();
                    TokenKind::Rpar
                }
                '[' => {
                    self.next_ch();
                    TokenKind::Lbrack
                }
                ']' => {
                    self.next_ch();
                    TokenKind::Rbrack
                }
                '{' => {
                    self.next_ch();
                    TokenKind::Lbrace
                }
                '}' => {
                    self.next_ch();
                    TokenKind::Rbrace
                }
                other => {
                    // Still advance one character: unrecognized input must
                    // never stall the scan.
                    self.next_ch();
                    reporter.error(span, format!("unexpected character '{}'", other));
                    TokenKind::Invalid
                }
            };

            return Token {
                kind,
                text: String::new(),
                value: 0,
                span,
            };
        }
    }

    /// Scans a maximal run of letters and digits, then classifies it as a
    /// reserved word or an identifier.
    fn read_name(&mut self, span: Span) -> Token {
        let mut name = String::new();
        while self.ch.is_alphanumeric() {
            name.push(self.ch);
            self.next_ch();
        }
        match keyword_kind(&name) {
            Some(kind) => Token {
                kind,
                text: String::new(),
                value: 0,
                span,
            },
            None => Token {
                kind: TokenKind::Ident,
                text: name,
                value: 0,
                span,
            },
        }
    }

    /// Scans a maximal digit run and decodes it as an integer literal.
    ///
    /// A literal that fails to decode (overflow) is reported and demoted to
    /// an invalid token; the scan itself continues normally.
    fn read_number(&mut self, span: Span, reporter: &mut Reporter) -> Token {
        let mut digits = String::new();
        while self.ch.is_ascii_digit() {
            digits.push(self.ch);
            self.next_ch();
        }
        match digits.parse::<i32>() {
            Ok(value) => Token {
                kind: TokenKind::Number,
                text: String::new(),
                value,
                span,
            },
            Err(_) => {
                reporter.error(span, format!("number '{}' is out of range", digits));
                Token {
                    kind: TokenKind::Invalid,
                    text: String::new(),
                    value: 0,
                    span,
                }
            }
        }
    }

    /// Scans a character constant, supporting the escape forms `\n`, `\t`,
    /// `\r`, `\'` and `\\`.
    ///
    /// An empty or unterminated constant is reported and demoted; for the
    /// unterminated case the lexer resynchronizes by scanning forward to
    /// the next quote, end of line, or end of input, so the token after the
    /// broken literal is the first token of the following context.
    fn read_char_con(&mut self, span: Span, reporter: &mut Reporter) -> Token {
        self.next_ch(); // opening quote

        if self.ch == '\'' {
            reporter.error(span, "empty character constant");
            self.next_ch();
            return Token {
                kind: TokenKind::Invalid,
                text: String::new(),
                value: 0,
                span,
            };
        }

        let mut value = 0i32;
        if self.ch == '\\' {
            self.next_ch();
            match self.ch {
                'n' => value = '\n' as i32,
                't' => value = '\t' as i32,
                'r' => value = '\r' as i32,
                '\'' => value = '\'' as i32,
                '\\' => value = '\\' as i32,
                _ => reporter.error(span, "invalid escape sequence"),
            }
            self.next_ch();
        } else {
            value = self.ch as i32;
            self.next_ch();
        }

        if self.ch != '\'' {
            reporter.error(span, "character constant is not closed");
            while self.ch != '\'' && self.ch != '\n' && self.ch != EOF_CH {
                self.next_ch();
            }
            if self.ch == '\'' {
                self.next_ch();
            }
            return Token {
                kind: TokenKind::Invalid,
                text: String::new(),
                value: 0,
                span,
            };
        }

        self.next_ch(); // closing quote
        Token {
            kind: TokenKind::CharCon,
            text: String::new(),
            value,
            span,
        }
    }
}
