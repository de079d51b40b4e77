/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the token values exchanged between the Mico lexer
 *            and the Mico parser.
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
use std::fmt;

/// The category of a lexical token in the Mico language.
///
/// This is a closed enumeration: every operator, punctuation mark, and
/// reserved word has its own variant, so grammar dispatch is a direct kind
/// comparison and the compiler can flag unhandled cases. `Invalid` marks a
/// character sequence that matched no rule; the lexer still produces a
/// positioned token for it and keeps scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Invalid,

    // Literals and names
    Ident,
    Number,
    CharCon,

    // Operators
    Plus,
    Minus,
    Times,
    Slash,
    Rem,
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,
    Assign,

    // Punctuation
    Semicolon,
    Comma,
    Period,
    Lpar,
    Rpar,
    Lbrack,
    Rbrack,
    Lbrace,
    Rbrace,

    // Reserved words
    Class,
    Else,
    Final,
    If,
    New,
    Print,
    Program,
    Read,
    Return,
    Void,
    While,

    /// End-of-input marker. Once the lexer has produced it, every further
    /// call produces it again.
    Eof,
}

impl TokenKind {
    /// The user-facing spelling of a token kind, used in "`<kind>` expected"
    /// messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Invalid => "invalid token",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::CharCon => "char constant",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Slash => "/",
            TokenKind::Rem => "%",
            TokenKind::Eql => "==",
            TokenKind::Neq => "!=",
            TokenKind::Lss => "<",
            TokenKind::Leq => "<=",
            TokenKind::Gtr => ">",
            TokenKind::Geq => ">=",
            TokenKind::Assign => "=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::Lpar => "(",
            TokenKind::Rpar => ")",
            TokenKind::Lbrack => "[",
            TokenKind::Rbrack => "]",
            TokenKind::Lbrace => "{",
            TokenKind::Rbrace => "}",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::Final => "final",
            TokenKind::If => "if",
            TokenKind::New => "new",
            TokenKind::Print => "print",
            TokenKind::Program => "program",
            TokenKind::Read => "read",
            TokenKind::Return => "return",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single classified token produced by the lexer.
///
/// `text` is populated only for identifiers; `value` only for number and
/// char-constant tokens. Tokens are immutable once returned and the lexer
/// retains no reference to them: the parser owns each token it pulls.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// Source spelling, for identifier tokens.
    pub text: String,

    /// Decoded numeric or character value, for literal tokens.
    pub value: i32,

    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    /// A placeholder token used to prime the parser cursor before the first
    /// `scan`. It never appears in a real token stream.
    pub fn placeholder() -> Self {
        Token {
            kind: TokenKind::Invalid,
            text: String::new(),
            value: 0,
            span: Span { line: 0, column: 0 },
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for the recognition trace: the kind's spelling, plus
    /// the decoded text or value for identifiers and literals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier ({})", self.text),
            TokenKind::Number => write!(f, "number ({})", self.value),
            TokenKind::CharCon => write!(f, "char constant ({})", self.value),
            _ => f.write_str(self.kind.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_source_spelling() {
        assert_eq!(TokenKind::Ident.name(), "identifier");
        assert_eq!(TokenKind::Leq.name(), "<=");
        assert_eq!(TokenKind::Lbrace.name(), "{");
        assert_eq!(TokenKind::While.name(), "while");
        assert_eq!(TokenKind::Eof.name(), "end of file");
    }

    #[test]
    fn token_display_includes_decoded_payload() {
        let span = Span { line: 1, column: 1 };
        let ident = Token {
            kind: TokenKind::Ident,
            text: "total".into(),
            value: 0,
            span,
        };
        assert_eq!(ident.to_string(), "identifier (total)");

        let number = Token {
            kind: TokenKind::Number,
            text: String::new(),
            value: 42,
            span,
        };
        assert_eq!(number.to_string(), "number (42)");
    }
}
