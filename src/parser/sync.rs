/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      parser/sync.rs
 * Purpose:   Token-kind sets driving the parser's panic-mode recovery.
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

/// An immutable set of token kinds, backed by one bit per enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u64 << kinds[i] as u32;
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 >> (kind as u32) & 1 != 0
    }
}

/// The synchronization sets, one per grammar context, built once before
/// parsing begins and never mutated during a parse.
///
/// Recovery granularity matches nesting depth: the coarser the construct,
/// the coarser its set, so a stray token inside a statement never discards
/// a surrounding declaration.
#[derive(Debug, Clone, Copy)]
pub struct SyncSets {
    /// First set of Expr.
    pub expr_start: TokenSet,
    /// First set of Statement.
    pub stat_start: TokenSet,
    /// Safe resumption points for statement-grain recovery.
    pub stat_sync: TokenSet,
    /// Terminators of a statement sequence.
    pub stat_seq_follow: TokenSet,
    /// First set of the top-level declarations.
    pub decl_start: TokenSet,
    /// What follows the declaration section of a program.
    pub decl_follow: TokenSet,
}

impl SyncSets {
    pub fn new() -> Self {
        SyncSets {
            expr_start: TokenSet::of(&[
                TokenKind::Ident,
                TokenKind::Number,
                TokenKind::CharCon,
                TokenKind::New,
                TokenKind::Lpar,
                TokenKind::Minus,
            ]),
            stat_start: TokenSet::of(&[
                TokenKind::Ident,
                TokenKind::If,
                TokenKind::While,
                TokenKind::Read,
                TokenKind::Return,
                TokenKind::Print,
                TokenKind::Lbrace,
                TokenKind::Semicolon,
            ]),
            stat_sync: TokenSet::of(&[
                TokenKind::Eof,
                TokenKind::If,
                TokenKind::While,
                TokenKind::Read,
                TokenKind::Return,
                TokenKind::Print,
                TokenKind::Lbrace,
                TokenKind::Semicolon,
            ]),
            stat_seq_follow: TokenSet::of(&[TokenKind::Rbrace, TokenKind::Eof]),
            decl_start: TokenSet::of(&[TokenKind::Final, TokenKind::Ident, TokenKind::Class]),
            decl_follow: TokenSet::of(&[TokenKind::Lbrace, TokenKind::Void, TokenKind::Eof]),
        }
    }
}

impl Default for SyncSets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_set_membership() {
        let set = TokenSet::of(&[TokenKind::If, TokenKind::Semicolon, TokenKind::Eof]);
        assert!(set.contains(TokenKind::If));
        assert!(set.contains(TokenKind::Eof));
        assert!(!set.contains(TokenKind::While));
        assert!(!set.contains(TokenKind::Invalid));
    }

    #[test]
    fn recovery_sets_always_contain_end_of_input() {
        // the termination guarantee hinges on this: every recovery loop
        // stops when the lexer runs dry
        let sync = SyncSets::new();
        assert!(sync.stat_sync.contains(TokenKind::Eof));
        assert!(sync.stat_seq_follow.contains(TokenKind::Eof));
        assert!(sync.decl_follow.contains(TokenKind::Eof));
    }

    #[test]
    fn statement_first_set_covers_every_statement_form() {
        let sync = SyncSets::new();
        for kind in [
            TokenKind::Ident,
            TokenKind::If,
            TokenKind::While,
            TokenKind::Read,
            TokenKind::Return,
            TokenKind::Print,
            TokenKind::Lbrace,
            TokenKind::Semicolon,
        ] {
            assert!(sync.stat_start.contains(kind), "{kind:?} missing");
        }
        assert!(!sync.stat_start.contains(TokenKind::Else));
    }
}
