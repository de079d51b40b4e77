/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for Mico lexical analysis.
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

/// Reserved-word table.
pub mod keywords;

/// The pull-based scanner itself.
pub mod lexer;

/// Token kinds and token values.
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
