/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Library façade for the Mico compiler front end.
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

//! The front end of the Mico compiler: a pull-based lexical analyzer and a
//! recursive-descent parser with panic-mode error recovery, feeding a
//! scope-stack symbol table and an append-only instruction buffer.
//!
//! ```
//! let outcome = mico::parse("program P { void main() { } }");
//! assert_eq!(outcome.error_count(), 0);
//! ```

pub mod codegen;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod span;
pub mod symtab;

pub use error::MicoError;
pub use parser::{parse, ParseOutcome};
