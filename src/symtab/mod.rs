/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:     symtab/mod.rs
 * Purpose:  Root module for the Mico symbol table.
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

/// The scope stack: open/close, insert, find.
pub mod table;

/// Symbol and type descriptors.
pub mod types;

pub use table::{DuplicateName, Scope, SymbolId, SymbolTable};
pub use types::{SymKind, Symbol, TypeDesc};
