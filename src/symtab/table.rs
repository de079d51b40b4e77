/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      symtab/table.rs
 * Purpose:   The scope-stack symbol table the parser declares into and
 *            resolves against.
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

use crate::symtab::types::{SymKind, Symbol, TypeDesc};

/// A lexical scope: its declarations in source order, and how many of them
/// occupy variable slots (constants, types and methods take none).
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub locals: Vec<Symbol>,
    pub n_vars: usize,
}

impl Scope {
    fn empty() -> Self {
        Scope {
            locals: Vec::new(),
            n_vars: 0,
        }
    }
}

/// Handle to a symbol in the table.
///
/// Scopes are arena-allocated and never deallocated while the table lives,
/// so a handle stays valid after its scope closes; the parser only mutates
/// symbols in scopes that are still open or enclosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolId {
    scope: usize,
    index: usize,
}

/// Rejection returned by [`SymbolTable::insert`] for a name already
/// declared in the current scope. Carries the handle of the existing
/// declaration so the caller can keep parsing against it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{name}' is already declared in this scope")]
pub struct DuplicateName {
    pub name: String,
    pub existing: SymbolId,
}

/// The Mico symbol table.
///
/// A stack of open scopes over an arena. The bottom scope is the universe,
/// created with the table and never closed; it binds the type names `int`
/// and `char` that every program resolves its declarations against.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    open: Vec<usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut tab = SymbolTable {
            scopes: Vec::new(),
            open: Vec::new(),
        };
        tab.open_scope();
        // the universe is empty when these go in, so neither can collide
        let _ = tab.insert(SymKind::Type, "int", TypeDesc::Int);
        let _ = tab.insert(SymKind::Type, "char", TypeDesc::Char);
        tab
    }

    /// Pushes a fresh innermost scope.
    pub fn open_scope(&mut self) {
        self.scopes.push(Scope::empty());
        self.open.push(self.scopes.len() - 1);
    }

    /// Pops the innermost scope, restoring the enclosing one as current,
    /// and returns a snapshot of the popped scope's declarations and
    /// variable-slot count.
    pub fn close_scope(&mut self) -> Scope {
        match self.open.pop() {
            Some(index) => self.scopes[index].clone(),
            None => Scope::empty(),
        }
    }

    fn top(&self) -> usize {
        // the universe scope is never closed, so the stack is never empty
        self.open[self.open.len() - 1]
    }

    /// Declares a name in the current scope.
    ///
    /// Variables are assigned the next slot number as they are inserted.
    /// A name already present in the current scope is rejected: the table
    /// is left unchanged and the existing declaration's handle comes back
    /// in the error.
    pub fn insert(
        &mut self,
        kind: SymKind,
        name: &str,
        ty: TypeDesc,
    ) -> Result<SymbolId, DuplicateName> {
        let scope_idx = self.top();
        let scope = &mut self.scopes[scope_idx];

        if let Some(index) = scope.locals.iter().position(|s| s.name == name) {
            return Err(DuplicateName {
                name: name.to_string(),
                existing: SymbolId {
                    scope: scope_idx,
                    index,
                },
            });
        }

        let mut symbol = Symbol::new(kind, name, ty);
        if kind == SymKind::Var {
            symbol.adr = scope.n_vars;
            scope.n_vars += 1;
        }
        scope.locals.push(symbol);
        Ok(SymbolId {
            scope: scope_idx,
            index: scope.locals.len() - 1,
        })
    }

    /// Resolves a name against the current scope chain, innermost first,
    /// ending at the universe.
    pub fn find(&self, name: &str) -> Option<SymbolId> {
        for &scope_idx in self.open.iter().rev() {
            if let Some(index) = self.scopes[scope_idx]
                .locals
                .iter()
                .position(|s| s.name == name)
            {
                return Some(SymbolId {
                    scope: scope_idx,
                    index,
                });
            }
        }
        None
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.scopes[id.scope].locals[id.index]
    }

    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.scopes[id.scope].locals[id.index]
    }

    /// Variable-slot count of the current scope, for frame-size accounting.
    pub fn n_vars(&self) -> usize {
        self.scopes[self.top()].n_vars
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_binds_the_builtin_type_names() {
        let tab = SymbolTable::new();
        let int = tab.find("int").expect("int bound");
        assert_eq!(tab.get(int).kind, SymKind::Type);
        assert_eq!(tab.get(int).ty, TypeDesc::Int);
        let ch = tab.find("char").expect("char bound");
        assert_eq!(tab.get(ch).ty, TypeDesc::Char);
        assert_eq!(tab.find("bool"), None);
    }

    #[test]
    fn duplicate_names_are_rejected_with_the_existing_handle() {
        let mut tab = SymbolTable::new();
        tab.open_scope();
        let first = tab.insert(SymKind::Var, "x", TypeDesc::Int).unwrap();
        let err = tab.insert(SymKind::Var, "x", TypeDesc::Char).unwrap_err();
        assert_eq!(err.existing, first);
        assert_eq!(err.to_string(), "'x' is already declared in this scope");
        // nothing was added, first declaration untouched
        assert_eq!(tab.get(first).ty, TypeDesc::Int);
        assert_eq!(tab.n_vars(), 1);
    }

    #[test]
    fn inner_scopes_shadow_and_closing_restores() {
        let mut tab = SymbolTable::new();
        tab.open_scope();
        tab.insert(SymKind::Var, "x", TypeDesc::Int).unwrap();
        tab.open_scope();
        tab.insert(SymKind::Var, "x", TypeDesc::Char).unwrap();

        let inner = tab.find("x").unwrap();
        assert_eq!(tab.get(inner).ty, TypeDesc::Char);

        tab.close_scope();
        let outer = tab.find("x").unwrap();
        assert_eq!(tab.get(outer).ty, TypeDesc::Int);
    }

    #[test]
    fn close_scope_snapshots_declarations_and_slot_count() {
        let mut tab = SymbolTable::new();
        tab.open_scope();
        tab.insert(SymKind::Con, "limit", TypeDesc::Int).unwrap();
        tab.insert(SymKind::Var, "a", TypeDesc::Int).unwrap();
        tab.insert(SymKind::Var, "b", TypeDesc::Char).unwrap();

        let scope = tab.close_scope();
        let names: Vec<&str> = scope.locals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["limit", "a", "b"]);
        assert_eq!(scope.n_vars, 2); // the constant takes no slot
        assert_eq!(scope.locals[1].adr, 0);
        assert_eq!(scope.locals[2].adr, 1);
    }

    #[test]
    fn handles_stay_valid_after_their_scope_closes() {
        let mut tab = SymbolTable::new();
        tab.open_scope();
        let id = tab.insert(SymKind::Meth, "main", TypeDesc::None).unwrap();
        tab.open_scope();
        tab.get_mut(id).n_pars = 2; // mutate enclosing symbol from inner scope
        tab.close_scope();
        assert_eq!(tab.get(id).n_pars, 2);
        tab.close_scope();
        assert_eq!(tab.get(id).name, "main");
    }
}
