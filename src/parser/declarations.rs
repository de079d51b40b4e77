/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      parser/declarations.rs
 * Purpose:   Declaration-level grammar: the program skeleton, constants,
 *            variables, classes, methods and formal parameters.
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

use crate::codegen::Opcode;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::symtab::{Scope, SymKind, TypeDesc};
use tracing::debug;

impl Parser {
    /// Program = "program" ident {ConstDecl | ClassDecl | VarDecl}
    ///           "{" {MethodDecl} "}".
    ///
    /// Opens the program scope, drives the declaration loop with top-level
    /// panic recovery, then the method loop, and finally records the global
    /// variable-slot count as the code buffer's data size. Returns the
    /// closed program scope's snapshot.
    pub(crate) fn program(&mut self) -> Scope {
        self.expect(TokenKind::Program);
        self.expect(TokenKind::Ident);
        self.tab.open_scope();
        let name = self.tok.text.clone();
        self.declare(SymKind::Prog, &name, TypeDesc::None);

        loop {
            if self.sync.decl_start.contains(self.sym) {
                match self.sym {
                    TokenKind::Final => self.const_decl(),
                    TokenKind::Class => self.class_decl(),
                    _ => self.var_decl(), // ident
                }
            } else if self.sync.decl_follow.contains(self.sym) {
                break;
            } else {
                self.error("invalid declaration");
                // discard tokens up to the next declaration start or the
                // start of the method section
                loop {
                    self.scan();
                    if self.sync.decl_start.contains(self.sym)
                        || self.sym == TokenKind::Lbrace
                        || self.sym == TokenKind::Eof
                    {
                        break;
                    }
                }
                self.err_dist = 0;
            }
        }

        self.expect(TokenKind::Lbrace);
        while self.sym == TokenKind::Void || self.sym == TokenKind::Ident {
            self.method_decl();
        }
        self.expect(TokenKind::Rbrace);

        self.code.data_size = self.tab.n_vars();
        let scope = self.tab.close_scope();
        for symbol in &scope.locals {
            debug!(name = %symbol.name, kind = ?symbol.kind, "global declaration");
        }
        scope
    }

    /// ConstDecl = "final" Type ident "=" (number | charConst) ";".
    ///
    /// The literal's kind must match the declared type; on a match the
    /// decoded value is stored on the constant's symbol, on a mismatch an
    /// error is reported and parsing continues.
    fn const_decl(&mut self) {
        self.expect(TokenKind::Final);
        let ty = self.type_name();
        self.expect(TokenKind::Ident);
        let name = self.tok.text.clone();
        let id = self.declare(SymKind::Con, &name, ty);
        self.expect(TokenKind::Assign);
        match self.sym {
            TokenKind::Number => {
                self.scan();
                if self.tab.get(id).ty == TypeDesc::Int {
                    self.tab.get_mut(id).value = self.tok.value;
                } else {
                    self.error("char constant expected");
                }
            }
            TokenKind::CharCon => {
                self.scan();
                if self.tab.get(id).ty == TypeDesc::Char {
                    self.tab.get_mut(id).value = self.tok.value;
                } else {
                    self.error("number expected");
                }
            }
            _ => self.error("number or char constant expected"),
        }
        self.expect(TokenKind::Semicolon);
    }

    /// VarDecl = Type ident {"," ident} ";".
    pub(crate) fn var_decl(&mut self) {
        let ty = self.type_name();
        self.expect(TokenKind::Ident);
        let name = self.tok.text.clone();
        self.declare(SymKind::Var, &name, ty.clone());
        while self.sym == TokenKind::Comma {
            self.scan();
            self.expect(TokenKind::Ident);
            let name = self.tok.text.clone();
            self.declare(SymKind::Var, &name, ty.clone());
        }
        self.expect(TokenKind::Semicolon);
    }

    /// ClassDecl = "class" ident "{" {VarDecl} "}".
    ///
    /// Opens a nested scope for the fields, then installs the accumulated
    /// field list back onto the class's type descriptor when it closes.
    /// A duplicate field is rejected by the table, so the list keeps one
    /// entry per declared name in source order.
    fn class_decl(&mut self) {
        self.expect(TokenKind::Class);
        self.expect(TokenKind::Ident);
        let name = self.tok.text.clone();
        let id = self.declare(SymKind::Type, &name, TypeDesc::Class { fields: Vec::new() });
        self.tab.open_scope();
        self.expect(TokenKind::Lbrace);
        loop {
            match self.sym {
                TokenKind::Ident => self.var_decl(),
                TokenKind::Rbrace | TokenKind::Eof => break,
                _ => {
                    self.error("field declaration expected");
                    loop {
                        self.scan();
                        if matches!(
                            self.sym,
                            TokenKind::Rbrace | TokenKind::Ident | TokenKind::Eof
                        ) {
                            break;
                        }
                    }
                }
            }
        }
        self.expect(TokenKind::Rbrace);
        let scope = self.tab.close_scope();
        self.tab.get_mut(id).ty = TypeDesc::Class {
            fields: scope.locals,
        };
    }

    /// MethodDecl = (Type | "void") ident "(" [FormPars] ")" {VarDecl} Block.
    ///
    /// Opens the parameter/local scope, emits the enter-frame instruction
    /// with the parameter and slot counts just before the body, and after
    /// the body either the frame exit (void methods) or the missing-return
    /// trap (value-returning methods). A method named "main" must be void
    /// and parameterless; its address becomes the program entry point.
    fn method_decl(&mut self) {
        let mut ty = TypeDesc::None;
        if self.sym == TokenKind::Void {
            self.scan();
        } else if self.sym == TokenKind::Ident {
            ty = self.type_name();
        } else {
            self.error("method return type or 'void' expected");
        }
        if ty.is_ref_type() {
            self.error("methods may only return int or char");
        }

        self.expect(TokenKind::Ident);
        let name = self.tok.text.clone();
        let meth = self.declare(SymKind::Meth, &name, ty);

        self.expect(TokenKind::Lpar);
        self.tab.open_scope();
        let mut n_pars = 0;
        if self.sym == TokenKind::Ident {
            n_pars = self.form_pars();
        }
        self.tab.get_mut(meth).n_pars = n_pars;
        if name == "main" {
            if self.tab.get(meth).ty != TypeDesc::None {
                self.error("main method must be void");
            }
            if n_pars != 0 {
                self.error("main method must not have parameters");
            }
        }
        self.expect(TokenKind::Rpar);

        while self.sym == TokenKind::Ident {
            self.var_decl();
        }

        let adr = self.code.pc();
        self.tab.get_mut(meth).adr = adr;
        if name == "main" {
            self.code.set_main_pc(adr);
        }
        self.code.put(Opcode::Enter);
        self.code.put_operand(n_pars);
        self.code.put_operand(self.tab.n_vars());

        self.block();

        if self.tab.get(meth).ty == TypeDesc::None {
            self.code.put(Opcode::Exit);
            self.code.put(Opcode::Return);
        } else {
            // end of a value-returning body reached without a return
            self.code.put(Opcode::Trap);
            self.code.put_operand(1);
        }

        let scope = self.tab.close_scope();
        self.tab.get_mut(meth).locals = scope.locals;
    }

    /// FormPars = Type ident {"," Type ident}. Returns the parameter count.
    fn form_pars(&mut self) -> usize {
        let mut count = 0;
        let ty = self.type_name();
        self.expect(TokenKind::Ident);
        let name = self.tok.text.clone();
        self.declare(SymKind::Var, &name, ty);
        count += 1;
        while self.sym == TokenKind::Comma {
            self.scan();
            let ty = self.type_name();
            self.expect(TokenKind::Ident);
            let name = self.tok.text.clone();
            self.declare(SymKind::Var, &name, ty);
            count += 1;
        }
        count
    }

    /// Type = ident ["[" "]"].
    ///
    /// The identifier must resolve to a type binding; anything else is
    /// reported and parsing continues with the placeholder type. Trailing
    /// brackets synthesize the array descriptor, which is returned from
    /// every call path so `T[]` means array-of-T uniformly.
    pub(crate) fn type_name(&mut self) -> TypeDesc {
        self.expect(TokenKind::Ident);
        let mut base = TypeDesc::None;
        match self.tab.find(&self.tok.text) {
            Some(id) if self.tab.get(id).kind == SymKind::Type => {
                base = self.tab.get(id).ty.clone();
            }
            Some(_) => {
                let name = self.tok.text.clone();
                self.error(format!("'{}' is not a type", name));
            }
            None => {
                let name = self.tok.text.clone();
                self.error(format!("'{}' has not been declared", name));
            }
        }
        if self.sym == TokenKind::Lbrack {
            self.scan();
            self.expect(TokenKind::Rbrack);
            base = TypeDesc::Array(Box::new(base));
        }
        base
    }
}
