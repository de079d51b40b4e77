/*
 * ==========================================================================
 * MICO - A Teaching Language
 * ==========================================================================
 *
 * File:      codegen/mod.rs
 * Purpose:   The append-only instruction buffer the parser's semantic
 *            actions emit into.
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

/// The instruction words the front end emits: frame entry/exit markers and
/// the missing-return runtime guard. Statement and expression code
/// generation lives downstream of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Enter a method frame; operands: parameter count, variable-slot count.
    Enter = 1,
    /// Leave the current frame.
    Exit = 2,
    /// Return to the caller.
    Return = 3,
    /// Runtime trap; operand: trap number. Emitted after the body of a
    /// value-returning method as the fell-off-the-end guard.
    Trap = 4,
}

/// Append-only code buffer.
///
/// No random access or patching: the front end only ever appends and records
/// addresses. `pc()` is the address the next emitted word will occupy.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CodeBuffer {
    buf: Vec<u8>,
    main_pc: Option<usize>,
    /// Number of global variable slots the program declares.
    pub data_size: usize,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the next instruction word.
    pub fn pc(&self) -> usize {
        self.buf.len()
    }

    /// Appends an opcode.
    pub fn put(&mut self, op: Opcode) {
        self.buf.push(op as u8);
    }

    /// Appends an operand word. Counts are truncated to one byte.
    pub fn put_operand(&mut self, value: usize) {
        self.buf.push(value as u8);
    }

    /// Records the entry point of the designated `main` method.
    pub fn set_main_pc(&mut self, pc: usize) {
        self.main_pc = Some(pc);
    }

    /// Entry point of `main`, if one was declared.
    pub fn main_pc(&self) -> Option<usize> {
        self.main_pc
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pc_tracks_appends() {
        let mut code = CodeBuffer::new();
        assert_eq!(code.pc(), 0);
        code.put(Opcode::Enter);
        code.put_operand(2);
        code.put_operand(3);
        assert_eq!(code.pc(), 3);
        assert_eq!(code.bytes(), &[Opcode::Enter as u8, 2, 3]);
    }

    #[test]
    fn main_pc_is_unset_until_recorded() {
        let mut code = CodeBuffer::new();
        assert_eq!(code.main_pc(), None);
        code.put(Opcode::Enter);
        code.set_main_pc(0);
        assert_eq!(code.main_pc(), Some(0));
    }
}
