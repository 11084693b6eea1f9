/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use crate::addressing::AddressingMode;

/// One element of a `.byte`/`.word`/`.dword` list, or of `.ascii`/`.asciiz`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A literal already resolved to a number (hex, decimal, or character literal).
    Literal(u32),
    /// An identifier, resolved against the symbol table at emission time.
    Label(String),
}

/// One element of an `.ascii`/`.asciiz` list: either a quoted string or a byte value.
#[derive(Debug, Clone, PartialEq)]
pub enum AsciiElement {
    String(String),
    Value(DataValue),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `.org $HHHH` or `* = $HHHH`.
    Org(u16),
    /// `.res COUNT`. COUNT is a literal or a label that must already be bound
    /// at this point in source order; the layout engine resolves it in place.
    Reserve(DataValue),
    Byte(Vec<DataValue>),
    Word(Vec<DataValue>),
    Dword(Vec<DataValue>),
    Ascii(Vec<AsciiElement>),
    Asciiz(Vec<AsciiElement>),
}

/// An instruction line: its upper-cased mnemonic and the raw operand text
/// exactly as written. Addressing-mode classification happens in Pass 1,
/// per the layout engine's variant selection in `layout.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInstruction {
    pub mnemonic: String,
    pub operand_text: String,
}

/// The semantic content of a line once the label (if any) has been peeled off.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Directive(Directive),
    Instruction(RawInstruction),
}

/// A single source line after parsing, before Pass 1 layout has run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub line_number: usize,
    pub original_text: String,
    pub label: Option<String>,
    pub statement: Option<Statement>,
}

/// An instruction's chosen addressing-mode variant, fixed once Pass 1 completes.
///
/// `candidates` holds every addressing mode the operand text could still admit
/// at the time Pass 1 ran (always more than one entry only for the bare-identifier
/// zero-page/absolute ambiguity described in the layout engine); `chosen` is the
/// index into `candidates` that Pass 1 committed to, and whose size the location
/// counter already advanced by. Pass 2 must select the same candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionVariant {
    pub mnemonic: String,
    pub operand_text: String,
    pub candidates: Vec<AddressingMode>,
    pub chosen: usize,
}

impl InstructionVariant {
    pub fn chosen_mode(&self) -> AddressingMode {
        self.candidates[self.chosen]
    }
}

/// What a line contributes to the output once Pass 1 has fixed its address and size.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutKind {
    /// Empty/comment/label-only/origin/`.res`: emits nothing.
    Empty,
    /// `.word` elements, resolved against the symbol table in Pass 2 (forward
    /// references allowed).
    Word(Vec<DataValue>),
    /// `.dword` elements, resolved in Pass 2.
    Dword(Vec<DataValue>),
    /// `.byte`, `.ascii`, and `.asciiz` already collapsed to concrete bytes
    /// during Pass 1 (matching the spec's "forward-referenced labels in
    /// `.byte` are an error" rule — there is no Pass 2 step left to resolve
    /// them in).
    RawBytes(Vec<u8>),
    Instruction(InstructionVariant),
}

/// A source line annotated with its fixed address, ready for Pass 2 emission.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    pub line_number: usize,
    pub original_text: String,
    pub address: u16,
    pub kind: LayoutKind,
}
