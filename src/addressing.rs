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

//! The 6502 addressing modes. Each names how an instruction's operand bytes,
//! if any, designate the datum to operate on.

/// Operand sizes by mode: 0 bytes for `Implicit`/`Accumulator`, 1 byte for
/// `Immediate`/`ZeroPage*`/`Relative`/`Indirect{X,Y}`, 2 bytes for
/// `Absolute*`/`Indirect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand. Examples: CLC, RTS, NOP.
    Implicit,
    /// Operates on the accumulator. Example: LSR A.
    Accumulator,
    /// 8-bit constant in the instruction stream. Example: LDA #$10.
    Immediate,
    /// 8-bit address in zero page (0x0000-0x00FF). Example: LDA $80.
    ZeroPage,
    /// Zero-page address indexed by X, wrapping within the page. Example: LDA $80,X.
    ZeroPageX,
    /// Zero-page address indexed by Y. Example: LDX $80,Y.
    ZeroPageY,
    /// Signed 8-bit branch offset relative to the instruction after this one.
    Relative,
    /// Full 16-bit address. Example: JMP $1234.
    Absolute,
    /// 16-bit address indexed by X. Example: LDA $1234,X.
    AbsoluteX,
    /// 16-bit address indexed by Y. Example: LDA $1234,Y.
    AbsoluteY,
    /// Indirect jump through a 16-bit pointer. Only JMP uses this. Example: JMP ($FFFC).
    Indirect,
    /// (zp + X), then dereference. Example: LDA ($40,X).
    IndirectX,
    /// Dereference zp, then + Y. Example: LDA ($40),Y.
    IndirectY,
}

impl AddressingMode {
    /// Total instruction size in bytes, opcode included.
    pub fn size(self) -> u16 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}
