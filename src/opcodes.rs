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

//! The complete documented NMOS 6502 opcode table: 151 (mnemonic, addressing
//! mode) combinations across 56 mnemonics, each with its fixed opcode byte.
//! Illegal/undocumented opcodes are not represented; this assembler only ever
//! emits documented encodings.

use crate::addressing::AddressingMode;

/// One row of the opcode table: a single (mnemonic, mode) -> opcode mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub opcode: u8,
}

pub const OPCODE_TABLE: &[OpcodeEntry] = &[
    OpcodeEntry { mnemonic: "BRK", mode: AddressingMode::Implicit, opcode: 0x00 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::IndirectX, opcode: 0x01 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::ZeroPage, opcode: 0x05 },
    OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::ZeroPage, opcode: 0x06 },
    OpcodeEntry { mnemonic: "PHP", mode: AddressingMode::Implicit, opcode: 0x08 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::Immediate, opcode: 0x09 },
    OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::Accumulator, opcode: 0x0A },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::Absolute, opcode: 0x0D },
    OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::Absolute, opcode: 0x0E },
    OpcodeEntry { mnemonic: "BPL", mode: AddressingMode::Relative, opcode: 0x10 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::IndirectY, opcode: 0x11 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::ZeroPageX, opcode: 0x15 },
    OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::ZeroPageX, opcode: 0x16 },
    OpcodeEntry { mnemonic: "CLC", mode: AddressingMode::Implicit, opcode: 0x18 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::AbsoluteY, opcode: 0x19 },
    OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::AbsoluteX, opcode: 0x1D },
    OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::AbsoluteX, opcode: 0x1E },
    OpcodeEntry { mnemonic: "JSR", mode: AddressingMode::Absolute, opcode: 0x20 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::IndirectX, opcode: 0x21 },
    OpcodeEntry { mnemonic: "BIT", mode: AddressingMode::ZeroPage, opcode: 0x24 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::ZeroPage, opcode: 0x25 },
    OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::ZeroPage, opcode: 0x26 },
    OpcodeEntry { mnemonic: "PLP", mode: AddressingMode::Implicit, opcode: 0x28 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::Immediate, opcode: 0x29 },
    OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::Accumulator, opcode: 0x2A },
    OpcodeEntry { mnemonic: "BIT", mode: AddressingMode::Absolute, opcode: 0x2C },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::Absolute, opcode: 0x2D },
    OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::Absolute, opcode: 0x2E },
    OpcodeEntry { mnemonic: "BMI", mode: AddressingMode::Relative, opcode: 0x30 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::IndirectY, opcode: 0x31 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::ZeroPageX, opcode: 0x35 },
    OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::ZeroPageX, opcode: 0x36 },
    OpcodeEntry { mnemonic: "SEC", mode: AddressingMode::Implicit, opcode: 0x38 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::AbsoluteY, opcode: 0x39 },
    OpcodeEntry { mnemonic: "AND", mode: AddressingMode::AbsoluteX, opcode: 0x3D },
    OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::AbsoluteX, opcode: 0x3E },
    OpcodeEntry { mnemonic: "RTI", mode: AddressingMode::Implicit, opcode: 0x40 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::IndirectX, opcode: 0x41 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::ZeroPage, opcode: 0x45 },
    OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::ZeroPage, opcode: 0x46 },
    OpcodeEntry { mnemonic: "PHA", mode: AddressingMode::Implicit, opcode: 0x48 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::Immediate, opcode: 0x49 },
    OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::Accumulator, opcode: 0x4A },
    OpcodeEntry { mnemonic: "JMP", mode: AddressingMode::Absolute, opcode: 0x4C },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::Absolute, opcode: 0x4D },
    OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::Absolute, opcode: 0x4E },
    OpcodeEntry { mnemonic: "BVC", mode: AddressingMode::Relative, opcode: 0x50 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::IndirectY, opcode: 0x51 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::ZeroPageX, opcode: 0x55 },
    OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::ZeroPageX, opcode: 0x56 },
    OpcodeEntry { mnemonic: "CLI", mode: AddressingMode::Implicit, opcode: 0x58 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::AbsoluteY, opcode: 0x59 },
    OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::AbsoluteX, opcode: 0x5D },
    OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::AbsoluteX, opcode: 0x5E },
    OpcodeEntry { mnemonic: "RTS", mode: AddressingMode::Implicit, opcode: 0x60 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::IndirectX, opcode: 0x61 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::ZeroPage, opcode: 0x65 },
    OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::ZeroPage, opcode: 0x66 },
    OpcodeEntry { mnemonic: "PLA", mode: AddressingMode::Implicit, opcode: 0x68 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::Immediate, opcode: 0x69 },
    OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::Accumulator, opcode: 0x6A },
    OpcodeEntry { mnemonic: "JMP", mode: AddressingMode::Indirect, opcode: 0x6C },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::Absolute, opcode: 0x6D },
    OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::Absolute, opcode: 0x6E },
    OpcodeEntry { mnemonic: "BVS", mode: AddressingMode::Relative, opcode: 0x70 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::IndirectY, opcode: 0x71 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::ZeroPageX, opcode: 0x75 },
    OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::ZeroPageX, opcode: 0x76 },
    OpcodeEntry { mnemonic: "SEI", mode: AddressingMode::Implicit, opcode: 0x78 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::AbsoluteY, opcode: 0x79 },
    OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::AbsoluteX, opcode: 0x7D },
    OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::AbsoluteX, opcode: 0x7E },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::IndirectX, opcode: 0x81 },
    OpcodeEntry { mnemonic: "STY", mode: AddressingMode::ZeroPage, opcode: 0x84 },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::ZeroPage, opcode: 0x85 },
    OpcodeEntry { mnemonic: "STX", mode: AddressingMode::ZeroPage, opcode: 0x86 },
    OpcodeEntry { mnemonic: "DEY", mode: AddressingMode::Implicit, opcode: 0x88 },
    OpcodeEntry { mnemonic: "TXA", mode: AddressingMode::Implicit, opcode: 0x8A },
    OpcodeEntry { mnemonic: "STY", mode: AddressingMode::Absolute, opcode: 0x8C },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::Absolute, opcode: 0x8D },
    OpcodeEntry { mnemonic: "STX", mode: AddressingMode::Absolute, opcode: 0x8E },
    OpcodeEntry { mnemonic: "BCC", mode: AddressingMode::Relative, opcode: 0x90 },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::IndirectY, opcode: 0x91 },
    OpcodeEntry { mnemonic: "STY", mode: AddressingMode::ZeroPageX, opcode: 0x94 },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::ZeroPageX, opcode: 0x95 },
    OpcodeEntry { mnemonic: "STX", mode: AddressingMode::ZeroPageY, opcode: 0x96 },
    OpcodeEntry { mnemonic: "TYA", mode: AddressingMode::Implicit, opcode: 0x98 },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::AbsoluteY, opcode: 0x99 },
    OpcodeEntry { mnemonic: "TXS", mode: AddressingMode::Implicit, opcode: 0x9A },
    OpcodeEntry { mnemonic: "STA", mode: AddressingMode::AbsoluteX, opcode: 0x9D },
    OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::Immediate, opcode: 0xA0 },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::IndirectX, opcode: 0xA1 },
    OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::Immediate, opcode: 0xA2 },
    OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::ZeroPage, opcode: 0xA4 },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::ZeroPage, opcode: 0xA5 },
    OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::ZeroPage, opcode: 0xA6 },
    OpcodeEntry { mnemonic: "TAY", mode: AddressingMode::Implicit, opcode: 0xA8 },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::Immediate, opcode: 0xA9 },
    OpcodeEntry { mnemonic: "TAX", mode: AddressingMode::Implicit, opcode: 0xAA },
    OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::Absolute, opcode: 0xAC },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::Absolute, opcode: 0xAD },
    OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::Absolute, opcode: 0xAE },
    OpcodeEntry { mnemonic: "BCS", mode: AddressingMode::Relative, opcode: 0xB0 },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::IndirectY, opcode: 0xB1 },
    OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::ZeroPageX, opcode: 0xB4 },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::ZeroPageX, opcode: 0xB5 },
    OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::ZeroPageY, opcode: 0xB6 },
    OpcodeEntry { mnemonic: "CLV", mode: AddressingMode::Implicit, opcode: 0xB8 },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::AbsoluteY, opcode: 0xB9 },
    OpcodeEntry { mnemonic: "TSX", mode: AddressingMode::Implicit, opcode: 0xBA },
    OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::AbsoluteX, opcode: 0xBC },
    OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::AbsoluteX, opcode: 0xBD },
    OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::AbsoluteY, opcode: 0xBE },
    OpcodeEntry { mnemonic: "CPY", mode: AddressingMode::Immediate, opcode: 0xC0 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::IndirectX, opcode: 0xC1 },
    OpcodeEntry { mnemonic: "CPY", mode: AddressingMode::ZeroPage, opcode: 0xC4 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::ZeroPage, opcode: 0xC5 },
    OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::ZeroPage, opcode: 0xC6 },
    OpcodeEntry { mnemonic: "INY", mode: AddressingMode::Implicit, opcode: 0xC8 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::Immediate, opcode: 0xC9 },
    OpcodeEntry { mnemonic: "DEX", mode: AddressingMode::Implicit, opcode: 0xCA },
    OpcodeEntry { mnemonic: "CPY", mode: AddressingMode::Absolute, opcode: 0xCC },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::Absolute, opcode: 0xCD },
    OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::Absolute, opcode: 0xCE },
    OpcodeEntry { mnemonic: "BNE", mode: AddressingMode::Relative, opcode: 0xD0 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::IndirectY, opcode: 0xD1 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::ZeroPageX, opcode: 0xD5 },
    OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::ZeroPageX, opcode: 0xD6 },
    OpcodeEntry { mnemonic: "CLD", mode: AddressingMode::Implicit, opcode: 0xD8 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::AbsoluteY, opcode: 0xD9 },
    OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::AbsoluteX, opcode: 0xDD },
    OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::AbsoluteX, opcode: 0xDE },
    OpcodeEntry { mnemonic: "CPX", mode: AddressingMode::Immediate, opcode: 0xE0 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::IndirectX, opcode: 0xE1 },
    OpcodeEntry { mnemonic: "CPX", mode: AddressingMode::ZeroPage, opcode: 0xE4 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::ZeroPage, opcode: 0xE5 },
    OpcodeEntry { mnemonic: "INC", mode: AddressingMode::ZeroPage, opcode: 0xE6 },
    OpcodeEntry { mnemonic: "INX", mode: AddressingMode::Implicit, opcode: 0xE8 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::Immediate, opcode: 0xE9 },
    OpcodeEntry { mnemonic: "NOP", mode: AddressingMode::Implicit, opcode: 0xEA },
    OpcodeEntry { mnemonic: "CPX", mode: AddressingMode::Absolute, opcode: 0xEC },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::Absolute, opcode: 0xED },
    OpcodeEntry { mnemonic: "INC", mode: AddressingMode::Absolute, opcode: 0xEE },
    OpcodeEntry { mnemonic: "BEQ", mode: AddressingMode::Relative, opcode: 0xF0 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::IndirectY, opcode: 0xF1 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::ZeroPageX, opcode: 0xF5 },
    OpcodeEntry { mnemonic: "INC", mode: AddressingMode::ZeroPageX, opcode: 0xF6 },
    OpcodeEntry { mnemonic: "SED", mode: AddressingMode::Implicit, opcode: 0xF8 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::AbsoluteY, opcode: 0xF9 },
    OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::AbsoluteX, opcode: 0xFD },
    OpcodeEntry { mnemonic: "INC", mode: AddressingMode::AbsoluteX, opcode: 0xFE },
];

/// All table rows whose mnemonic matches (case already normalized to upper by the caller).
pub fn candidates_for(mnemonic: &str) -> Vec<&'static OpcodeEntry> {
    OPCODE_TABLE
        .iter()
        .filter(|entry| entry.mnemonic == mnemonic)
        .collect()
}

/// The single opcode byte for an exact (mnemonic, mode) pair, if the 6502 defines one.
pub fn opcode_for(mnemonic: &str, mode: AddressingMode) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .find(|entry| entry.mnemonic == mnemonic && entry.mode == mode)
        .map(|entry| entry.opcode)
}

/// The eight branch mnemonics: the only instructions using `AddressingMode::Relative`.
pub fn is_branch_mnemonic(mnemonic: &str) -> bool {
    matches!(
        mnemonic,
        "BPL" | "BMI" | "BVC" | "BVS" | "BCC" | "BCS" | "BNE" | "BEQ"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_151_documented_entries() {
        assert_eq!(OPCODE_TABLE.len(), 151);
    }

    #[test]
    fn lda_immediate_is_0xa9() {
        assert_eq!(opcode_for("LDA", AddressingMode::Immediate), Some(0xA9));
    }

    #[test]
    fn brk_is_implicit_one_byte() {
        let entry = opcode_for("BRK", AddressingMode::Implicit);
        assert_eq!(entry, Some(0x00));
        assert_eq!(AddressingMode::Implicit.size(), 1);
    }

    #[test]
    fn jmp_has_absolute_and_indirect_only() {
        let modes: Vec<_> = candidates_for("JMP").iter().map(|e| e.mode).collect();
        assert!(modes.contains(&AddressingMode::Absolute));
        assert!(modes.contains(&AddressingMode::Indirect));
        assert_eq!(modes.len(), 2);
    }

    #[test]
    fn unknown_mnemonic_has_no_candidates() {
        assert!(candidates_for("XYZ").is_empty());
    }
}
