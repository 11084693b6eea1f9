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

//! Bitwise and shift/rotate mnemonics: AND, ORA, EOR, BIT, ASL, LSR, ROL,
//! ROR. ASL/LSR/ROL/ROR additionally admit the accumulator-implied form
//! (`ASL A` or bare `ASL`), which the generic encoder already handles via
//! the shared `Empty`/`AccumulatorExplicit` operand shapes.

use crate::ast::InstructionVariant;
use crate::errors::AssemblyError;
use crate::symbol_table::SymbolTable;

pub fn handles(mnemonic: &str) -> bool {
    matches!(
        mnemonic,
        "AND" | "ORA" | "EOR" | "BIT" | "ASL" | "LSR" | "ROL" | "ROR"
    )
}

pub fn encode(
    variant: &InstructionVariant,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<Vec<u8>, AssemblyError> {
    super::encode_generic(variant, symbols, line, text)
}
