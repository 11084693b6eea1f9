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

//! Control-flow mnemonics: JMP, JSR, RTS, RTI, BRK, and the eight relative
//! branches. JMP/JSR/RTS/RTI/BRK resolve through the generic encoder; the
//! branches need the signed relative-offset arithmetic computed here since
//! it depends on the instruction's own address, which the generic encoder
//! never sees.

use crate::addressing::AddressingMode;
use crate::ast::InstructionVariant;
use crate::encoder::constants::{RELATIVE_MAX, RELATIVE_MIN};
use crate::encoder::operand::OperandPayload;
use crate::errors::AssemblyError;
use crate::opcodes;
use crate::symbol_table::SymbolTable;

pub fn handles(mnemonic: &str) -> bool {
    matches!(
        mnemonic,
        "JMP" | "JSR" | "RTS" | "RTI" | "BRK" | "BPL" | "BMI" | "BVC" | "BVS" | "BCC" | "BCS" | "BNE" | "BEQ"
    )
}

pub fn encode(
    variant: &InstructionVariant,
    address: u16,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<Vec<u8>, AssemblyError> {
    if opcodes::is_branch_mnemonic(&variant.mnemonic) {
        encode_branch(variant, address, symbols, line, text)
    } else {
        super::encode_generic(variant, symbols, line, text)
    }
}

fn encode_branch(
    variant: &InstructionVariant,
    address: u16,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<Vec<u8>, AssemblyError> {
    let opcode = opcodes::opcode_for(&variant.mnemonic, AddressingMode::Relative).ok_or_else(|| {
        AssemblyError::internal(
            line,
            text,
            format!("No relative-mode opcode defined for {}", variant.mnemonic),
        )
    })?;

    let payload = super::payload_for_mode(variant, AddressingMode::Relative, line, text)?;
    let expr = match payload {
        OperandPayload::Address(expr) => expr,
        other => {
            return Err(AssemblyError::internal(
                line,
                text,
                format!("Branch operand payload was not an address: {other:?}"),
            ));
        }
    };

    let target = expr.resolve(symbols, line, text)?;
    let pc_after_instruction = address as i64 + AddressingMode::Relative.size() as i64;
    let offset = target as i64 - pc_after_instruction;

    if offset < RELATIVE_MIN as i64 || offset > RELATIVE_MAX as i64 {
        return Err(AssemblyError::range(
            line,
            text,
            format!(
                "Branch target is out of range: offset {offset} does not fit in [{RELATIVE_MIN}, {RELATIVE_MAX}]"
            ),
        ));
    }

    let byte = offset as i8 as u8;
    Ok(vec![opcode, byte])
}
