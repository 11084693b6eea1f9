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

//! Instruction encoders, grouped by instruction category. Every category but
//! `control_flow`'s relative branches reduces to the same table lookup plus
//! operand-byte encoding, implemented once here as `encode_generic` and
//! reused by each category module.

pub mod arithmetic;
pub mod bitwise;
pub mod control_flow;
pub mod load_store;
pub mod misc;
pub mod stack;

use crate::addressing::AddressingMode;
use crate::ast::InstructionVariant;
use crate::encoder::constants::BYTE_MAX;
use crate::encoder::operand::{self, Expr, ImmediateExpr, OperandPayload};
use crate::errors::AssemblyError;
use crate::opcodes;
use crate::symbol_table::SymbolTable;

pub fn encode(
    variant: &InstructionVariant,
    address: u16,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<Vec<u8>, AssemblyError> {
    let mnemonic = variant.mnemonic.as_str();
    if control_flow::handles(mnemonic) {
        control_flow::encode(variant, address, symbols, line, text)
    } else if arithmetic::handles(mnemonic) {
        arithmetic::encode(variant, symbols, line, text)
    } else if bitwise::handles(mnemonic) {
        bitwise::encode(variant, symbols, line, text)
    } else if load_store::handles(mnemonic) {
        load_store::encode(variant, symbols, line, text)
    } else if stack::handles(mnemonic) {
        stack::encode(variant, symbols, line, text)
    } else if misc::handles(mnemonic) {
        misc::encode(variant, symbols, line, text)
    } else {
        Err(AssemblyError::internal(
            line,
            text,
            format!("No instruction category handles mnemonic '{mnemonic}'"),
        ))
    }
}

/// Looks up the fixed opcode for the variant's chosen mode and appends
/// whatever operand bytes that mode requires. Used directly by every
/// category except the relative-branch path in `control_flow`.
pub(crate) fn encode_generic(
    variant: &InstructionVariant,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<Vec<u8>, AssemblyError> {
    let mode = variant.chosen_mode();
    let opcode = opcodes::opcode_for(&variant.mnemonic, mode).ok_or_else(|| {
        AssemblyError::internal(
            line,
            text,
            format!("No opcode defined for {} in mode {mode:?}", variant.mnemonic),
        )
    })?;

    let payload = payload_for_mode(variant, mode, line, text)?;
    let mut bytes = vec![opcode];
    bytes.extend(operand_bytes(mode, payload, symbols, line, text)?);
    Ok(bytes)
}

/// Re-derives the candidate (mode, payload) set from the variant's operand
/// text and picks the entry matching `mode`. This never re-decides the
/// zero-page/absolute ambiguity Pass 1 already fixed: it only looks up the
/// expression attached to the mode Pass 1 already chose.
pub(crate) fn payload_for_mode(
    variant: &InstructionVariant,
    mode: AddressingMode,
    line: usize,
    text: &str,
) -> Result<OperandPayload, AssemblyError> {
    let candidates = operand::candidates(&variant.mnemonic, &variant.operand_text, line, text)?;
    candidates
        .into_iter()
        .find(|(m, _)| *m == mode)
        .map(|(_, payload)| payload)
        .ok_or_else(|| {
            AssemblyError::internal(
                line,
                text,
                format!("Chosen addressing mode {mode:?} has no matching operand payload"),
            )
        })
}

fn operand_bytes(
    mode: AddressingMode,
    payload: OperandPayload,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<Vec<u8>, AssemblyError> {
    match (mode, payload) {
        (AddressingMode::Implicit, OperandPayload::None)
        | (AddressingMode::Accumulator, OperandPayload::None) => Ok(vec![]),
        (AddressingMode::Immediate, OperandPayload::Immediate(imm)) => {
            Ok(vec![resolve_immediate(&imm, symbols, line, text)?])
        }
        (AddressingMode::ZeroPage, OperandPayload::Address(expr))
        | (AddressingMode::ZeroPageX, OperandPayload::Address(expr))
        | (AddressingMode::ZeroPageY, OperandPayload::Address(expr))
        | (AddressingMode::IndirectX, OperandPayload::Address(expr))
        | (AddressingMode::IndirectY, OperandPayload::Address(expr)) => {
            let value = expr.resolve(symbols, line, text)?;
            check_range(value, BYTE_MAX, line, text)?;
            Ok(vec![value as u8])
        }
        (AddressingMode::Absolute, OperandPayload::Address(expr))
        | (AddressingMode::AbsoluteX, OperandPayload::Address(expr))
        | (AddressingMode::AbsoluteY, OperandPayload::Address(expr))
        | (AddressingMode::Indirect, OperandPayload::Address(expr)) => {
            let value = expr.resolve(symbols, line, text)?;
            check_range(value, crate::encoder::constants::WORD_MAX, line, text)?;
            Ok((value as u16).to_le_bytes().to_vec())
        }
        (other_mode, _) => Err(AssemblyError::internal(
            line,
            text,
            format!("Addressing mode {other_mode:?} has no operand-byte encoding rule"),
        )),
    }
}

fn resolve_immediate(
    imm: &ImmediateExpr,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<u8, AssemblyError> {
    let value = match imm {
        ImmediateExpr::Direct(expr) => {
            let value = resolve_expr(expr, symbols, line, text)?;
            check_range(value, BYTE_MAX, line, text)?;
            value
        }
        ImmediateExpr::LowByte(expr) => resolve_expr(expr, symbols, line, text)? & 0xFF,
        ImmediateExpr::HighByte(expr) => (resolve_expr(expr, symbols, line, text)? >> 8) & 0xFF,
    };
    Ok(value as u8)
}

fn resolve_expr(expr: &Expr, symbols: &SymbolTable, line: usize, text: &str) -> Result<u32, AssemblyError> {
    expr.resolve(symbols, line, text)
}

pub(crate) fn check_range(value: u32, max: u32, line: usize, text: &str) -> Result<(), AssemblyError> {
    if value > max {
        return Err(AssemblyError::range(
            line,
            text,
            format!("Value {value} exceeds the allowed range 0..{max}"),
        ));
    }
    Ok(())
}
