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

//! Pass 2: walks the laid-out lines in order, resolving every operand
//! against the finished symbol table and concatenating the emitted bytes.

pub mod constants;
pub mod instruction_encoders;
pub mod operand;

use crate::ast::{DataValue, LaidOutLine, LayoutKind};
use crate::errors::AssemblyError;
use crate::symbol_table::SymbolTable;

pub fn emit(lines: &[LaidOutLine], symbols: &SymbolTable) -> Result<Vec<u8>, AssemblyError> {
    let mut out = Vec::new();
    for line in lines {
        match &line.kind {
            LayoutKind::Empty => {}
            LayoutKind::RawBytes(bytes) => out.extend_from_slice(bytes),
            LayoutKind::Word(values) => emit_little_endian(values, 2, constants::WORD_MAX, line, symbols, &mut out)?,
            LayoutKind::Dword(values) => {
                emit_little_endian(values, 4, constants::DWORD_MAX, line, symbols, &mut out)?
            }
            LayoutKind::Instruction(variant) => {
                let bytes = instruction_encoders::encode(
                    variant,
                    line.address,
                    symbols,
                    line.line_number,
                    &line.original_text,
                )?;
                let expected = variant.chosen_mode().size();
                if bytes.len() as u16 != expected {
                    return Err(AssemblyError::internal(
                        line.line_number,
                        &line.original_text,
                        format!(
                            "Encoded size {} does not match the {} bytes reserved for this instruction in Pass 1",
                            bytes.len(),
                            expected
                        ),
                    ));
                }
                out.extend(bytes);
            }
        }
    }
    Ok(out)
}

fn emit_little_endian(
    values: &[DataValue],
    width: usize,
    max: u32,
    line: &LaidOutLine,
    symbols: &SymbolTable,
    out: &mut Vec<u8>,
) -> Result<(), AssemblyError> {
    for value in values {
        let resolved = resolve_data_value(value, symbols, line.line_number, &line.original_text)?;
        instruction_encoders::check_range(resolved, max, line.line_number, &line.original_text)?;
        let bytes = resolved.to_le_bytes();
        out.extend_from_slice(&bytes[..width]);
    }
    Ok(())
}

fn resolve_data_value(
    value: &DataValue,
    symbols: &SymbolTable,
    line: usize,
    text: &str,
) -> Result<u32, AssemblyError> {
    match value {
        DataValue::Literal(v) => Ok(*v),
        DataValue::Label(name) => symbols.resolve(name, line, text).map(|addr| addr as u32),
    }
}
