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

//! Pass 1 back end: walks the parsed lines once in source order, advancing a
//! 16-bit location counter, binding labels, and fixing every instruction's
//! addressing-mode variant and size before any bytes are emitted.

use crate::addressing::AddressingMode;
use crate::ast::{AsciiElement, DataValue, Directive, InstructionVariant, LaidOutLine, LayoutKind, ParsedLine, Statement};
use crate::encoder::constants::{BYTE_MAX, WORD_MAX};
use crate::encoder::instruction_encoders::check_range;
use crate::encoder::operand::{self, Expr, OperandPayload};
use crate::errors::AssemblyError;
use crate::symbol_table::SymbolTable;

/// Runs Pass 1 over the already-parsed lines, returning the fixed-address
/// line list and the completed symbol table for Pass 2 to resolve against.
pub fn layout(lines: &[ParsedLine]) -> Result<(Vec<LaidOutLine>, SymbolTable), AssemblyError> {
    let mut symbols = SymbolTable::new();
    let mut location: u16 = 0;
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        if let Some(label) = &line.label {
            symbols.define(label, location, line.line_number, &line.original_text)?;
        }

        let Some(statement) = &line.statement else {
            out.push(LaidOutLine {
                line_number: line.line_number,
                original_text: line.original_text.clone(),
                address: location,
                kind: LayoutKind::Empty,
            });
            continue;
        };

        let address = location;
        let kind = match statement {
            Statement::Directive(Directive::Org(target)) => {
                location = *target;
                LayoutKind::Empty
            }
            Statement::Directive(Directive::Reserve(count_value)) => {
                let count = resolve_immediate_value(count_value, &symbols, line)?;
                check_range(count, WORD_MAX, line.line_number, &line.original_text)?;
                location = location.wrapping_add(count as u16);
                LayoutKind::Empty
            }
            Statement::Directive(Directive::Byte(values)) => {
                let bytes = resolve_byte_list(values, &symbols, line)?;
                location = location.wrapping_add(bytes.len() as u16);
                LayoutKind::RawBytes(bytes)
            }
            Statement::Directive(Directive::Word(values)) => {
                location = location.wrapping_add((values.len() * 2) as u16);
                LayoutKind::Word(values.clone())
            }
            Statement::Directive(Directive::Dword(values)) => {
                location = location.wrapping_add((values.len() * 4) as u16);
                LayoutKind::Dword(values.clone())
            }
            Statement::Directive(Directive::Ascii(elements)) => {
                let bytes = resolve_ascii_list(elements, &symbols, line, false)?;
                location = location.wrapping_add(bytes.len() as u16);
                LayoutKind::RawBytes(bytes)
            }
            Statement::Directive(Directive::Asciiz(elements)) => {
                let bytes = resolve_ascii_list(elements, &symbols, line, true)?;
                location = location.wrapping_add(bytes.len() as u16);
                LayoutKind::RawBytes(bytes)
            }
            Statement::Instruction(instr) => {
                let candidates = operand::candidates(
                    &instr.mnemonic,
                    &instr.operand_text,
                    line.line_number,
                    &line.original_text,
                )?;
                let chosen = choose_variant(&candidates, &symbols);
                let mode = candidates[chosen].0;
                location = location.wrapping_add(mode.size());
                LayoutKind::Instruction(InstructionVariant {
                    mnemonic: instr.mnemonic.clone(),
                    operand_text: instr.operand_text.clone(),
                    candidates: candidates.into_iter().map(|(m, _)| m).collect(),
                    chosen,
                })
            }
        };

        out.push(LaidOutLine {
            line_number: line.line_number,
            original_text: line.original_text.clone(),
            address,
            kind,
        });
    }

    Ok((out, symbols))
}

/// Picks the candidate index Pass 2 must also pick: absolute unless the
/// identifier is already bound here to an address <= 0xFF.
fn choose_variant(candidates: &[(AddressingMode, OperandPayload)], symbols: &SymbolTable) -> usize {
    if candidates.len() == 1 {
        return 0;
    }
    let is_zero_page = |mode: AddressingMode| {
        matches!(
            mode,
            AddressingMode::ZeroPage | AddressingMode::ZeroPageX | AddressingMode::ZeroPageY
        )
    };
    let bound_narrow = candidates.iter().any(|(_, payload)| {
        matches!(payload, OperandPayload::Address(Expr::Label(name)) if symbols.get(name).is_some_and(|addr| addr <= 0xFF))
    });
    if bound_narrow {
        candidates
            .iter()
            .position(|(mode, _)| is_zero_page(*mode))
            .unwrap_or(0)
    } else {
        candidates
            .iter()
            .position(|(mode, _)| !is_zero_page(*mode))
            .unwrap_or(0)
    }
}

/// Resolves a `.res` count: a literal, or a label that must already be bound.
fn resolve_immediate_value(value: &DataValue, symbols: &SymbolTable, line: &ParsedLine) -> Result<u32, AssemblyError> {
    match value {
        DataValue::Literal(v) => Ok(*v),
        DataValue::Label(name) => symbols
            .resolve(name, line.line_number, &line.original_text)
            .map(|addr| addr as u32),
    }
}

fn resolve_byte_list(values: &[DataValue], symbols: &SymbolTable, line: &ParsedLine) -> Result<Vec<u8>, AssemblyError> {
    values
        .iter()
        .map(|value| {
            let resolved = resolve_immediate_value(value, symbols, line)?;
            check_range(resolved, BYTE_MAX, line.line_number, &line.original_text)?;
            Ok(resolved as u8)
        })
        .collect()
}

fn resolve_ascii_list(
    elements: &[AsciiElement],
    symbols: &SymbolTable,
    line: &ParsedLine,
    zero_terminate: bool,
) -> Result<Vec<u8>, AssemblyError> {
    let mut bytes = Vec::new();
    for element in elements {
        match element {
            AsciiElement::String(s) => {
                for ch in s.chars() {
                    if !ch.is_ascii() {
                        return Err(AssemblyError::range(
                            line.line_number,
                            &line.original_text,
                            format!("Character '{ch}' is not 7-bit US-ASCII"),
                        ));
                    }
                    bytes.push(ch as u8);
                }
            }
            AsciiElement::Value(value) => {
                let resolved = resolve_immediate_value(value, symbols, line)?;
                check_range(resolved, BYTE_MAX, line.line_number, &line.original_text)?;
                bytes.push(resolved as u8);
            }
        }
    }
    if zero_terminate {
        bytes.push(0);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::normalize;
    use crate::parser::parse_line;

    fn layout_source(src: &str) -> (Vec<LaidOutLine>, SymbolTable) {
        let parsed: Vec<ParsedLine> = normalize(src).iter().map(|l| parse_line(l).unwrap()).collect();
        layout(&parsed).unwrap()
    }

    #[test]
    fn org_sets_location_without_emitting() {
        let (lines, _) = layout_source(".org $0200\nNOP");
        assert_eq!(lines[0].address, 0);
        assert_eq!(lines[1].address, 0x0200);
    }

    #[test]
    fn label_binds_to_address_before_statement_runs() {
        let (_, symbols) = layout_source(".org $0200\nstart: LDA #$01");
        assert_eq!(symbols.get("start"), Some(0x0200));
    }

    #[test]
    fn forward_reference_defaults_to_absolute() {
        let (lines, _) = layout_source("JMP target\ntarget: NOP");
        match &lines[0].kind {
            LayoutKind::Instruction(variant) => {
                assert_eq!(variant.chosen_mode(), AddressingMode::Absolute);
            }
            other => panic!("expected instruction, got {other:?}"),
        }
    }

    #[test]
    fn backward_reference_to_zero_page_label_narrows() {
        let (lines, _) = layout_source(".org $0010\nzp: .res 1\n.org $0200\nLDA zp");
        match &lines[3].kind {
            LayoutKind::Instruction(variant) => {
                assert_eq!(variant.chosen_mode(), AddressingMode::ZeroPage);
            }
            other => panic!("expected instruction, got {other:?}"),
        }
    }

    #[test]
    fn byte_directive_rejects_out_of_range_value() {
        let parsed: Vec<ParsedLine> = normalize(".byte 256").iter().map(|l| parse_line(l).unwrap()).collect();
        let err = layout(&parsed).unwrap_err();
        assert!(matches!(err, AssemblyError::Range { .. }));
    }

    #[test]
    fn asciiz_adds_trailing_zero_byte() {
        let (lines, _) = layout_source(".asciiz \"Hi\"");
        match &lines[0].kind {
            LayoutKind::RawBytes(bytes) => assert_eq!(bytes, &[b'H', b'i', 0]),
            other => panic!("expected raw bytes, got {other:?}"),
        }
    }

    #[test]
    fn reserve_advances_location_counter_without_emitting() {
        let (lines, symbols) = layout_source(".org $0010\nzp: .res 4\nafter: NOP");
        assert_eq!(symbols.get("zp"), Some(0x0010));
        assert_eq!(symbols.get("after"), Some(0x0014));
        assert_eq!(lines[2].address, 0x0014);
    }
}
