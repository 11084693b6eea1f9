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

//! Classifies an instruction's raw operand text into the candidate
//! addressing-mode set a mnemonic admits, and resolves the underlying
//! expression once a mode is fixed. Shared by the layout engine (which only
//! needs the candidate modes and whether an identifier is already bound) and
//! the Pass 2 emitter (which needs the resolved numeric value).

use crate::addressing::AddressingMode;
use crate::errors::AssemblyError;
use crate::opcodes;
use crate::symbol_table::SymbolTable;

/// A value an operand resolves to: either a literal already known at parse
/// time, or a label resolved against the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(u32),
    Label(String),
}

impl Expr {
    pub fn resolve(&self, symbols: &SymbolTable, line: usize, text: &str) -> Result<u32, AssemblyError> {
        match self {
            Expr::Literal(v) => Ok(*v),
            Expr::Label(name) => symbols.resolve(name, line, text).map(|addr| addr as u32),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImmediateExpr {
    Direct(Expr),
    LowByte(Expr),
    HighByte(Expr),
}

/// Whether a bare address operand's syntax already pins it to one width, or
/// leaves zero-page vs. absolute genuinely open (identifiers only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedWidth {
    ZeroPage,
    Absolute,
}

/// What an instruction operand resolves to, independent of which mnemonic it
/// is attached to. Mnemonic-specific mode selection happens in `candidates`.
#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Empty,
    AccumulatorExplicit,
    Immediate(ImmediateExpr),
    Bare(Expr, Option<ForcedWidth>),
    BareX(Expr, Option<ForcedWidth>),
    BareY(Expr, Option<ForcedWidth>),
    Indirect(Expr),
    IndirectX(Expr),
    IndirectY(Expr),
}

/// What Pass 2 needs to encode a chosen mode's operand bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum OperandPayload {
    None,
    Immediate(ImmediateExpr),
    Address(Expr),
}

/// Every addressing-mode variant an operand admits for a given mnemonic,
/// paired with the payload needed to encode it once chosen. More than one
/// entry occurs only for the bare zero-page/absolute (and indexed) ambiguity.
pub fn candidates(
    mnemonic: &str,
    operand_text: &str,
    line: usize,
    text: &str,
) -> Result<Vec<(AddressingMode, OperandPayload)>, AssemblyError> {
    let table_modes: Vec<AddressingMode> = opcodes::candidates_for(mnemonic)
        .iter()
        .map(|entry| entry.mode)
        .collect();
    if table_modes.is_empty() {
        return Err(AssemblyError::syntax(
            line,
            text,
            format!("Unknown mnemonic '{mnemonic}'"),
        ));
    }

    let shape = parse_shape(operand_text, line, text)?;
    let result = match shape {
        Shape::Empty => {
            let mode = [AddressingMode::Implicit, AddressingMode::Accumulator]
                .into_iter()
                .find(|m| table_modes.contains(m));
            match mode {
                Some(m) => vec![(m, OperandPayload::None)],
                None => vec![],
            }
        }
        Shape::AccumulatorExplicit => {
            if table_modes.contains(&AddressingMode::Accumulator) {
                vec![(AddressingMode::Accumulator, OperandPayload::None)]
            } else {
                vec![]
            }
        }
        Shape::Immediate(imm) => {
            if table_modes.contains(&AddressingMode::Immediate) {
                vec![(AddressingMode::Immediate, OperandPayload::Immediate(imm))]
            } else {
                vec![]
            }
        }
        Shape::Bare(expr, forced) => {
            if opcodes::is_branch_mnemonic(mnemonic) {
                vec![(AddressingMode::Relative, OperandPayload::Address(expr))]
            } else {
                bare_candidates(
                    expr,
                    forced,
                    &table_modes,
                    AddressingMode::ZeroPage,
                    AddressingMode::Absolute,
                )
            }
        }
        Shape::BareX(expr, forced) => bare_candidates(
            expr,
            forced,
            &table_modes,
            AddressingMode::ZeroPageX,
            AddressingMode::AbsoluteX,
        ),
        Shape::BareY(expr, forced) => bare_candidates(
            expr,
            forced,
            &table_modes,
            AddressingMode::ZeroPageY,
            AddressingMode::AbsoluteY,
        ),
        Shape::Indirect(expr) => {
            if table_modes.contains(&AddressingMode::Indirect) {
                vec![(AddressingMode::Indirect, OperandPayload::Address(expr))]
            } else {
                vec![]
            }
        }
        Shape::IndirectX(expr) => {
            if table_modes.contains(&AddressingMode::IndirectX) {
                vec![(AddressingMode::IndirectX, OperandPayload::Address(expr))]
            } else {
                vec![]
            }
        }
        Shape::IndirectY(expr) => {
            if table_modes.contains(&AddressingMode::IndirectY) {
                vec![(AddressingMode::IndirectY, OperandPayload::Address(expr))]
            } else {
                vec![]
            }
        }
    };

    if result.is_empty() {
        return Err(AssemblyError::mode(
            line,
            text,
            format!("'{mnemonic}' does not support an operand of the form '{operand_text}'"),
        ));
    }
    Ok(result)
}

fn bare_candidates(
    expr: Expr,
    forced: Option<ForcedWidth>,
    table_modes: &[AddressingMode],
    zp_mode: AddressingMode,
    abs_mode: AddressingMode,
) -> Vec<(AddressingMode, OperandPayload)> {
    let wants = |m: AddressingMode| table_modes.contains(&m);
    match forced {
        Some(ForcedWidth::ZeroPage) if wants(zp_mode) => {
            vec![(zp_mode, OperandPayload::Address(expr))]
        }
        Some(ForcedWidth::Absolute) if wants(abs_mode) => {
            vec![(abs_mode, OperandPayload::Address(expr))]
        }
        Some(_) => vec![],
        None => {
            let mut out = Vec::new();
            if wants(zp_mode) {
                out.push((zp_mode, OperandPayload::Address(expr.clone())));
            }
            if wants(abs_mode) {
                out.push((abs_mode, OperandPayload::Address(expr)));
            }
            out
        }
    }
}

fn parse_shape(raw: &str, line: usize, text: &str) -> Result<Shape, AssemblyError> {
    let operand = raw.trim();
    if operand.is_empty() {
        return Ok(Shape::Empty);
    }
    if operand.eq_ignore_ascii_case("A") {
        return Ok(Shape::AccumulatorExplicit);
    }
    if let Some(rest) = operand.strip_prefix('#') {
        return Ok(Shape::Immediate(parse_immediate(rest, line, text)?));
    }
    if let Some(rest) = operand.strip_prefix('(') {
        return parse_indirect(rest, line, text);
    }

    let (base, index) = split_index_suffix(operand);
    let (expr, forced) = parse_address_expr(base, line, text)?;
    match index {
        Some(Register::X) => Ok(Shape::BareX(expr, forced)),
        Some(Register::Y) => Ok(Shape::BareY(expr, forced)),
        None => Ok(Shape::Bare(expr, forced)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Register {
    X,
    Y,
}

/// Splits a trailing `,X` or `,Y` index suffix (case-insensitive) off `operand`.
fn split_index_suffix(operand: &str) -> (&str, Option<Register>) {
    if let Some((base, suffix)) = operand.rsplit_once(',') {
        let suffix = suffix.trim();
        if suffix.eq_ignore_ascii_case("X") {
            return (base.trim(), Some(Register::X));
        }
        if suffix.eq_ignore_ascii_case("Y") {
            return (base.trim(), Some(Register::Y));
        }
    }
    (operand, None)
}

fn parse_indirect(rest: &str, line: usize, text: &str) -> Result<Shape, AssemblyError> {
    let close = rest.find(')').ok_or_else(|| {
        AssemblyError::syntax(line, text, "Unterminated indirect operand: missing ')'")
    })?;
    let inner = &rest[..close];
    let trailer = rest[close + 1..].trim();

    let (base, index) = split_index_suffix(inner);
    if index == Some(Register::X) {
        if !trailer.is_empty() {
            return Err(AssemblyError::syntax(
                line,
                text,
                format!("Unexpected text '{trailer}' after indirect operand"),
            ));
        }
        let (expr, _) = parse_address_expr(base, line, text)?;
        return Ok(Shape::IndirectX(expr));
    }

    let (expr, _) = parse_address_expr(inner.trim(), line, text)?;
    if trailer.is_empty() {
        return Ok(Shape::Indirect(expr));
    }
    if trailer.eq_ignore_ascii_case(",Y") {
        return Ok(Shape::IndirectY(expr));
    }
    Err(AssemblyError::syntax(
        line,
        text,
        format!("Unexpected text '{trailer}' after indirect operand"),
    ))
}

/// Parses a bare address expression: `$HH`/`$HHHH` (forces zero-page or
/// absolute by digit count) or an identifier (leaves width ambiguous).
fn parse_address_expr(
    token: &str,
    line: usize,
    text: &str,
) -> Result<(Expr, Option<ForcedWidth>), AssemblyError> {
    if let Some(digits) = token.strip_prefix('$') {
        let value = u32::from_str_radix(digits, 16).map_err(|_| {
            AssemblyError::syntax(line, text, format!("Invalid hexadecimal literal '{token}'"))
        })?;
        let forced = match digits.len() {
            1 | 2 => ForcedWidth::ZeroPage,
            3 | 4 => ForcedWidth::Absolute,
            _ => {
                return Err(AssemblyError::syntax(
                    line,
                    text,
                    format!("Hexadecimal address '{token}' must have 1-4 digits"),
                ));
            }
        };
        return Ok((Expr::Literal(value), Some(forced)));
    }
    if is_identifier(token) {
        return Ok((Expr::Label(token.to_string()), None));
    }
    Err(AssemblyError::syntax(
        line,
        text,
        format!("'{token}' is not a valid address operand"),
    ))
}

/// Parses `#`-operand content: an optional leading `<`/`>` selector followed
/// by a hex, decimal, or identifier expression. Character literals are not
/// permitted here.
fn parse_immediate(rest: &str, line: usize, text: &str) -> Result<ImmediateExpr, AssemblyError> {
    if let Some(body) = rest.strip_prefix('<') {
        return Ok(ImmediateExpr::LowByte(parse_value_expr(body, line, text)?));
    }
    if let Some(body) = rest.strip_prefix('>') {
        return Ok(ImmediateExpr::HighByte(parse_value_expr(body, line, text)?));
    }
    Ok(ImmediateExpr::Direct(parse_value_expr(rest, line, text)?))
}

fn parse_value_expr(token: &str, line: usize, text: &str) -> Result<Expr, AssemblyError> {
    let token = token.trim();
    if let Some(digits) = token.strip_prefix('$') {
        let value = u32::from_str_radix(digits, 16).map_err(|_| {
            AssemblyError::syntax(line, text, format!("Invalid hexadecimal literal '{token}'"))
        })?;
        return Ok(Expr::Literal(value));
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let value = token.parse::<u32>().map_err(|_| {
            AssemblyError::range(line, text, format!("Decimal literal '{token}' is out of range"))
        })?;
        return Ok(Expr::Literal(value));
    }
    if is_identifier(token) {
        return Ok(Expr::Label(token.to_string()));
    }
    Err(AssemblyError::syntax(
        line,
        text,
        format!("'{token}' is not a valid immediate operand"),
    ))
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hex_two_digits_forces_zero_page() {
        let result = candidates("LDA", "$80", 1, "LDA $80").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, AddressingMode::ZeroPage);
    }

    #[test]
    fn bare_hex_four_digits_forces_absolute() {
        let result = candidates("LDA", "$1234", 1, "LDA $1234").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, AddressingMode::Absolute);
    }

    #[test]
    fn bare_identifier_is_ambiguous_between_zero_page_and_absolute() {
        let result = candidates("LDA", "target", 1, "LDA target").unwrap();
        let modes: Vec<_> = result.iter().map(|(m, _)| *m).collect();
        assert_eq!(modes, vec![AddressingMode::ZeroPage, AddressingMode::Absolute]);
    }

    #[test]
    fn branch_mnemonic_resolves_to_relative() {
        let result = candidates("BNE", "loop", 1, "BNE loop").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, AddressingMode::Relative);
    }

    #[test]
    fn immediate_low_byte_selector() {
        let result = candidates("LDA", "#<label", 1, "LDA #<label").unwrap();
        assert_eq!(result[0].0, AddressingMode::Immediate);
        match &result[0].1 {
            OperandPayload::Immediate(ImmediateExpr::LowByte(Expr::Label(name))) => {
                assert_eq!(name, "label")
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn indirect_x_and_indirect_y_are_distinct() {
        let x = candidates("LDA", "($40,X)", 1, "LDA ($40,X)").unwrap();
        assert_eq!(x[0].0, AddressingMode::IndirectX);
        let y = candidates("LDA", "($40),Y", 1, "LDA ($40),Y").unwrap();
        assert_eq!(y[0].0, AddressingMode::IndirectY);
    }

    #[test]
    fn jmp_indirect_has_no_zero_page_candidate() {
        let result = candidates("JMP", "($FFFC)", 1, "JMP ($FFFC)").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, AddressingMode::Indirect);
    }

    #[test]
    fn implicit_mnemonic_rejects_operand() {
        assert!(candidates("CLC", "$10", 1, "CLC $10").is_err());
    }

    #[test]
    fn accumulator_mode_accepts_explicit_a_or_empty_operand() {
        let explicit = candidates("ASL", "A", 1, "ASL A").unwrap();
        assert_eq!(explicit[0].0, AddressingMode::Accumulator);
        let empty = candidates("ASL", "", 1, "ASL").unwrap();
        assert_eq!(empty[0].0, AddressingMode::Accumulator);
        let zero_page = candidates("ASL", "$10", 1, "ASL $10").unwrap();
        assert_eq!(zero_page[0].0, AddressingMode::ZeroPage);
    }

    #[test]
    fn unknown_mnemonic_is_a_syntax_error() {
        assert!(candidates("ZZZ", "", 1, "ZZZ").is_err());
    }
}
