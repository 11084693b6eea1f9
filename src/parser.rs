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

//! Per-line classification and parsing (Pass 1 front end). Each normalized
//! line is fed through the `grammar.pest` grammar independently; there is no
//! cross-line state here, only the in-order label/statement extraction the
//! spec's five line kinds require.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::ast::{AsciiElement, DataValue, Directive, ParsedLine, RawInstruction, Statement};
use crate::errors::{self, AssemblyError};
use crate::lexer::NormalizedLine;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct LineParser;

/// Parses one normalized line into a `ParsedLine`. An empty `trimmed_text`
/// (blank line or comment-only line) short-circuits before the grammar runs.
pub fn parse_line(line: &NormalizedLine) -> Result<ParsedLine, AssemblyError> {
    if line.trimmed_text.is_empty() {
        return Ok(ParsedLine {
            line_number: line.line_number,
            original_text: line.original_text.clone(),
            label: None,
            statement: None,
        });
    }

    let mut parsed = LineParser::parse(Rule::line, &line.trimmed_text)
        .map_err(|err| errors::from_pest_error(line.line_number, &line.original_text, err))?;
    let line_pair = parsed.next().expect("Rule::line always produces one pair");

    let mut label = None;
    let mut statement = None;
    for pair in line_pair.into_inner() {
        match pair.as_rule() {
            Rule::label => {
                let ident = pair
                    .into_inner()
                    .next()
                    .expect("label always wraps an ident");
                label = Some(ident.as_str().to_string());
            }
            Rule::statement => {
                statement = Some(build_statement(pair, line)?);
            }
            Rule::EOI => {}
            other => unreachable!("unexpected top-level rule: {other:?}"),
        }
    }

    Ok(ParsedLine {
        line_number: line.line_number,
        original_text: line.original_text.clone(),
        label,
        statement,
    })
}

fn build_statement(pair: Pair<Rule>, line: &NormalizedLine) -> Result<Statement, AssemblyError> {
    let inner = pair
        .into_inner()
        .next()
        .expect("statement always wraps a directive or instruction");
    match inner.as_rule() {
        Rule::directive => Ok(Statement::Directive(build_directive(inner, line)?)),
        Rule::instruction => Ok(Statement::Instruction(build_instruction(inner))),
        other => unreachable!("unexpected statement rule: {other:?}"),
    }
}

fn build_instruction(pair: Pair<Rule>) -> RawInstruction {
    let mut inner = pair.into_inner();
    let mnemonic = inner
        .next()
        .expect("instruction always has a mnemonic")
        .as_str()
        .to_uppercase();
    let operand_text = inner
        .next()
        .map(|p| p.as_str().trim().to_string())
        .unwrap_or_default();
    RawInstruction {
        mnemonic,
        operand_text,
    }
}

fn build_directive(pair: Pair<Rule>, line: &NormalizedLine) -> Result<Directive, AssemblyError> {
    let inner = pair
        .into_inner()
        .next()
        .expect("directive always wraps exactly one alternative");
    match inner.as_rule() {
        Rule::org_directive => {
            let hex = inner
                .into_inner()
                .next()
                .expect("org_directive always carries a hex literal");
            let value = parse_hex_u32(hex.as_str(), line)?;
            check_u16(value, hex.as_str(), line)?;
            Ok(Directive::Org(value as u16))
        }
        Rule::res_directive => {
            let value = inner
                .into_inner()
                .next()
                .expect("res_directive always carries a value");
            Ok(Directive::Reserve(build_value(value, line)?))
        }
        Rule::byte_directive => Ok(Directive::Byte(build_value_list(inner, line)?)),
        Rule::word_directive => Ok(Directive::Word(build_value_list(inner, line)?)),
        Rule::dword_directive => Ok(Directive::Dword(build_value_list(inner, line)?)),
        Rule::asciiz_directive => Ok(Directive::Asciiz(build_ascii_list(inner, line)?)),
        Rule::ascii_directive => Ok(Directive::Ascii(build_ascii_list(inner, line)?)),
        other => unreachable!("unexpected directive rule: {other:?}"),
    }
}

fn build_value_list(pair: Pair<Rule>, line: &NormalizedLine) -> Result<Vec<DataValue>, AssemblyError> {
    pair.into_inner().map(|p| build_value(p, line)).collect()
}

fn build_ascii_list(
    pair: Pair<Rule>,
    line: &NormalizedLine,
) -> Result<Vec<AsciiElement>, AssemblyError> {
    pair.into_inner()
        .map(|elem| build_ascii_element(elem, line))
        .collect()
}

fn build_ascii_element(
    pair: Pair<Rule>,
    line: &NormalizedLine,
) -> Result<AsciiElement, AssemblyError> {
    let inner = pair
        .into_inner()
        .next()
        .expect("ascii_elem always wraps a string_elem or value");
    match inner.as_rule() {
        Rule::string_elem => {
            let raw = inner.as_str();
            Ok(AsciiElement::String(raw[1..raw.len() - 1].to_string()))
        }
        Rule::value => Ok(AsciiElement::Value(build_value(inner, line)?)),
        other => unreachable!("unexpected ascii_elem rule: {other:?}"),
    }
}

fn build_value(pair: Pair<Rule>, line: &NormalizedLine) -> Result<DataValue, AssemblyError> {
    let inner = pair
        .into_inner()
        .next()
        .expect("value always wraps one literal/identifier alternative");
    match inner.as_rule() {
        Rule::hex_lit => Ok(DataValue::Literal(parse_hex_u32(inner.as_str(), line)?)),
        Rule::dec_lit => {
            let text = inner.as_str();
            text.parse::<u32>()
                .map(DataValue::Literal)
                .map_err(|_| {
                    AssemblyError::range(
                        line.line_number,
                        &line.original_text,
                        format!("Decimal literal '{text}' is out of range"),
                    )
                })
        }
        Rule::char_lit => {
            let raw = inner.as_str();
            let ch = raw.chars().nth(1).expect("char_lit always has a body char");
            if !ch.is_ascii() {
                return Err(AssemblyError::range(
                    line.line_number,
                    &line.original_text,
                    format!("Character literal '{raw}' is not 7-bit US-ASCII"),
                ));
            }
            Ok(DataValue::Literal(ch as u32))
        }
        Rule::ident => Ok(DataValue::Label(inner.as_str().to_string())),
        other => unreachable!("unexpected value rule: {other:?}"),
    }
}

/// Parses a `$`-prefixed hex literal's digits (the `$` itself is included in
/// the captured span, since `hex_lit` is an atomic pest rule).
fn parse_hex_u32(text: &str, line: &NormalizedLine) -> Result<u32, AssemblyError> {
    let digits = &text[1..];
    u32::from_str_radix(digits, 16).map_err(|_| {
        AssemblyError::syntax(
            line.line_number,
            &line.original_text,
            format!("Invalid hexadecimal literal '{text}'"),
        )
    })
}

fn check_u16(value: u32, text: &str, line: &NormalizedLine) -> Result<(), AssemblyError> {
    if value > 0xFFFF {
        return Err(AssemblyError::range(
            line.line_number,
            &line.original_text,
            format!("Address '{text}' exceeds the 16-bit range 0..65535"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::normalize;

    fn parse(src: &str) -> ParsedLine {
        let lines = normalize(src);
        parse_line(&lines[0]).unwrap()
    }

    #[test]
    fn label_only_line() {
        let parsed = parse("loop:");
        assert_eq!(parsed.label, Some("loop".to_string()));
        assert_eq!(parsed.statement, None);
    }

    #[test]
    fn instruction_with_leading_label() {
        let parsed = parse("start: LDA #$01");
        assert_eq!(parsed.label, Some("start".to_string()));
        match parsed.statement {
            Some(Statement::Instruction(instr)) => {
                assert_eq!(instr.mnemonic, "LDA");
                assert_eq!(instr.operand_text, "#$01");
            }
            other => panic!("expected instruction, got {other:?}"),
        }
    }

    #[test]
    fn mnemonic_is_upper_cased() {
        let parsed = parse("lda #$01");
        match parsed.statement {
            Some(Statement::Instruction(instr)) => assert_eq!(instr.mnemonic, "LDA"),
            other => panic!("expected instruction, got {other:?}"),
        }
    }

    #[test]
    fn org_directive_with_star_equals_form() {
        let parsed = parse("* = $0200");
        assert_eq!(parsed.statement, Some(Statement::Directive(Directive::Org(0x0200))));
    }

    #[test]
    fn byte_directive_mixed_literals() {
        let parsed = parse(".byte $01, 2, 'A'");
        match parsed.statement {
            Some(Statement::Directive(Directive::Byte(values))) => {
                assert_eq!(
                    values,
                    vec![
                        DataValue::Literal(1),
                        DataValue::Literal(2),
                        DataValue::Literal(65),
                    ]
                );
            }
            other => panic!("expected byte directive, got {other:?}"),
        }
    }

    #[test]
    fn asciiz_with_string_and_trailing_label() {
        let parsed = parse(".asciiz \"Hi\", terminator");
        match parsed.statement {
            Some(Statement::Directive(Directive::Asciiz(elements))) => {
                assert_eq!(
                    elements,
                    vec![
                        AsciiElement::String("Hi".to_string()),
                        AsciiElement::Value(DataValue::Label("terminator".to_string())),
                    ]
                );
            }
            other => panic!("expected asciiz directive, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_line_is_a_syntax_error() {
        let lines = normalize("!!!not valid!!!");
        assert!(parse_line(&lines[0]).is_err());
    }

    #[test]
    fn mnemonic_boundary_rejects_four_letter_words() {
        // LDAX is not a three-letter mnemonic with a bare operand; the grammar
        // should fail rather than silently reading it as LDA + "X".
        let lines = normalize("LDAX #$01");
        assert!(parse_line(&lines[0]).is_err());
    }
}
