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

use std::fs;

use mos6502asm::assemble;
use mos6502asm::errors::AssemblyError;

#[test]
fn s1_immediate_load_and_absolute_store() {
    let result = assemble(".org $0200\nLDA #$01\nSTA $0300\nBRK").unwrap();
    assert_eq!(result, vec![0xA9, 0x01, 0x8D, 0x00, 0x03, 0x00]);
}

#[test]
fn s2_self_referential_jump() {
    let result = assemble(".org $0200\nloop:\nJMP loop").unwrap();
    assert_eq!(result, vec![0x4C, 0x00, 0x02]);
}

#[test]
fn s3_countdown_loop_starts_with_expected_bytes() {
    let result = assemble(
        ".org $0200\nstart:\nLDX #$05\ncountdown:\nDEX\nCPX #$00\nBNE countdown\nBRK",
    )
    .unwrap();
    assert_eq!(
        &result[..8],
        &[0xA2, 0x05, 0xCA, 0xE0, 0x00, 0xD0, 0xFB, 0x00]
    );
}

#[test]
fn s4_word_directive_is_little_endian() {
    let result = assemble(".org $0200\ndata: .word $1234, $5678").unwrap();
    assert_eq!(result, vec![0x34, 0x12, 0x78, 0x56]);
}

#[test]
fn s5_asciiz_appends_zero_terminator() {
    let result = assemble(".org $0200\nmsg: .asciiz \"Hi\"").unwrap();
    assert_eq!(result, vec![0x48, 0x69, 0x00]);
}

#[test]
fn s6_backward_reference_narrows_to_zero_page() {
    let source = ".org $0200\nLDA #$42\n.org $0010\nzp: .res 1\n.org $0200\nLDA zp";
    let result = assemble(source).unwrap();
    assert_eq!(&result[2..4], &[0xA5, 0x10]);
}

#[test]
fn s7_byte_directive_range_error_names_the_value() {
    let err = assemble(".org $0200\n.byte 256").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("256"));
    assert!(matches!(err, AssemblyError::Range { .. }));
}

#[test]
fn property_determinism() {
    let source = ".org $0200\nstart:\nINX\nBNE start\nBRK";
    assert_eq!(assemble(source).unwrap(), assemble(source).unwrap());
}

#[test]
fn property_empty_invariance() {
    assert_eq!(assemble("; nothing\n\n; still nothing").unwrap(), Vec::<u8>::new());
}

#[test]
fn property_origin_does_not_pad_output() {
    let contiguous = assemble(".org $0200\nNOP\nNOP").unwrap();
    let with_jump = assemble(".org $0200\nNOP\n.org $8000\nNOP").unwrap();
    assert_eq!(contiguous.len(), with_jump.len());
}

#[test]
fn property_little_endian_dword() {
    let result = assemble(".org $0200\n.dword $04030201").unwrap();
    assert_eq!(result, vec![0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn property_relative_branch_law() {
    // BNE at $0200 targeting $0200 (itself): offset = 0x0200 - (0x0202) = -2.
    let result = assemble(".org $0200\nhere:\nBNE here").unwrap();
    assert_eq!(result, vec![0xD0, 0xFE]);
}

#[test]
fn property_branch_out_of_range_is_a_range_error() {
    let mut source = String::from(".org $0200\ntarget: BRK\n");
    for _ in 0..200 {
        source.push_str("NOP\n");
    }
    source.push_str("BNE target\n");
    let err = assemble(&source).unwrap_err();
    assert!(matches!(err, AssemblyError::Range { .. }));
}

#[test]
fn property_case_insensitive_mnemonics_case_sensitive_labels() {
    let upper = assemble(".org $0200\nNOP").unwrap();
    let lower = assemble(".org $0200\nnop").unwrap();
    assert_eq!(upper, lower);

    let distinct_labels = assemble("Loop: NOP\nloop: NOP").unwrap();
    assert_eq!(distinct_labels, vec![0xEA, 0xEA]);
}

#[test]
fn property_duplicate_label_is_a_symbol_error() {
    let err = assemble("a: NOP\na: NOP").unwrap_err();
    assert!(matches!(err, AssemblyError::Symbol { .. }));
}

#[test]
fn instruction_size_matches_declared_variant_size() {
    let result = assemble(".org $0200\nLDA #$01\nLDA $10\nLDA $1000").unwrap();
    assert_eq!(result.len(), 2 + 2 + 3);
}

#[test]
fn forward_reference_in_byte_directive_is_an_error() {
    let err = assemble(".byte target\ntarget: NOP").unwrap_err();
    assert!(matches!(err, AssemblyError::Symbol { .. }));
}

#[test]
fn forward_reference_in_word_directive_is_allowed() {
    let result = assemble(".word target\ntarget: NOP").unwrap();
    assert_eq!(result, vec![0x02, 0x00, 0xEA]);
}

#[test]
fn indirect_addressing_modes_encode_correctly() {
    let result = assemble(".org $0200\nLDA ($40,X)\nLDA ($40),Y\nJMP ($FFFC)").unwrap();
    assert_eq!(
        result,
        vec![0xA1, 0x40, 0xB1, 0x40, 0x6C, 0xFC, 0xFF]
    );
}

#[test]
fn low_and_high_byte_immediate_selectors() {
    let result = assemble(".org $0200\ntarget: .word $0000\nLDA #<target\nLDA #>target").unwrap();
    assert_eq!(&result[2..], &[0xA9, 0x00, 0xA9, 0x02]);
}

#[test]
fn cli_style_file_round_trip() {
    // Exercises the same read-source / write-bytes path main.rs drives, with
    // real files on disk rather than in-memory strings.
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("program.s");
    let output_path = dir.path().join("program.bin");

    fs::write(&input_path, ".org $0200\nLDA #$01\nSTA $0300\nBRK").unwrap();

    let source = fs::read_to_string(&input_path).unwrap();
    let bytes = assemble(&source).unwrap();
    fs::write(&output_path, &bytes).unwrap();

    let written = fs::read(&output_path).unwrap();
    assert_eq!(written, vec![0xA9, 0x01, 0x8D, 0x00, 0x03, 0x00]);
}
