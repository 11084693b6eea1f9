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

//! Splits source text into logical lines and strips comments, ahead of the
//! per-line grammar in `parser.rs`. Deliberately does not track quoting: a
//! `;` inside a `.ascii` string is still a comment delimiter here, matching
//! the documented (if surprising) behavior in SPEC_FULL.md §9.

/// One normalized source line: its 1-based number, the original text as
/// written (kept for diagnostics), and the comment-stripped, trimmed text
/// used for classification.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLine {
    pub line_number: usize,
    pub original_text: String,
    pub trimmed_text: String,
}

/// Strips everything from the first `;` onward, then trims leading/trailing
/// whitespace (including a trailing `\r` left over from CRLF line endings).
fn strip_comment(line: &str) -> String {
    let without_comment = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };
    without_comment.trim().to_string()
}

/// Splits `source` on `\n` into normalized lines, one per input line.
pub fn normalize(source: &str) -> Vec<NormalizedLine> {
    source
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| {
            let original_text = raw.trim_end_matches('\r').to_string();
            NormalizedLine {
                line_number: idx + 1,
                trimmed_text: strip_comment(&original_text),
                original_text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_comment() {
        let lines = normalize("LDA #$01 ; load one");
        assert_eq!(lines[0].trimmed_text, "LDA #$01");
    }

    #[test]
    fn comment_only_line_is_empty_after_trim() {
        let lines = normalize("   ; just a comment");
        assert_eq!(lines[0].trimmed_text, "");
    }

    #[test]
    fn crlf_line_endings_are_normalized() {
        let lines = normalize("NOP\r\nBRK\r\n");
        assert_eq!(lines[0].trimmed_text, "NOP");
        assert_eq!(lines[1].trimmed_text, "BRK");
    }

    #[test]
    fn semicolon_inside_ascii_string_still_ends_the_line() {
        // Documented quirk: comment stripping runs before string tokenization.
        let lines = normalize(r#".ascii "a;b""#);
        assert_eq!(lines[0].trimmed_text, ".ascii \"a");
    }

    #[test]
    fn line_numbers_are_one_based_and_in_order() {
        let lines = normalize("NOP\nNOP\nNOP");
        let numbers: Vec<usize> = lines.iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
