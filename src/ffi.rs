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

//! A plain-data mirror of [`assemble`]'s `Result`, for callers (bindings
//! generators, a future WASM build) that want the literal `{bytes, error}`
//! record shape instead of a `Result`. Gated behind the `ffi` feature since
//! no binding generator is wired up in this crate yet.

use crate::assemble;

/// The outcome of one assembly run as a plain struct: `bytes` is empty
/// whenever `error` is present, mirroring the core's all-or-nothing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOutput {
    pub bytes: Vec<u8>,
    pub error: Option<String>,
}

/// Calls [`assemble`] and flattens its `Result` into an `AssembleOutput`.
pub fn assemble_to_output(source: &str) -> AssembleOutput {
    match assemble(source) {
        Ok(bytes) => AssembleOutput { bytes, error: None },
        Err(err) => AssembleOutput {
            bytes: Vec::new(),
            error: Some(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_bytes_and_no_error() {
        let output = assemble_to_output(".org $0200\nBRK");
        assert_eq!(output.bytes, vec![0x00]);
        assert_eq!(output.error, None);
    }

    #[test]
    fn failure_carries_no_bytes_and_an_error_message() {
        let output = assemble_to_output(".byte 256");
        assert!(output.bytes.is_empty());
        assert!(output.error.unwrap().starts_with("Line 1:"));
    }
}
