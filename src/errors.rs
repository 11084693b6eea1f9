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

use thiserror::Error;

use crate::parser::Rule;

/// The closed taxonomy of failure kinds an assembly run can produce.
///
/// Every variant carries the 1-based source line number and the original
/// (untrimmed, un-comment-stripped) line text, so `Display` can always
/// render the uniform `Line N: <message>. Original line: '<text>'` diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Line {line}: {message}. Original line: '{text}'")]
    Syntax {
        line: usize,
        text: String,
        message: String,
    },

    #[error("Line {line}: {message}. Original line: '{text}'")]
    Symbol {
        line: usize,
        text: String,
        message: String,
    },

    #[error("Line {line}: {message}. Original line: '{text}'")]
    Range {
        line: usize,
        text: String,
        message: String,
    },

    #[error("Line {line}: {message}. Original line: '{text}'")]
    Mode {
        line: usize,
        text: String,
        message: String,
    },

    #[error("Line {line}: {message}. Original line: '{text}'")]
    Internal {
        line: usize,
        text: String,
        message: String,
    },
}

impl AssemblyError {
    pub fn syntax(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        AssemblyError::Syntax {
            line,
            text: text.into(),
            message: message.into(),
        }
    }

    pub fn symbol(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        AssemblyError::Symbol {
            line,
            text: text.into(),
            message: message.into(),
        }
    }

    pub fn range(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        AssemblyError::Range {
            line,
            text: text.into(),
            message: message.into(),
        }
    }

    pub fn mode(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        AssemblyError::Mode {
            line,
            text: text.into(),
            message: message.into(),
        }
    }

    pub fn internal(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        AssemblyError::Internal {
            line,
            text: text.into(),
            message: message.into(),
        }
    }
}

/// Converts a raw `pest` grammar failure (no line context of its own beyond
/// the span it failed at) into a `Syntax` error carrying the line text.
pub fn from_pest_error(line: usize, text: &str, err: pest::error::Error<Rule>) -> AssemblyError {
    AssemblyError::syntax(line, text, format!("{err}"))
}
