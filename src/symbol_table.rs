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

//! A label-to-address mapping, case-sensitive, populated once during the
//! Pass 1 layout walk and read back during both Pass 1 (for already-bound
//! backward references) and Pass 2 (for everything, forward or backward).

use std::collections::HashMap;

use crate::errors::AssemblyError;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: HashMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `address`. Fails if the identifier is already bound;
    /// redefinition is always an error, never a shadow.
    pub fn define(
        &mut self,
        name: &str,
        address: u16,
        line: usize,
        text: &str,
    ) -> Result<(), AssemblyError> {
        if self.bindings.contains_key(name) {
            return Err(AssemblyError::symbol(
                line,
                text,
                format!("Label '{name}' is already defined"),
            ));
        }
        self.bindings.insert(name.to_string(), address);
        Ok(())
    }

    /// Looks up a bound label without producing an error, for contexts (Pass 1
    /// backward-reference checks) where "not yet bound" is expected and handled.
    pub fn get(&self, name: &str) -> Option<u16> {
        self.bindings.get(name).copied()
    }

    /// Looks up a bound label, failing with a `Symbol` error if unbound. Used
    /// by Pass 2, where every reference must resolve by the time emission runs.
    pub fn resolve(&self, name: &str, line: usize, text: &str) -> Result<u16, AssemblyError> {
        self.get(name).ok_or_else(|| {
            AssemblyError::symbol(line, text, format!("Label '{name}' is not defined"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_then_resolve_round_trips() {
        let mut table = SymbolTable::new();
        table.define("loop", 0x0200, 1, "loop:").unwrap();
        assert_eq!(table.resolve("loop", 2, "JMP loop").unwrap(), 0x0200);
    }

    #[test]
    fn duplicate_definition_is_a_symbol_error() {
        let mut table = SymbolTable::new();
        table.define("loop", 0x0200, 1, "loop:").unwrap();
        let err = table.define("loop", 0x0300, 5, "loop:").unwrap_err();
        assert!(matches!(err, AssemblyError::Symbol { line: 5, .. }));
    }

    #[test]
    fn unresolved_label_is_a_symbol_error() {
        let table = SymbolTable::new();
        let err = table.resolve("missing", 3, "JMP missing").unwrap_err();
        assert!(matches!(err, AssemblyError::Symbol { line: 3, .. }));
    }

    #[test]
    fn case_sensitive_labels_are_distinct() {
        let mut table = SymbolTable::new();
        table.define("Loop", 0x0200, 1, "Loop:").unwrap();
        table.define("loop", 0x0300, 2, "loop:").unwrap();
        assert_eq!(table.get("Loop"), Some(0x0200));
        assert_eq!(table.get("loop"), Some(0x0300));
    }
}
