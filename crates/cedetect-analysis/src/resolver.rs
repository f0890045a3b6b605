//! Import resolution — mapping source-level type references to canonical
//! arguments.

use cedetect_core::types::FunctionArg;

use crate::parser::{ImportTable, TypeRef};

impl ImportTable {
    /// Resolve a type reference to a canonical argument.
    ///
    /// Unqualified names are builtins (`error`). Qualified names look the
    /// alias up in the file's import table. An alias the file never imports
    /// is kept verbatim as the import path: resolution is total, and broken
    /// source yields an argument that simply matches nothing.
    pub fn resolve(&self, type_ref: &TypeRef) -> FunctionArg {
        let import_path = type_ref
            .alias
            .as_ref()
            .map(|alias| self.lookup(alias).unwrap_or(alias).to_string());

        FunctionArg {
            import_path,
            name: type_ref.name.clone(),
            pointer: type_ref.pointer,
        }
    }
}
