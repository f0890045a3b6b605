//! Pre-resolution parse output for one Go source file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use cedetect_core::types::FxHashMap;

/// A parameter or result type as written in source, before import
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Qualifier before the dot (`event` in `event.Event`), if any.
    pub alias: Option<String>,
    /// Type name as written.
    pub name: String,
    /// True when the type is prefixed with `*`.
    pub pointer: bool,
}

impl TypeRef {
    /// An unqualified builtin reference such as `error`.
    pub fn unqualified(name: &str) -> Self {
        Self {
            alias: None,
            name: name.to_string(),
            pointer: false,
        }
    }

    /// A qualified reference such as `event.Event`.
    pub fn qualified(alias: &str, name: &str) -> Self {
        Self {
            alias: Some(alias.to_string()),
            name: name.to_string(),
            pointer: false,
        }
    }
}

/// One top-level function found in a file, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    /// Go visibility convention: name starts with an uppercase rune.
    pub exported: bool,
    pub params: Vec<TypeRef>,
    pub results: Vec<TypeRef>,
}

/// Alias-to-canonical-import-path table, scoped to one file.
///
/// Aliases are either declared explicitly (`event "github.com/..."`)
/// or implied by the final path segment of the import path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportTable {
    entries: FxHashMap<String, String>,
}

impl ImportTable {
    pub fn insert(&mut self, alias: String, path: String) {
        self.entries.insert(alias, path);
    }

    /// Canonical import path for an alias, if the file imports it.
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the parser extracts from one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoFile {
    pub path: PathBuf,
    pub package: String,
    pub imports: ImportTable,
    pub declarations: Vec<Declaration>,
}
