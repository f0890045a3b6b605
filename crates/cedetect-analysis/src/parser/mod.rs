//! Go source parsing — package clause, import table, top-level functions.

pub mod go;
pub mod types;

pub use go::GoParser;
pub use types::{Declaration, GoFile, ImportTable, TypeRef};
