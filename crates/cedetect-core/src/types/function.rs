//! Function signature value types.
//!
//! Plain immutable values compared structurally. Two `FunctionArg`s are
//! equal iff import path, name, and pointer flag all match; signatures
//! compare their argument sequences positionally.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::collections::SmallVec2;

/// A single resolved parameter or result type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FunctionArg {
    /// Canonical import path the type comes from. `None` for builtins
    /// such as `error`.
    pub import_path: Option<String>,
    /// Type name as declared, e.g. `Event`.
    pub name: String,
    /// True when the type is passed or returned as a pointer.
    pub pointer: bool,
}

impl FunctionArg {
    /// A builtin (unqualified) type.
    pub fn builtin(name: &str) -> Self {
        Self {
            import_path: None,
            name: name.to_string(),
            pointer: false,
        }
    }

    /// A type imported from `path`.
    pub fn imported(path: &str, name: &str) -> Self {
        Self {
            import_path: Some(path.to_string()),
            name: name.to_string(),
            pointer: false,
        }
    }

    /// A pointer to a type imported from `path`.
    pub fn imported_ptr(path: &str, name: &str) -> Self {
        Self {
            pointer: true,
            ..Self::imported(path, name)
        }
    }
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer {
            write!(f, "*")?;
        }
        if let Some(path) = &self.import_path {
            write!(f, "{path}.")?;
        }
        write!(f, "{}", self.name)
    }
}

/// A function's positional input and output types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FunctionSignature {
    pub ins: SmallVec2<FunctionArg>,
    pub outs: SmallVec2<FunctionArg>,
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func(")?;
        for (i, arg) in self.ins.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")?;
        match self.outs.len() {
            0 => Ok(()),
            1 => write!(f, " {}", self.outs[0]),
            _ => {
                write!(f, " (")?;
                for (i, arg) in self.outs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Identifying metadata for a detected entry-point function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDetails {
    /// Function name as declared in source.
    pub name: String,
    /// Go package the function lives in. The caller rewrites this to the
    /// full module-qualified package before the plan is written.
    pub package: String,
    /// The resolved signature that matched the catalog.
    pub signature: FunctionSignature,
}
