//! Shape building — a declaration's type references resolved into a
//! comparable signature.

use cedetect_core::types::FunctionSignature;

use crate::parser::{Declaration, ImportTable};

/// Resolve every parameter and result of `decl` through the import table,
/// preserving order. Resolution never fails (see `resolver`).
pub fn signature_of(decl: &Declaration, imports: &ImportTable) -> FunctionSignature {
    FunctionSignature {
        ins: decl.params.iter().map(|r| imports.resolve(r)).collect(),
        outs: decl.results.iter().map(|r| imports.resolve(r)).collect(),
    }
}
