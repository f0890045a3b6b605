//! Catalog matching — exact structural equality, nothing fuzzier.

use cedetect_core::types::FunctionSignature;

/// True when `candidate` equals one of the catalog entries exactly.
///
/// No subtyping and no coercion between result- and error-typed outputs.
/// Which entry matched is deliberately not reported; callers only need the
/// fact of acceptance.
pub fn is_accepted(candidate: &FunctionSignature, catalog: &[FunctionSignature]) -> bool {
    catalog.iter().any(|accepted| accepted == candidate)
}
