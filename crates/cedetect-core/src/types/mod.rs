//! Value types shared across the detector.

pub mod collections;
pub mod function;

pub use collections::{FxHashMap, FxHashSet, SmallVec2};
pub use function::{FunctionArg, FunctionDetails, FunctionSignature};
