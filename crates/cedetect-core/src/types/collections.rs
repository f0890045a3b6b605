//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for signature argument lists (0-2 in practice).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
