//! Re-exports [`fastvec`]'s containers.
//!
//! Used for short-lived lists (field names, key lists) that rarely spill to the heap.

pub use fastvec::{FastVec, fast_vec};
