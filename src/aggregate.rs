//! Eager aggregation.
//!
//! Everything here drains its source before returning — these are
//! synchronous blocking calls, and handing one an unbounded source will
//! never come back. On a single-pass source the drain is the one traversal
//! the source has.

mod fold;
mod group_by;
mod group_map;
mod random;
mod size;

pub use fold::{fold, reduce, reduce_right};
pub use group_by::{count_by, group_by, index_by};
pub use group_map::GroupMap;
pub use random::{sample, sample_with, shuffle, shuffle_with};
pub use size::size;
