//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the whole operator set and its supporting types.
//!
//! # Example
//!
//! ```
//! use seqops::prelude::*;
//! ```

pub use crate::adaptors::{
    each, filter, find, find_where, invoke, map, partition, pluck, reject, select, where_,
};
pub use crate::aggregate::{
    GroupMap, count_by, fold, group_by, index_by, reduce, reduce_right, sample, sample_with,
    shuffle, shuffle_with, size,
};
pub use crate::arity::{Arity, AritySet, DeclaredArity, Iteratee, indexed, unary};
pub use crate::array::{first, flatten, flatten_deep, rest};
pub use crate::cmp::{KeySpec, max, max_by, min, min_by, sort_by, value_cmp};
pub use crate::error::Error;
pub use crate::query::{contains, every, every_truthy, some, some_truthy};
pub use crate::record::Record;
pub use crate::registry::{CallArgs, Registry};
pub use crate::source::{Source, restartable, single_pass};
pub use crate::truthy::Truthy;
