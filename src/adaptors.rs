//! The lazy pipeline stages.
//!
//! Each operator here consumes its source incrementally and returns a
//! stage that is both an [`Iterator`] (to drain it) and a single-pass
//! [`Source`](crate::Source) (to feed the next operator). No stage
//! pre-fetches: an element is pulled from upstream only when the consumer
//! asks for the next value downstream.

mod each;
mod find;
mod invoke;
mod map;
mod partition;
mod pluck;
mod reject;
mod select;
mod where_;

pub use each::{Each, each};
pub use find::{Find, find};
pub use invoke::{Invoke, invoke};
pub use map::{Map, map};
pub use partition::{Partition, partition};
pub use pluck::{Pluck, pluck};
pub use reject::{Reject, reject};
pub use select::{Select, select, select as filter};
pub use where_::{FindWhere, Where, find_where, where_};
