use crate::arity::{Arity, AritySet};

/// Errors surfaced by the operator set.
///
/// Every error is reported at the point of detection. Checks that only need
/// the call arguments happen eagerly, when the operator is called; checks
/// that need to look at elements happen lazily, while the returned sequence
/// is traversed. Each operator documents which of its failure modes are
/// eager and which are lazy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value was extracted from a sequence that produced nothing.
    #[error("sequence produced no value")]
    EmptyResult,

    /// An aggregation that needs at least one element ran on an empty source.
    #[error("{operation} requires a non-empty source")]
    EmptySource { operation: &'static str },

    /// `reduce` ran on an empty source with no initial accumulator to fall
    /// back on.
    #[error("cannot reduce an empty source without an initial accumulator")]
    EmptyReduce,

    /// The callback's declared calling convention is not one the operator
    /// supports.
    #[error("{operation} supports callbacks taking {supported}; this callback declares {declared}")]
    UnsupportedArity {
        operation: &'static str,
        declared: Arity,
        supported: AritySet,
    },

    /// A value does not have the structural shape the operator requires.
    #[error("expected {expected}")]
    TypeMismatch { expected: &'static str },

    /// A required lookup key is absent from an element.
    #[error("key {key:?} is absent from an element")]
    MissingKey { key: String },

    /// Neither a key name nor a key function was supplied where one is
    /// required.
    #[error("either a key or a key function must be given")]
    MissingKeySelector,

    /// The operator requires a source with a knowable length and the given
    /// source cannot report one.
    #[error("{operation} requires a source with a knowable length")]
    UnsupportedSource { operation: &'static str },

    /// A sample larger than the population was requested.
    #[error("cannot sample {requested} elements from a population of {population}")]
    SampleSizeExceeded { requested: usize, population: usize },

    /// `invoke` was given an operation name with no registered callable.
    #[error("no operation named {name:?} is registered")]
    UnresolvedOperation { name: String },

    /// The operation is fundamentally incompatible with a one-shot,
    /// non-reversible traversal.
    #[error("{operation} is not supported over lazy traversals")]
    NotSupported { operation: &'static str },
}
