//! Short-circuiting queries.
//!
//! These consume their source incrementally and stop the moment the answer
//! is determined. On a single-pass source a partial traversal is still a
//! traversal: do not reuse the source afterwards expecting the skipped
//! elements back.

use crate::arity::Iteratee;
use crate::source::Source;
use crate::truthy::Truthy;

/// Whether every element satisfies `pred`.
///
/// Halts at the first failing element, returning `false` immediately;
/// `true` requires exhausting the source. Vacuously `true` on an empty
/// source.
///
/// # Examples
///
/// ```
/// use seqops::{every, restartable, unary};
///
/// assert!(!every(restartable(vec![2, 4, 5]), unary(|n: &i64| n % 2 == 0)));
/// assert!(every(restartable(vec![2, 4, 6]), unary(|n: &i64| n % 2 == 0)));
/// ```
pub fn every<S, P>(source: S, mut pred: P) -> bool
where
    S: Source,
    P: for<'a> Iteratee<&'a S::Item, Output = bool>,
{
    for (index, item) in source.traverse().enumerate() {
        if !pred.invoke(&item, index) {
            return false;
        }
    }

    true
}

/// Whether any element satisfies `pred` — the dual of [`every`].
///
/// Halts at the first passing element, returning `true` immediately;
/// `false` requires exhausting the source.
pub fn some<S, P>(source: S, mut pred: P) -> bool
where
    S: Source,
    P: for<'a> Iteratee<&'a S::Item, Output = bool>,
{
    for (index, item) in source.traverse().enumerate() {
        if pred.invoke(&item, index) {
            return true;
        }
    }

    false
}

/// [`every`] with the predicate omitted: each element's own truth value is
/// checked.
pub fn every_truthy<S>(source: S) -> bool
where
    S: Source,
    S::Item: Truthy,
{
    source.traverse().all(|item| item.is_truthy())
}

/// [`some`] with the predicate omitted: each element's own truth value is
/// checked.
pub fn some_truthy<S>(source: S) -> bool
where
    S: Source,
    S::Item: Truthy,
{
    source.traverse().any(|item| item.is_truthy())
}

/// Whether `value` occurs in the source.
///
/// With `from_index`, only elements at a strictly greater position are
/// compared. The search consumes the source up to the first occurrence (or
/// entirely, when absent).
///
/// # Examples
///
/// ```
/// use seqops::{contains, restartable};
///
/// let nums = restartable(vec![1, 2, 3]);
///
/// assert!(contains(&nums, &3, None));
/// // Position 0 is not strictly greater than 0, so the leading 1 is skipped.
/// assert!(!contains(&nums, &1, Some(0)));
/// ```
pub fn contains<S>(source: S, value: &S::Item, from_index: Option<usize>) -> bool
where
    S: Source,
    S::Item: PartialEq,
{
    match from_index {
        Some(from) => source
            .traverse()
            .enumerate()
            .any(|(index, item)| index > from && item == *value),
        None => source.traverse().any(|item| item == *value),
    }
}
