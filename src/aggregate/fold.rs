use crate::error::Error;
use crate::source::Source;

/// Left fold with an explicit initial accumulator.
///
/// The accumulator callback is fixed at `(accumulator, value)` — there is
/// no index variant. Folding an empty source returns `init` unchanged.
///
/// # Examples
///
/// ```
/// use seqops::{fold, restartable};
///
/// assert_eq!(fold(restartable(vec![1, 2, 3]), 0, |sum, n| sum + n), 6);
/// assert_eq!(fold(restartable(Vec::<i64>::new()), 0, |sum, n| sum + n), 0);
/// ```
pub fn fold<S, A, F>(source: S, init: A, mut f: F) -> A
where
    S: Source,
    F: FnMut(A, S::Item) -> A,
{
    let mut accumulator = init;

    for item in source.traverse() {
        accumulator = f(accumulator, item);
    }

    accumulator
}

/// Left fold seeded from the first element.
///
/// The first element becomes the accumulator and folding starts from the
/// second; an empty source fails with [`Error::EmptyReduce`], since there
/// is nothing to seed from.
///
/// # Examples
///
/// ```
/// use seqops::{Error, reduce, restartable};
///
/// assert_eq!(reduce(restartable(vec![1, 2, 3]), |sum, n| sum + n), Ok(6));
/// assert_eq!(reduce(restartable(Vec::<i64>::new()), |sum, n| sum + n), Err(Error::EmptyReduce));
/// ```
pub fn reduce<S, F>(source: S, mut f: F) -> Result<S::Item, Error>
where
    S: Source,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut iter = source.traverse();
    let mut accumulator = iter.next().ok_or(Error::EmptyReduce)?;

    for item in iter {
        accumulator = f(accumulator, item);
    }

    Ok(accumulator)
}

/// Right fold — unsupported.
///
/// A right fold needs the traversal reversed, and a lazy one-shot traversal
/// cannot be; this always fails with [`Error::NotSupported`] rather than
/// materializing behind the caller's back. Callers who do want the
/// materializing behavior can collect into a `Vec`, reverse it, and
/// [`fold`] that.
pub fn reduce_right<S, F>(_source: S, _f: F) -> Result<S::Item, Error>
where
    S: Source,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Err(Error::NotSupported {
        operation: "reduce_right",
    })
}

#[cfg(test)]
mod tests {
    use super::{fold, reduce, reduce_right};
    use crate::{Error, restartable, single_pass};

    #[test]
    fn fold_runs_left_to_right() {
        let concatenated = fold(
            restartable(vec!["a", "b", "c"]),
            String::new(),
            |acc, part| acc + part,
        );

        assert_eq!(concatenated, "abc");
    }

    #[test]
    fn reduce_seeds_from_the_first_element() {
        let mut steps = Vec::new();

        let result = reduce(single_pass(vec![1, 2, 3]), |acc, n| {
            steps.push((acc, n));
            acc + n
        });

        assert_eq!(result, Ok(6));
        // The callback never saw the seed element on its own.
        assert_eq!(steps, [(1, 2), (3, 3)]);
    }

    #[test]
    fn reduce_right_is_refused() {
        assert_eq!(
            reduce_right(restartable(vec![1, 2, 3]), |acc, n| acc - n),
            Err(Error::NotSupported {
                operation: "reduce_right"
            })
        );
    }
}
