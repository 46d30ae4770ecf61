use crate::assert_source;
use crate::error::Error;
use crate::registry::{CallArgs, Operation, Registry};
use crate::source::{Source, exact_len};

/// A stage that applies a registered operation to each element. Created by
/// [`invoke`].
pub struct Invoke<'r, I: Iterator, R> {
    iter: I,
    operation: &'r Operation<I::Item, R>,
    args: CallArgs,
}

/// Resolves `name` against the registry and lazily applies the named
/// operation to each element, forwarding `args` on every call.
///
/// Name resolution is eager — an unregistered name fails with
/// [`Error::UnresolvedOperation`] before anything is traversed — and
/// happens once per call, never per element. See
/// [`Registry`] for why resolution is restricted to an allow-list.
///
/// # Examples
///
/// ```
/// use seqops::{CallArgs, Registry, invoke, restartable};
///
/// let mut registry = Registry::new();
/// registry.register("sorted", |mut row: Vec<i64>, _: &CallArgs| {
///     row.sort();
///     row
/// });
///
/// let sorted: Vec<Vec<i64>> = invoke(
///     restartable(vec![vec![5, 1, 7], vec![3, 2, 1]]),
///     &registry,
///     "sorted",
///     CallArgs::none(),
/// )
/// .unwrap()
/// .collect();
///
/// assert_eq!(sorted, [vec![1, 5, 7], vec![1, 2, 3]]);
/// ```
pub fn invoke<'r, S, R>(
    source: S,
    registry: &'r Registry<S::Item, R>,
    name: &str,
    args: CallArgs,
) -> Result<Invoke<'r, S::Iter, R>, Error>
where
    S: Source,
{
    let operation = registry.lookup(name)?;

    Ok(assert_source(Invoke {
        iter: source.traverse(),
        operation,
        args,
    }))
}

impl<I, R> Iterator for Invoke<'_, I, R>
where
    I: Iterator,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some((self.operation)(item, &self.args))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, R> Source for Invoke<'_, I, R>
where
    Self: Iterator,
    I: Iterator,
{
    type Item = <Self as Iterator>::Item;
    type Iter = Self;

    #[inline]
    fn traverse(self) -> Self {
        self
    }

    #[inline]
    fn fork(&self) -> Option<Self> {
        None
    }

    #[inline]
    fn is_restartable(&self) -> bool {
        false
    }

    fn len_hint(&self) -> Option<usize> {
        exact_len(self.iter.size_hint())
    }
}

impl<I: Iterator + std::fmt::Debug, R> std::fmt::Debug for Invoke<'_, I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invoke")
            .field("iter", &self.iter)
            .field("args", &self.args)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{CallArgs, Error, Registry, invoke, restartable};

    #[test]
    fn forwards_call_arguments_to_every_element() {
        let mut registry = Registry::new();
        registry.register("scale", |n: i64, args: &CallArgs| {
            n * args.kwargs["factor"].as_i64().unwrap_or(1)
        });

        let scaled: Vec<i64> = invoke(
            restartable(vec![1, 2, 3]),
            &registry,
            "scale",
            CallArgs::none().kwarg("factor", json!(4)),
        )
        .unwrap()
        .collect();

        assert_eq!(scaled, [4, 8, 12]);
    }

    #[test]
    fn unknown_names_fail_before_traversal() {
        let registry: Registry<i64, i64> = Registry::new();

        let err = invoke(restartable(vec![1]), &registry, "scale", CallArgs::none()).unwrap_err();

        assert_eq!(
            err,
            Error::UnresolvedOperation {
                name: "scale".to_owned()
            }
        );
    }
}
