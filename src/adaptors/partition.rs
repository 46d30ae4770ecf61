use crate::arity::Iteratee;
use crate::source::Source;

/// One of the two views produced by [`partition`].
pub struct Partition<I: Iterator, P> {
    state: State<I, P>,
}

enum State<I: Iterator, P> {
    Streaming {
        iter: I,
        pred: P,
        keep: bool,
        index: usize,
    },
    Buffered(std::vec::IntoIter<I::Item>),
}

/// Splits one source into `(matches, non_matches)` under `pred`.
///
/// The strategy follows the source's capability:
///
/// - **Restartable** — each view lazily re-applies the predicate against
///   its own fresh traversal, so the pair is exactly
///   `(select(source, pred), reject(source, pred))` and both views are
///   safe to consume fully, independently, in any order.
/// - **Single-pass** — the one available pass is taken here, at call time,
///   and split into two buffered views. That is the only way the pair can
///   be consistent and reusable when the underlying elements are
///   observable once; the predicate runs once per element during that
///   pass.
///
/// # Examples
///
/// ```
/// use seqops::{partition, restartable, unary};
///
/// let (evens, odds) = partition(restartable(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]), unary(|n: &i64| n % 2 == 0));
///
/// assert_eq!(evens.collect::<Vec<_>>(), [2, 4, 6, 8]);
/// assert_eq!(odds.collect::<Vec<_>>(), [1, 3, 5, 7, 9]);
/// ```
pub fn partition<S, P>(source: S, pred: P) -> (Partition<S::Iter, P>, Partition<S::Iter, P>)
where
    S: Source,
    P: for<'a> Iteratee<&'a S::Item, Output = bool> + Clone,
{
    if let Some(reject_pass) = source.fork() {
        let select_pass = source.traverse();

        (
            Partition {
                state: State::Streaming {
                    iter: select_pass,
                    pred: pred.clone(),
                    keep: true,
                    index: 0,
                },
            },
            Partition {
                state: State::Streaming {
                    iter: reject_pass,
                    pred,
                    keep: false,
                    index: 0,
                },
            },
        )
    } else {
        let mut pred = pred;
        let mut matches = Vec::new();
        let mut non_matches = Vec::new();

        for (index, item) in source.traverse().enumerate() {
            if pred.invoke(&item, index) {
                matches.push(item);
            } else {
                non_matches.push(item);
            }
        }

        (
            Partition {
                state: State::Buffered(matches.into_iter()),
            },
            Partition {
                state: State::Buffered(non_matches.into_iter()),
            },
        )
    }
}

impl<I, P> Iterator for Partition<I, P>
where
    I: Iterator,
    P: for<'a> Iteratee<&'a I::Item, Output = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Streaming {
                iter,
                pred,
                keep,
                index,
            } => loop {
                let item = iter.next()?;
                let position = *index;
                *index += 1;

                if pred.invoke(&item, position) == *keep {
                    return Some(item);
                }
            },
            State::Buffered(items) => items.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Streaming { iter, .. } => (0, iter.size_hint().1),
            State::Buffered(items) => items.size_hint(),
        }
    }
}

impl<I, P> Source for Partition<I, P>
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
        match &self.state {
            State::Streaming { .. } => None,
            State::Buffered(items) => Some(items.len()),
        }
    }
}

impl<I: Iterator, P> std::fmt::Debug for Partition<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Streaming { .. } => "streaming",
            State::Buffered(_) => "buffered",
        };

        f.debug_struct("Partition").field("state", &state).finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::{Source, partition, single_pass, unary};

    #[test]
    fn single_pass_sources_are_split_once_and_reusably() {
        let nums = vec![1, 2, 3, 4, 5].into_iter();
        let (evens, odds) = partition(single_pass(nums), unary(|n: &i64| n % 2 == 0));

        // Both views are consistent even though the source was one-shot,
        // and order of consumption does not matter.
        assert_eq!(odds.len_hint(), Some(3));
        assert_eq!(odds.collect::<Vec<_>>(), [1, 3, 5]);
        assert_eq!(evens.collect::<Vec<_>>(), [2, 4]);
    }

    #[test]
    fn restartable_views_are_independent() {
        let source = crate::restartable(vec![1, 2, 3, 4]);
        let (evens, odds) = partition(source, unary(|n: &i64| n % 2 == 0));

        // Consuming one view does not starve the other.
        assert_eq!(evens.collect::<Vec<_>>(), [2, 4]);
        assert_eq!(odds.collect::<Vec<_>>(), [1, 3]);
    }
}
