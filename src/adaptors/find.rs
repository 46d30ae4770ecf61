use crate::arity::Iteratee;
use crate::assert_source;
use crate::error::Error;
use crate::source::Source;

/// A stage holding at most the first matching element. Created by [`find`].
pub struct Find<I, P> {
    state: State<I, P>,
}

enum State<I, P> {
    Searching { iter: I, pred: P, index: usize },
    Done,
}

/// Yields the first element satisfying `pred`, then stops the traversal
/// permanently — no element beyond the match is pulled from the source.
///
/// No match is not an error: the result is simply empty. Extracting a value
/// out of an empty result is where [`Error::EmptyResult`] lives — see
/// [`Find::first`].
///
/// # Examples
///
/// ```
/// use seqops::{find, restartable, unary};
///
/// let matches: Vec<i64> = find(restartable(vec![1, 10, 100]), unary(|n: &i64| n % 10 == 0)).collect();
///
/// assert_eq!(matches, [10]);
/// ```
pub fn find<S, P>(source: S, pred: P) -> Find<S::Iter, P>
where
    S: Source,
    P: for<'a> Iteratee<&'a S::Item, Output = bool>,
{
    assert_source(Find {
        state: State::Searching {
            iter: source.traverse(),
            pred,
            index: 0,
        },
    })
}

impl<I, P> Find<I, P>
where
    I: Iterator,
    P: for<'a> Iteratee<&'a I::Item, Output = bool>,
{
    /// Extracts the matching element, failing with [`Error::EmptyResult`]
    /// if nothing matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqops::{Error, find, restartable, unary};
    ///
    /// let none = find(restartable(vec![1, 3, 5]), unary(|n: &i64| n % 2 == 0));
    ///
    /// assert_eq!(none.first(), Err(Error::EmptyResult));
    /// ```
    pub fn first(mut self) -> Result<I::Item, Error> {
        self.next().ok_or(Error::EmptyResult)
    }
}

impl<I, P> Iterator for Find<I, P>
where
    I: Iterator,
    P: for<'a> Iteratee<&'a I::Item, Output = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let State::Searching { iter, pred, index } = &mut self.state else {
            return None;
        };

        let found = loop {
            let Some(item) = iter.next() else {
                break None;
            };

            let position = *index;
            *index += 1;

            if pred.invoke(&item, position) {
                break Some(item);
            }
        };

        self.state = State::Done;
        found
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Searching { iter, .. } => {
                let upper = iter.size_hint().1.map_or(1, |upper| upper.min(1));
                (0, Some(upper))
            }
            State::Done => (0, Some(0)),
        }
    }
}

impl<I, P> Source for Find<I, P>
where
    Self: Iterator,
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

    #[inline]
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

impl<I, P> std::fmt::Debug for Find<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Searching { .. } => "searching",
            State::Done => "done",
        };

        f.debug_struct("Find").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, find, restartable, single_pass, unary};

    #[test]
    fn stops_at_the_match() {
        let mut checked = Vec::new();
        let found: Vec<i64> = find(
            restartable(vec![1, 10, 100]),
            unary(|n: &i64| {
                checked.push(*n);
                n % 10 == 0
            }),
        )
        .collect();

        assert_eq!(found, [10]);
        // The predicate never ran on 100.
        assert_eq!(checked, [1, 10]);
    }

    #[test]
    fn leaves_the_rest_of_a_shared_pass_untouched() {
        let mut nums = vec![1, 2, 3, 4].into_iter();

        let first_even = find(single_pass(&mut nums), unary(|n: &i64| n % 2 == 0)).first();

        assert_eq!(first_even, Ok(2));
        assert_eq!(nums.next(), Some(3));
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let none: Vec<i64> = find(restartable(vec![1, 3]), unary(|n: &i64| *n < 0)).collect();
        assert!(none.is_empty());

        let err = find(restartable(vec![1, 3]), unary(|n: &i64| *n < 0)).first();
        assert_eq!(err, Err(Error::EmptyResult));
    }
}
