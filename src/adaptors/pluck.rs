use serde_json::Value;

use crate::assert_source;
use crate::error::Error;
use crate::record::Record;
use crate::source::{Source, exact_len};

/// A stage that extracts one field from each record. Created by [`pluck`].
pub struct Pluck<I> {
    iter: I,
    key: String,
}

/// Yields `element[key]` for each element.
///
/// The common map shorthand for pulling one property out of a sequence of
/// records. Checks are lazy: a non-record element yields
/// [`Error::TypeMismatch`], an absent key [`Error::MissingKey`] — absence
/// is an error here, not a `null`.
///
/// # Examples
///
/// ```
/// use seqops::{pluck, restartable};
/// use serde_json::json;
///
/// let stooges = vec![
///     json!({"name": "moe", "age": 40}),
///     json!({"name": "larry", "age": 50}),
///     json!({"name": "curly", "age": 60}),
/// ];
///
/// let names: Vec<_> = pluck(restartable(stooges), "name").collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(names, [json!("moe"), json!("larry"), json!("curly")]);
/// ```
pub fn pluck<S>(source: S, key: impl Into<String>) -> Pluck<S::Iter>
where
    S: Source,
    S::Item: Record,
{
    assert_source(Pluck {
        iter: source.traverse(),
        key: key.into(),
    })
}

impl<I> Iterator for Pluck<I>
where
    I: Iterator,
    I::Item: Record,
{
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;

        if !item.is_record() {
            return Some(Err(Error::TypeMismatch {
                expected: "record-shaped elements",
            }));
        }

        Some(item.field(&self.key).ok_or_else(|| Error::MissingKey {
            key: self.key.clone(),
        }))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> Source for Pluck<I>
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

    fn len_hint(&self) -> Option<usize> {
        exact_len(self.size_hint())
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for Pluck<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pluck")
            .field("iter", &self.iter)
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Error, pluck, restartable};

    #[test]
    fn absent_keys_are_errors() {
        let records = vec![json!({"name": "moe"}), json!({"alias": "mo"})];
        let mut names = pluck(restartable(records), "name");

        assert_eq!(names.next(), Some(Ok(json!("moe"))));
        assert_eq!(
            names.next(),
            Some(Err(Error::MissingKey {
                key: "name".to_owned()
            }))
        );
    }

    #[test]
    fn typed_maps_pluck_too() {
        use std::collections::BTreeMap;

        let rows: Vec<BTreeMap<String, i64>> = vec![
            [("age".to_owned(), 40)].into_iter().collect(),
            [("age".to_owned(), 50)].into_iter().collect(),
        ];

        let ages: Vec<_> = pluck(restartable(rows), "age").collect::<Result<_, _>>().unwrap();

        assert_eq!(ages, [json!(40), json!(50)]);
    }
}
