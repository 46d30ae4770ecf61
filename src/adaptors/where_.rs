use serde_json::{Map, Value};

use crate::assert_source;
use crate::error::Error;
use crate::record::Record;
use crate::source::Source;

/// A stage that keeps records matching required field values. Created by
/// [`where_`].
pub struct Where<I> {
    iter: I,
    properties: Map<String, Value>,
}

/// A stage holding at most the first record matching required field
/// values. Created by [`find_where`].
pub struct FindWhere<I> {
    inner: Option<Where<I>>,
}

/// Yields the elements whose fields are a superset of `properties`.
///
/// `properties` must be a JSON object; anything else fails eagerly with
/// [`Error::TypeMismatch`]. Elements are checked lazily as the sequence is
/// traversed: an element without record shape yields an `Err` item instead
/// of a match, and traversal may continue past it on demand.
///
/// # Examples
///
/// ```
/// use seqops::{restartable, where_};
/// use serde_json::json;
///
/// let plays = vec![
///     json!({"title": "Cymbeline", "author": "Shakespeare", "year": 1611}),
///     json!({"title": "The Alchemist", "author": "Jonson", "year": 1610}),
///     json!({"title": "The Tempest", "author": "Shakespeare", "year": 1611}),
/// ];
///
/// let late_shakespeare: Vec<_> = where_(restartable(plays), json!({"author": "Shakespeare", "year": 1611}))
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(late_shakespeare.len(), 2);
/// ```
pub fn where_<S>(source: S, properties: Value) -> Result<Where<S::Iter>, Error>
where
    S: Source,
    S::Item: Record,
{
    let Value::Object(properties) = properties else {
        return Err(Error::TypeMismatch {
            expected: "an object of required field values",
        });
    };

    Ok(assert_source(Where {
        iter: source.traverse(),
        properties,
    }))
}

/// Yields the first element matching all of `properties`, then stops the
/// traversal permanently.
///
/// Same contracts as [`where_`] for the arguments, and as
/// [`find`](crate::find) for the empty case: no match is an empty result,
/// and [`FindWhere::first`] turns that into [`Error::EmptyResult`].
pub fn find_where<S>(source: S, properties: Value) -> Result<FindWhere<S::Iter>, Error>
where
    S: Source,
    S::Item: Record,
{
    Ok(assert_source(FindWhere {
        inner: Some(where_(source, properties)?),
    }))
}

impl<I> Iterator for Where<I>
where
    I: Iterator,
    I::Item: Record,
{
    type Item = Result<I::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;

            if !item.is_record() {
                return Some(Err(Error::TypeMismatch {
                    expected: "record-shaped elements",
                }));
            }

            let matches = self
                .properties
                .iter()
                .all(|(key, expected)| item.field(key).as_ref() == Some(expected));

            if matches {
                return Some(Ok(item));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I> Iterator for FindWhere<I>
where
    I: Iterator,
    I::Item: Record,
{
    type Item = Result<I::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.as_mut()?.next();
        self.inner = None;
        first
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(_) => (0, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl<I> FindWhere<I>
where
    I: Iterator,
    I::Item: Record,
{
    /// Extracts the matching element, failing with [`Error::EmptyResult`]
    /// if nothing matched.
    pub fn first(mut self) -> Result<I::Item, Error> {
        self.next().unwrap_or(Err(Error::EmptyResult))
    }
}

impl<I> Source for Where<I>
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

impl<I> Source for FindWhere<I>
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

impl<I: std::fmt::Debug> std::fmt::Debug for Where<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Where")
            .field("iter", &self.iter)
            .field("properties", &self.properties)
            .finish()
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for FindWhere<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindWhere").field("inner", &self.inner.is_some()).finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{Error, find_where, restartable, where_};

    fn plays() -> Vec<Value> {
        vec![
            json!({"title": "Cymbeline", "author": "Shakespeare", "year": 1611}),
            json!({"title": "The Alchemist", "author": "Jonson", "year": 1610}),
            json!({"title": "Volpone", "author": "Jonson", "year": 1606}),
            json!({"title": "The Tempest", "author": "Shakespeare", "year": 1611}),
            json!({"title": "King Lear", "author": "Shakespeare", "year": 1606}),
            json!({"title": "Doctor Faustus", "author": "Marlowe", "year": 1592}),
            json!({"title": "Macbeth", "author": "Shakespeare", "year": 1606}),
        ]
    }

    #[test]
    fn keeps_matching_records_in_order() {
        let matches: Vec<Value> = where_(
            restartable(plays()),
            json!({"author": "Shakespeare", "year": 1611}),
        )
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["title"], "Cymbeline");
        assert_eq!(matches[1]["title"], "The Tempest");
    }

    #[test]
    fn non_object_properties_fail_eagerly() {
        let err = where_(restartable(plays()), json!(1611)).unwrap_err();

        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: "an object of required field values"
            }
        );
    }

    #[test]
    fn non_record_elements_fail_lazily() {
        let mixed = vec![json!({"year": 1611}), json!("not a record")];
        let mut stage = where_(restartable(mixed), json!({"year": 1611})).unwrap();

        assert_eq!(stage.next(), Some(Ok(json!({"year": 1611}))));
        assert_eq!(
            stage.next(),
            Some(Err(Error::TypeMismatch {
                expected: "record-shaped elements"
            }))
        );
        assert_eq!(stage.next(), None);
    }

    #[test]
    fn find_where_yields_the_first_match_only() {
        let first = find_where(restartable(plays()), json!({"author": "Jonson"}))
            .unwrap()
            .first()
            .unwrap();

        assert_eq!(first["title"], "The Alchemist");

        let missing = find_where(restartable(plays()), json!({"author": "Webster"}))
            .unwrap()
            .first();
        assert_eq!(missing, Err(Error::EmptyResult));
    }
}
