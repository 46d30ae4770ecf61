//! Comparison-based aggregation: extrema and sorting.
//!
//! Two selection flavors exist side by side. [`max`]/[`min`] compare
//! elements by their natural order. The `_by` variants and [`sort_by`]
//! compare by a [`KeySpec`]: either a record key name or a key function,
//! both producing a [`Value`] so the two flavors share one comparison
//! domain, ordered by [`value_cmp`].

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::error::Error;
use crate::record::Record;
use crate::source::Source;

/// Total order over dynamic values.
///
/// Values of different shapes order by shape: null < booleans < numbers <
/// strings < arrays < objects. Within a shape: booleans false-first,
/// numbers by [`f64::total_cmp`], strings lexicographically, arrays and
/// objects element-wise (objects by sorted key, then value).
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    fn shape_rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => {
            for (x, y) in a.iter().zip(b) {
                let ordering = value_cmp(x, y);
                if ordering.is_ne() {
                    return ordering;
                }
            }

            a.len().cmp(&b.len())
        }
        (Value::Object(a), Value::Object(b)) => {
            for ((key_a, a), (key_b, b)) in a.iter().zip(b) {
                let ordering = key_a.cmp(key_b);
                if ordering.is_ne() {
                    return ordering;
                }

                let ordering = value_cmp(a, b);
                if ordering.is_ne() {
                    return ordering;
                }
            }

            a.len().cmp(&b.len())
        }
        _ => shape_rank(a).cmp(&shape_rank(b)),
    }
}

type KeyFn<'a, T> = Box<dyn FnMut(&T) -> Value + 'a>;

/// The `key` / `key_func` keyword pair for the key-selected operators.
///
/// Exactly one selection is honored per call: **when both are given, the
/// function wins** — a deliberate rule, applied uniformly by
/// [`max_by`], [`min_by`], [`sort_by`] and [`index_by`](crate::index_by).
/// An empty spec fails with [`Error::MissingKeySelector`]. Resolution
/// happens once per operator call.
///
/// A named key requires [`Record`] elements; looking it up can fail lazily
/// with [`Error::MissingKey`] (absent field) or [`Error::TypeMismatch`]
/// (element without record shape).
///
/// # Examples
///
/// ```
/// use seqops::{KeySpec, max_by, restartable};
/// use serde_json::json;
///
/// let stooges = vec![
///     json!({"name": "moe", "age": 40}),
///     json!({"name": "larry", "age": 50}),
///     json!({"name": "curly", "age": 60}),
/// ];
///
/// let oldest = max_by(restartable(stooges), KeySpec::key("age")).unwrap();
///
/// assert_eq!(oldest["name"], "curly");
/// ```
pub struct KeySpec<'a, T> {
    key: Option<&'a str>,
    key_func: Option<KeyFn<'a, T>>,
}

impl<'a, T> KeySpec<'a, T> {
    /// Selects by the value stored under a record key.
    pub fn key(name: &'a str) -> Self {
        Self {
            key: Some(name),
            key_func: None,
        }
    }

    /// Selects by a derived key.
    pub fn func(key_func: impl FnMut(&T) -> Value + 'a) -> Self {
        Self {
            key: None,
            key_func: Some(Box::new(key_func)),
        }
    }

    /// Both keywords filled in. The function wins; the key name is carried
    /// only for parity with call sites that pass both.
    pub fn key_and_func(name: &'a str, key_func: impl FnMut(&T) -> Value + 'a) -> Self {
        Self {
            key: Some(name),
            key_func: Some(Box::new(key_func)),
        }
    }

    pub(crate) fn resolve(self) -> Result<Selector<'a, T>, Error> {
        match (self.key_func, self.key) {
            (Some(key_func), _) => Ok(Selector::Func(key_func)),
            (None, Some(name)) => Ok(Selector::Key(name)),
            (None, None) => Err(Error::MissingKeySelector),
        }
    }
}

impl<T> fmt::Debug for KeySpec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySpec")
            .field("key", &self.key)
            .field("key_func", &self.key_func.is_some())
            .finish()
    }
}

pub(crate) enum Selector<'a, T> {
    Key(&'a str),
    Func(KeyFn<'a, T>),
}

impl<T: Record> Selector<'_, T> {
    pub(crate) fn key_of(&mut self, item: &T) -> Result<Value, Error> {
        match self {
            Selector::Key(name) => {
                if !item.is_record() {
                    return Err(Error::TypeMismatch {
                        expected: "record-shaped elements",
                    });
                }

                item.field(name).ok_or_else(|| Error::MissingKey {
                    key: (*name).to_owned(),
                })
            }
            Selector::Func(key_func) => Ok(key_func(item)),
        }
    }
}

/// The maximum element by natural order.
///
/// Fully consumes the source. Ties break toward the first occurrence in
/// traversal order; an empty source is [`Error::EmptySource`].
pub fn max<S>(source: S) -> Result<S::Item, Error>
where
    S: Source,
    S::Item: Ord,
{
    extremum(source, "max", Ordering::Greater)
}

/// The minimum element by natural order. See [`max`].
pub fn min<S>(source: S) -> Result<S::Item, Error>
where
    S: Source,
    S::Item: Ord,
{
    extremum(source, "min", Ordering::Less)
}

fn extremum<S>(source: S, operation: &'static str, wanted: Ordering) -> Result<S::Item, Error>
where
    S: Source,
    S::Item: Ord,
{
    let mut iter = source.traverse();
    let mut best = iter.next().ok_or(Error::EmptySource { operation })?;

    for item in iter {
        // Strict comparison keeps the first occurrence on ties.
        if item.cmp(&best) == wanted {
            best = item;
        }
    }

    Ok(best)
}

/// The maximum element by comparison key.
///
/// Fully consumes the source; key extraction errors surface here, at the
/// offending element. Ties break toward the first occurrence.
pub fn max_by<S>(source: S, spec: KeySpec<'_, S::Item>) -> Result<S::Item, Error>
where
    S: Source,
    S::Item: Record,
{
    extremum_by(source, "max", spec, Ordering::Greater)
}

/// The minimum element by comparison key. See [`max_by`].
pub fn min_by<S>(source: S, spec: KeySpec<'_, S::Item>) -> Result<S::Item, Error>
where
    S: Source,
    S::Item: Record,
{
    extremum_by(source, "min", spec, Ordering::Less)
}

fn extremum_by<S>(
    source: S,
    operation: &'static str,
    spec: KeySpec<'_, S::Item>,
    wanted: Ordering,
) -> Result<S::Item, Error>
where
    S: Source,
    S::Item: Record,
{
    let mut selector = spec.resolve()?;
    let mut iter = source.traverse();

    let first = iter.next().ok_or(Error::EmptySource { operation })?;
    let mut best_key = selector.key_of(&first)?;
    let mut best = first;

    for item in iter {
        let key = selector.key_of(&item)?;

        if value_cmp(&key, &best_key) == wanted {
            best_key = key;
            best = item;
        }
    }

    Ok(best)
}

/// Materializes the source into a vector sorted by comparison key.
///
/// The sort is stable: equal-key elements keep their original relative
/// order. `reverse` flips the comparator under the same stable sort, so
/// ties *still* keep their original order — descending output is not a
/// wholesale reversal of the ascending one.
///
/// # Examples
///
/// ```
/// use seqops::{KeySpec, restartable, sort_by};
/// use serde_json::json;
///
/// let stooges = vec![
///     json!({"name": "curly", "age": 60}),
///     json!({"name": "moe", "age": 40}),
///     json!({"name": "larry", "age": 50}),
/// ];
///
/// let by_age = sort_by(restartable(stooges), KeySpec::key("age"), false).unwrap();
///
/// assert_eq!(by_age[0]["name"], "moe");
/// assert_eq!(by_age[2]["name"], "curly");
/// ```
pub fn sort_by<S>(
    source: S,
    spec: KeySpec<'_, S::Item>,
    reverse: bool,
) -> Result<Vec<S::Item>, Error>
where
    S: Source,
    S::Item: Record,
{
    let mut selector = spec.resolve()?;

    let mut keyed = source
        .traverse()
        .map(|item| Ok((selector.key_of(&item)?, item)))
        .collect::<Result<Vec<_>, Error>>()?;

    if reverse {
        keyed.sort_by(|(a, _), (b, _)| value_cmp(b, a));
    } else {
        keyed.sort_by(|(a, _), (b, _)| value_cmp(a, b));
    }

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}
