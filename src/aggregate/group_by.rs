use std::hash::Hash;

use serde_json::Value;

use crate::arity::{self, AritySet, Iteratee};
use crate::cmp::KeySpec;
use crate::error::Error;
use crate::record::Record;
use crate::source::Source;

use super::GroupMap;

/// Groups elements by the key `key_fn` computes for each.
///
/// Fully materializes the source. Keys appear in first-seen order and each
/// group keeps its elements in traversal order. The key function is
/// unary-only; an indexed callback fails eagerly with
/// [`Error::UnsupportedArity`].
///
/// # Examples
///
/// ```
/// use seqops::{group_by, restartable, unary};
///
/// let groups = group_by(restartable(vec![1.3, 2.1, 2.4]), unary(|n: &f64| n.floor() as i64)).unwrap();
///
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2]);
/// assert_eq!(groups.get(&1), Some(&vec![1.3]));
/// assert_eq!(groups.get(&2), Some(&vec![2.1, 2.4]));
/// ```
pub fn group_by<S, P, K>(source: S, key_fn: P) -> Result<GroupMap<K, Vec<S::Item>>, Error>
where
    S: Source,
    K: Hash + Eq + Clone,
    P: for<'a> Iteratee<&'a S::Item, Output = K>,
{
    arity::resolve(&key_fn, AritySet::UNARY, "group_by")?;

    let mut key_fn = key_fn;
    let mut groups = GroupMap::new();

    for (index, item) in source.traverse().enumerate() {
        let key = key_fn.invoke(&item, index);
        groups.entry_mut(key, Vec::new).push(item);
    }

    Ok(groups)
}

/// Like [`group_by`], but keeps only how many elements landed in each
/// group.
///
/// # Examples
///
/// ```
/// use seqops::{count_by, restartable, unary};
///
/// let counts = count_by(restartable(vec![1, 2, 3, 4, 5]), unary(|n: &i64| {
///     if n % 2 == 0 { "even" } else { "odd" }
/// }))
/// .unwrap();
///
/// assert_eq!(counts.get("odd"), Some(&3));
/// assert_eq!(counts.get("even"), Some(&2));
/// ```
pub fn count_by<S, P, K>(source: S, key_fn: P) -> Result<GroupMap<K, usize>, Error>
where
    S: Source,
    K: Hash + Eq + Clone,
    P: for<'a> Iteratee<&'a S::Item, Output = K>,
{
    arity::resolve(&key_fn, AritySet::UNARY, "count_by")?;

    let mut key_fn = key_fn;
    let mut counts = GroupMap::new();

    for (index, item) in source.traverse().enumerate() {
        let key = key_fn.invoke(&item, index);
        *counts.entry_mut(key, || 0) += 1;
    }

    Ok(counts)
}

/// Indexes elements by a computed key: one element per key, last write
/// wins.
///
/// Fully materializes the source. The key comes from a [`KeySpec`] — the
/// `key`/`key_func` pair with the usual function-wins rule — and is
/// rendered to a string: string keys verbatim, anything else in its JSON
/// form. An empty spec fails eagerly with [`Error::MissingKeySelector`].
///
/// # Examples
///
/// ```
/// use seqops::{KeySpec, index_by, restartable};
/// use serde_json::json;
///
/// let stooges = vec![
///     json!({"name": "moe", "age": 40}),
///     json!({"name": "larry", "age": 50}),
/// ];
///
/// let by_age = index_by(restartable(stooges), KeySpec::key("age")).unwrap();
///
/// assert_eq!(by_age.get("40").unwrap()["name"], "moe");
/// assert_eq!(by_age.get("50").unwrap()["name"], "larry");
/// ```
pub fn index_by<S>(
    source: S,
    spec: KeySpec<'_, S::Item>,
) -> Result<GroupMap<String, S::Item>, Error>
where
    S: Source,
    S::Item: Record,
{
    let mut selector = spec.resolve()?;
    let mut indexed = GroupMap::new();

    for item in source.traverse() {
        let key = render_key(&selector.key_of(&item)?);
        indexed.insert(key, item);
    }

    Ok(indexed)
}

fn render_key(key: &Value) -> String {
    match key {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
