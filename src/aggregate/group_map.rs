use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// An insertion-ordered map.
///
/// [`group_by`](crate::group_by), [`count_by`](crate::count_by) and
/// [`index_by`](crate::index_by) promise first-seen key order, which the
/// std maps cannot give; this keeps entries in arrival order next to a
/// position index for lookups. Re-inserting a key replaces its value in
/// place — the key keeps its original position.
///
/// # Examples
///
/// ```
/// use seqops::GroupMap;
///
/// let mut counts = GroupMap::new();
/// counts.insert("odd", 3);
/// counts.insert("even", 2);
///
/// assert_eq!(counts.get("odd"), Some(&3));
/// assert_eq!(counts.keys().copied().collect::<Vec<_>>(), ["odd", "even"]);
/// ```
pub struct GroupMap<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> GroupMap<K, V> {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys have been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> GroupMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Looks a value up by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Inserts a value, returning the replaced one if the key was present.
    ///
    /// Last write wins for the value; the key keeps its first-seen
    /// position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub(crate) fn entry_mut(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.positions.insert(key.clone(), position);
                self.entries.push((key, default()));
                position
            }
        };

        &mut self.entries[position].1
    }
}

impl<K, V> Default for GroupMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for GroupMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // Order matters; the position index is derived state.
        self.entries == other.entries
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for GroupMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<K, V> IntoIterator for GroupMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
