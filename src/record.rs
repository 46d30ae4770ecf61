//! Property-map elements.
//!
//! Operators like [`where_`](crate::where_), [`pluck`](crate::pluck) and
//! the key-selected comparisons look elements up by string key. [`Record`]
//! is that shape: anything that can surface a [`Value`] for a key. The std
//! string-keyed maps and [`serde_json`'s types](serde_json::Value) are
//! records out of the box; domain structs opt in by implementing
//! [`Record::field`] themselves.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// An element with named fields.
pub trait Record {
    /// Looks up a field, returning an owned value.
    ///
    /// `None` means the field is absent; what that implies (skip, error,
    /// no match) is each operator's contract.
    fn field(&self, key: &str) -> Option<Value>;

    /// Whether this element actually has record shape.
    ///
    /// Statically-shaped records are always records; dynamically-typed
    /// elements such as [`Value`] override this, and operators surface
    /// [`TypeMismatch`](crate::Error::TypeMismatch) for the impostors while
    /// traversing.
    fn is_record(&self) -> bool {
        true
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, key: &str) -> Option<Value> {
        (**self).field(key)
    }

    fn is_record(&self) -> bool {
        (**self).is_record()
    }
}

impl Record for Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|fields| fields.get(key)).cloned()
    }

    fn is_record(&self) -> bool {
        self.is_object()
    }
}

impl Record for serde_json::Map<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl<V> Record for HashMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned().map(Into::into)
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned().map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{Value, json};

    use super::Record;

    #[test]
    fn json_objects_are_records() {
        let play = json!({"title": "The Tempest", "year": 1611});

        assert!(play.is_record());
        assert_eq!(play.field("year"), Some(json!(1611)));
        assert_eq!(play.field("author"), None);
    }

    #[test]
    fn json_scalars_are_not() {
        assert!(!Value::from(42).is_record());
        assert!(!Value::Null.is_record());
    }

    #[test]
    fn typed_maps_are_records() {
        let ages: HashMap<String, i64> = [("moe".to_owned(), 40)].into_iter().collect();

        assert!(ages.is_record());
        assert_eq!(ages.field("moe"), Some(json!(40)));
    }
}
