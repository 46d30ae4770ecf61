//! The allow-list behind [`invoke`](crate::invoke).
//!
//! Resolving an operation from a string is only safe against an explicit
//! registry: a map from name to a callable the caller chose to expose.
//! Free-form evaluation of attacker-controlled names has no place here.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::Error;

/// Extra arguments forwarded to a registered operation on every element.
#[derive(Clone, Debug, Default)]
pub struct CallArgs {
    /// Positional arguments, in order.
    pub args: Vec<Value>,
    /// Keyword arguments by name.
    pub kwargs: Map<String, Value>,
}

impl CallArgs {
    /// No extra arguments.
    pub fn none() -> Self {
        Self::default()
    }

    /// Positional arguments only.
    pub fn positional(args: Vec<Value>) -> Self {
        Self {
            args,
            kwargs: Map::new(),
        }
    }

    /// Adds a keyword argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqops::CallArgs;
    ///
    /// let args = CallArgs::none().kwarg("reverse", false).kwarg("factor", 3);
    ///
    /// assert_eq!(args.kwargs["factor"], 3);
    /// ```
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }
}

pub(crate) type Operation<T, R> = Box<dyn Fn(T, &CallArgs) -> R>;

/// Named operations available to [`invoke`](crate::invoke).
///
/// # Examples
///
/// ```
/// use seqops::{CallArgs, Registry, invoke, restartable};
///
/// let mut registry = Registry::new();
/// registry.register("scale", |n: i64, args: &CallArgs| {
///     n * args.kwargs["factor"].as_i64().unwrap_or(1)
/// });
///
/// let scaled: Vec<i64> = invoke(
///     restartable(vec![1, 2, 3]),
///     &registry,
///     "scale",
///     CallArgs::none().kwarg("factor", 10),
/// )
/// .unwrap()
/// .collect();
///
/// assert_eq!(scaled, [10, 20, 30]);
/// ```
pub struct Registry<T, R> {
    operations: BTreeMap<String, Operation<T, R>>,
}

impl<T, R> Registry<T, R> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            operations: BTreeMap::new(),
        }
    }

    /// Registers a callable under a name, replacing any previous entry.
    ///
    /// The callable receives each element plus the call's [`CallArgs`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        operation: impl Fn(T, &CallArgs) -> R + 'static,
    ) -> &mut Self {
        self.operations.insert(name.into(), Box::new(operation));
        self
    }

    /// The registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Resolution happens once per `invoke` call, not per element.
    pub(crate) fn lookup(&self, name: &str) -> Result<&Operation<T, R>, Error> {
        self.operations
            .get(name)
            .ok_or_else(|| Error::UnresolvedOperation {
                name: name.to_owned(),
            })
    }
}

impl<T, R> Default for Registry<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> fmt::Debug for Registry<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}
