//! Variable assignments for parametrized circuits.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A mapping from variable names to real values.
///
/// Used to resolve symbolic [`Parameter`](crate::Parameter)s when a circuit is
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: FxHashMap<String, f64>,
}

impl Variables {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this assignment with `name` bound to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Check whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (name, value) in iter {
            variables.insert(name, value);
        }
        variables
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Variables {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
