//! Named registries of problems and heuristics.
//!
//! A registry maps identifiers to typed handles. Identifiers are resolved once,
//! when the [`ConfigSpace`](crate::ConfigSpace) is built; afterwards the driver
//! only passes the handles around.

use std::collections::HashMap;

/// A value together with the identifier it was selected by.
#[derive(Debug, Clone, PartialEq)]
pub struct Named<T> {
    name: String,
    value: T,
}

impl<T> Named<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Insertion-ordered mapping from identifier to handle.
///
/// # Example
///
/// ```
/// use searchbench_core::Registry;
///
/// let mut registry = Registry::new();
/// registry.register("h0", 0u32);
/// registry.register("h_edist", 1u32);
///
/// assert_eq!(registry.get("h_edist"), Some(&1));
/// assert_eq!(registry.names().collect::<Vec<_>>(), vec!["h0", "h_edist"]);
/// ```
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<Named<T>>,
    index: HashMap<String, usize>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a handle; an existing entry with the same name is replaced in place.
    pub fn register(&mut self, name: impl Into<String>, value: T) -> &mut Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i] = Named::new(name, value),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(Named::new(name, value));
            }
        }
        self
    }

    /// Moves every entry of `other` into this registry.
    pub fn extend(&mut self, other: Registry<T>) {
        for entry in other.entries {
            self.register(entry.name, entry.value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.entries[i].value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Named<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Registry<T> {
    /// Looks up `name` and returns an owned, named copy of its handle.
    pub fn resolve(&self, name: &str) -> Option<Named<T>> {
        self.get(name).map(|v| Named::new(name, v.clone()))
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, T> FromIterator<(N, T)> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for (name, value) in iter {
            registry.register(name, value);
        }
        registry
    }
}
