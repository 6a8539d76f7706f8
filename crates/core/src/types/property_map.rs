use indexmap::map::Iter;
use indexmap::IndexMap;

use super::Scalar;

/// Flattened view of a JSON document: dotted path to scalar leaf.
///
/// Iteration follows first-insertion order, which is document order when the
/// map is produced by the flattener. Inserting an existing path replaces the
/// value in place and records the path as a collision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: IndexMap<String, Scalar>,
    collisions: Vec<String>,
}

impl PropertyMap {
    /// Create a new empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf, returning the value it replaced if the path was taken
    pub fn insert(&mut self, path: impl Into<String>, value: Scalar) -> Option<Scalar> {
        let path = path.into();
        match self.entries.get_mut(&path) {
            Some(existing) => {
                let previous = std::mem::replace(existing, value);
                self.collisions.push(path);
                Some(previous)
            }
            None => {
                self.entries.insert(path, value);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Scalar> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn iter(&self) -> Iter<'_, String, Scalar> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths written more than once, in the order the overwrites happened
    #[must_use]
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Scalar)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, Scalar)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (path, value) in iter {
            map.insert(path, value);
        }
        map
    }
}
