//! Indexed Set
//!
//! An append-only collection of distinct elements where each element is
//! assigned a stable index the first time it is added. Serializers use it to
//! build reference tables: the first occurrence of a value gets written out,
//! later occurrences are written as the index of the first.
//!
//! ## Equality
//!
//! Membership is decided by an equality predicate. [`IndexedSet::new`] uses
//! `PartialEq`; [`IndexedSet::with_equality`] accepts any `Fn(&T, &T) -> bool`,
//! e.g. pointer identity for shared references or a field-wise comparison.
//!
//! ## Complexity
//!
//! | Operation | Time |
//! |-----------|------|
//! | `get` | O(1) |
//! | `index_of` / `has` | O(n) |
//! | `add_and_get_index` | O(n) |
//!
//! Lookups are linear scans. The set is meant for small tables where
//! insertion order and index stability matter more than lookup speed, and
//! where the equality rule may not be hashable.

use std::fmt;

fn default_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// Ordered set of distinct elements with stable, contiguous indices
#[derive(Clone)]
pub struct IndexedSet<T, F = fn(&T, &T) -> bool> {
    items: Vec<T>,
    eq: F,
}

impl<T: PartialEq> IndexedSet<T> {
    /// Create an empty set that compares elements with `==`
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            eq: default_eq::<T>,
        }
    }
}

impl<T, F> IndexedSet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty set with a custom equality predicate
    ///
    /// The predicate is called as `eq(stored, candidate)`.
    ///
    /// # Examples
    /// ```
    /// use entities_utilities::IndexedSet;
    ///
    /// let mut set = IndexedSet::with_equality(|a: &String, b: &String| {
    ///     a.eq_ignore_ascii_case(b)
    /// });
    /// assert_eq!(set.add_and_get_index("Key".to_string()), 0);
    /// assert_eq!(set.add_and_get_index("KEY".to_string()), 0);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn with_equality(eq: F) -> Self {
        Self {
            items: Vec::new(),
            eq,
        }
    }

    /// Get the element stored at `index`
    ///
    /// # Returns
    /// * `Some(element)` - If `index < len()`
    /// * `None` - Otherwise
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Find the index of the first stored element equal to `elem`
    ///
    /// # Returns
    /// * `Some(index)` - If an equal element is stored
    /// * `None` - If no element matches
    pub fn index_of(&self, elem: &T) -> Option<usize> {
        self.items.iter().position(|stored| (self.eq)(stored, elem))
    }

    /// Check whether an equal element is stored
    pub fn has(&self, elem: &T) -> bool {
        self.index_of(elem).is_some()
    }

    /// Add an element and return its index
    ///
    /// If an equal element is already stored its index is returned and the
    /// set is left untouched. Otherwise `elem` is appended and receives the
    /// next index, which is the previous length.
    ///
    /// # Examples
    /// ```
    /// use entities_utilities::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// assert_eq!(set.add_and_get_index("a"), 0);
    /// assert_eq!(set.add_and_get_index("b"), 1);
    /// assert_eq!(set.add_and_get_index("a"), 0);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add_and_get_index(&mut self, elem: T) -> usize {
        if let Some(index) = self.index_of(&elem) {
            return index;
        }
        self.items.push(elem);
        self.items.len() - 1
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice; position equals index
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the set and return its elements in index order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> Default for IndexedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for IndexedSet<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedSet")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T, F> Extend<T> for IndexedSet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add_and_get_index(elem);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for IndexedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T, F> IntoIterator for &'a IndexedSet<T, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
