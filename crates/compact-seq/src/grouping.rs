//! Grouping by a derived key.
//!
//! Elements are mapped to a key, partitioned into one list per key, and the
//! partition is then inspected through its [`GroupShape`].

use std::hash::Hash;

use hashbrown::HashMap;

use crate::types::GroupShape;

/// Elements partitioned by key, in first-seen key order.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<T>)>,
}

impl<K, T> Groups<K, T>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Adds an element under `key`.
    pub fn insert(&mut self, key: K, item: T) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(item),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![item]));
            }
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if nothing has been grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Elements grouped under `key`.
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Iterates over `(key, elements)` in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// The multiset of group sizes.
    pub fn shape(&self) -> GroupShape {
        GroupShape::from_sizes(self.groups.iter().map(|(_, v)| v.len()))
    }
}

impl<K, T> Default for Groups<K, T>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Partitions `items` by the key `key_fn` derives from each of them.
///
/// # Examples
///
/// ```rust
/// use compact_seq::{group_by_key, GroupShape};
///
/// let votes = ["Yes", "No", "Yes", "Yes", "No"];
/// let groups = group_by_key(votes, |v| *v);
///
/// assert_eq!(groups.get(&"Yes").map(|g| g.len()), Some(3));
/// assert_eq!(groups.shape(), GroupShape::full_house());
/// ```
pub fn group_by_key<I, K, F>(items: I, mut key_fn: F) -> Groups<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut groups = Groups::new();
    for item in items {
        let key = key_fn(&item);
        groups.insert(key, item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let pets = ["Dog", "Cat", "Rabbit", "Dog", "Dog", "Cat"];
        let groups = group_by_key(pets, |p| *p);
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["Dog", "Cat", "Rabbit"]);
        assert_eq!(groups.get(&"Dog"), Some(&["Dog", "Dog", "Dog"][..]));
    }

    #[test]
    fn test_shape_ignores_keys() {
        let a = group_by_key([1, 1, 2], |n| *n);
        let b = group_by_key([7, 9, 9], |n| *n);
        assert_eq!(a.shape(), b.shape());
        assert_eq!(a.shape().sizes(), &[2, 1]);
    }

    #[test]
    fn test_derived_key() {
        let words = ["rat", "tar", "art", "star"];
        let groups = group_by_key(words, |w| {
            let mut chars: Vec<char> = w.chars().collect();
            chars.sort_unstable();
            chars.into_iter().collect::<String>()
        });
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get(&"art".to_string()).map(|g| g.len()), Some(3));
    }

    #[test]
    fn test_empty() {
        let groups = group_by_key(Vec::<u8>::new(), |n| *n);
        assert!(groups.is_empty());
        assert_eq!(groups.shape(), GroupShape::default());
        assert_eq!(groups.get(&0), None);
    }
}
