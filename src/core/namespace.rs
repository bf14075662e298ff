/*!

A `Namespace` is an append-only, uniqueness-enforcing mapping from names to entries that remembers insertion order.
Every symbol kind with unique names (sorts, predicates, functions, constants) is stored in one. Entries are addressed
either by name or by their index, which is their position in insertion order and never changes.

*/

use std::ops::Index;

use crate::abstractions::{HashMap, IString};

pub struct Namespace<T> {
  by_name: HashMap<IString, usize>,
  entries: Vec<T>,
}

impl<T> Default for Namespace<T> {
  fn default() -> Self {
    Namespace {
      by_name: HashMap::new(),
      entries: Vec::new(),
    }
  }
}

impl<T> Namespace<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<&T> {
    self.by_name
        .get(&IString::from(name))
        .map(|&index| &self.entries[index])
  }

  #[inline(always)]
  pub fn contains(&self, name: &str) -> bool {
    self.by_name.contains_key(&IString::from(name))
  }

  #[inline(always)]
  pub fn at(&self, index: usize) -> Option<&T> {
    self.entries.get(index)
  }

  pub fn first(&self) -> Option<&T> {
    self.entries.first()
  }

  /// Appends `entry` under `name`, returning its index. The caller is responsible for checking that `name` is
  /// fresh; inserting a name twice is a bug in the caller.
  pub fn insert(&mut self, name: IString, entry: T) -> usize {
    let index = self.entries.len();
    let previous = self.by_name.insert(name, index);
    debug_assert!(previous.is_none(), "namespace entry inserted twice");
    self.entries.push(entry);
    index
  }

  /// The index the next inserted entry will receive.
  #[inline(always)]
  pub fn next_index(&self) -> usize {
    self.entries.len()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterates over the entries in insertion order.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.entries.iter()
  }
}

impl<T> Index<usize> for Namespace<T> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.entries[index]
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preserves_insertion_order() {
    let mut namespace = Namespace::new();
    for name in ["truck", "airplane", "city"] {
      namespace.insert(IString::from(name), name.len());
    }

    assert_eq!(namespace.iter().copied().collect::<Vec<_>>(), vec![5, 8, 4]);
    assert_eq!(namespace.get("city"), Some(&4));
    assert_eq!(namespace[1], 8);
    assert_eq!(namespace.next_index(), 3);
  }

  #[test]
  fn absent_names() {
    let namespace: Namespace<u8> = Namespace::new();
    assert!(!namespace.contains("truck"));
    assert!(namespace.get("truck").is_none());
    assert!(namespace.at(0).is_none());
  }
}
