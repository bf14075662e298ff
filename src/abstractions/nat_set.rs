/*!

A `NatSet` is a set of small natural numbers backed by a bit vector. Promotion sets are `NatSet`s of sort indices, so
membership tests during subtype queries are a single bit lookup and extending a closure is a word-wise union.

*/

use std::fmt::{Debug, Formatter};
use bit_set::BitSet;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct NatSet(BitSet);

impl NatSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `value`, returning `true` if it was not already present.
  #[inline(always)]
  pub fn insert(&mut self, value: usize) -> bool {
    self.0.insert(value)
  }

  #[inline(always)]
  pub fn contains(&self, value: usize) -> bool {
    self.0.contains(value)
  }

  /// Adds every member of `other` to `self`.
  #[inline(always)]
  pub fn union_in_place(&mut self, other: &NatSet) {
    self.0.union_with(&other.0);
  }

  /// Is every member of `self` also a member of `other`?
  pub fn is_subset(&self, other: &NatSet) -> bool {
    self.0.is_subset(&other.0)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterates over the members in increasing order.
  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter()
  }
}

impl FromIterator<usize> for NatSet {
  fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
    NatSet(iter.into_iter().collect())
  }
}

impl Debug for NatSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn union_and_membership() {
    let mut ancestors: NatSet = [0usize, 1].into_iter().collect();
    let other: NatSet = [1usize, 5].into_iter().collect();

    assert!(!ancestors.contains(5));
    ancestors.union_in_place(&other);
    assert!(ancestors.contains(5));
    assert_eq!(ancestors.iter().collect::<Vec<_>>(), vec![0, 1, 5]);
    assert!(other.is_subset(&ancestors));
    assert!(!ancestors.is_subset(&other));
  }

  #[test]
  fn insert_reports_novelty() {
    let mut set = NatSet::new();
    assert!(set.is_empty());
    assert!(set.insert(3));
    assert!(!set.insert(3));
    assert_eq!(set.len(), 1);
  }
}
