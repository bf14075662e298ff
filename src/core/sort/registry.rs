/*!

The `SortRegistry` owns the sorts of a language together with the hierarchy graph over them and the closure of that
graph.

The graph is stored twice: as a set of `(child, parent)` edges, which makes duplicate edges a no-op, and as per-sort
parent lists, which preserve declaration order for display. The closure is stored as one `NatSet` of strict
ancestors per sort, the sort's *promotion set*.

## Maintaining the Closure

A new sort has no descendants, so its promotion set is just the union of `promotion_set(p) ∪ {p}` over its parents,
and nothing else changes. Adding an edge `child ⊑ parent` between existing sorts is the only operation that can
change existing promotion sets: every sort `s` with `s == child` or `child ∈ promotion_set(s)` gains
`promotion_set(parent) ∪ {parent}`. The same edge would close a cycle exactly when `parent == child` or
`child ∈ promotion_set(parent)`, which is checked before anything is mutated.

*/

use std::rc::Rc;

use crate::{
  abstractions::{HashSet, IString, NatSet},
  api::{
    error::{InvalidUse, LanguageError, LanguageResult},
    language::LanguageId,
  },
  core::{
    namespace::Namespace,
    sort::{
      interval::Interval,
      sort::{RcSort, Sort, SortIndex},
    },
  },
  warning,
};

pub struct SortRegistry {
  language  : LanguageId,
  sorts     : Namespace<RcSort>,
  /// Direct parents of each sort, in declaration order.
  parents   : Vec<Vec<SortIndex>>,
  edges     : HashSet<(SortIndex, SortIndex)>,
  /// Strict ancestors of each sort.
  promotions: Vec<NatSet>,
}

impl SortRegistry {
  pub fn new(language: LanguageId) -> SortRegistry {
    SortRegistry {
      language,
      sorts     : Namespace::new(),
      parents   : Vec::new(),
      edges     : HashSet::new(),
      promotions: Vec::new(),
    }
  }

  /// Registers a new sort under the given parents. An empty parent list means `Object`, except for the very first
  /// sort of a registry, which is `Object` itself.
  pub fn register_sort(
    &mut self,
    name    : IString,
    parents : &[RcSort],
    builtin : bool,
    interval: Option<Interval>
  ) -> LanguageResult<RcSort>
  {
    if let Some(existing) = self.sorts.get(&name) {
      return Err(LanguageError::DuplicateSort { existing: existing.clone() });
    }
    for parent in parents {
      self.check_owned(&name, parent)?;
    }

    let parents: Vec<SortIndex> = match (parents.is_empty(), self.sorts.first()) {
      (true, Some(object)) => vec![object.index],
      _                    => parents.iter().map(|p| p.index).collect(),
    };

    Ok(self.insert_sort(name, &parents, builtin, interval))
  }

  /// Inserts a sort without validation. Callers guarantee `name` is fresh and `parents` are indices of this
  /// registry.
  pub(crate) fn insert_sort(
    &mut self,
    name    : IString,
    parents : &[SortIndex],
    builtin : bool,
    interval: Option<Interval>
  ) -> RcSort
  {
    let index = self.sorts.len();
    let sort  = Rc::new(Sort::new(name.clone(), index, self.language, builtin, interval));

    let mut promotion_set = NatSet::new();
    let mut parent_list   = Vec::with_capacity(parents.len());
    for &parent in parents {
      if self.edges.insert((index, parent)) {
        parent_list.push(parent);
      }
      promotion_set.insert(parent);
      promotion_set.union_in_place(&self.promotions[parent]);
    }

    #[cfg(feature = "trace_closure")]
    crate::trace!(5, "promotion set of new sort {} is {:?}", name, promotion_set);

    self.parents.push(parent_list);
    self.promotions.push(promotion_set);
    self.sorts.insert(name, sort.clone());

    sort
  }

  /// Adds the edge `child ⊑ parent` between two existing sorts, extending the closure of `child` and of every
  /// descendant of `child`. Re-adding an existing edge has no effect.
  pub fn set_parent(&mut self, child: &RcSort, parent: &RcSort) -> LanguageResult<()> {
    self.check_owned(&child.name, child)?;
    self.check_owned(&child.name, parent)?;

    if child.is_builtin() {
      return Err(LanguageError::InvalidUse(InvalidUse::SealedSort { sort: child.name.clone() }));
    }
    if child.index == parent.index || self.promotions[parent.index].contains(child.index) {
      warning!(
        1,
        "rejected hierarchy edge {} ⊑ {}: it would close a cycle",
        child.name,
        parent.name
      );
      return Err(LanguageError::InvalidUse(
        InvalidUse::Cycle {
          sort  : child.name.clone(),
          parent: parent.name.clone(),
        }
      ));
    }
    if !self.edges.insert((child.index, parent.index)) {
      return Ok(());
    }
    self.parents[child.index].push(parent.index);

    let mut gained = self.promotions[parent.index].clone();
    gained.insert(parent.index);

    for index in 0..self.promotions.len() {
      if index == child.index || self.promotions[index].contains(child.index) {
        self.promotions[index].union_in_place(&gained);

        #[cfg(feature = "trace_closure")]
        crate::trace!(5, "promotion set of {} extended to {:?}", self.sorts[index].name, self.promotions[index]);
      }
    }

    Ok(())
  }

  /// Parents must belong to the same language as the registry.
  fn check_owned(&self, name: &IString, sort: &Sort) -> LanguageResult<()> {
    if sort.language != self.language || self.sorts.at(sort.index).is_none() {
      return Err(LanguageError::InvalidUse(
        InvalidUse::ForeignParent {
          sort  : name.clone(),
          parent: sort.name.clone(),
        }
      ));
    }
    Ok(())
  }

  // region Lookup

  #[inline(always)]
  pub fn has_sort(&self, name: &str) -> bool {
    self.sorts.contains(name)
  }

  pub fn get_sort(&self, name: &str) -> LanguageResult<RcSort> {
    self.sorts
        .get(name)
        .cloned()
        .ok_or_else(|| LanguageError::UndefinedSort(IString::from(name)))
  }

  pub fn sort_at(&self, index: SortIndex) -> Option<&RcSort> {
    self.sorts.at(index)
  }

  /// Is `sort` a sort of this registry, as opposed to a same-named sort of another language?
  pub fn owns(&self, sort: &Sort) -> bool {
    sort.language == self.language && sort.index < self.sorts.len()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.sorts.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.sorts.is_empty()
  }

  /// Iterates over the sorts in registration order.
  pub fn iter(&self) -> impl Iterator<Item = &RcSort> {
    self.sorts.iter()
  }

  // endregion

  // region Subtype relation

  /// `t ⊑ st`: equal, or `st` is a strict ancestor of `t`. Sorts of other languages are unrelated to everything.
  pub fn is_subtype(&self, t: &Sort, st: &Sort) -> bool {
    self.owns(t) && self.owns(st) && (t.index == st.index || self.promotions[t.index].contains(st.index))
  }

  /// `t ⊏ st`: `st` is a strict ancestor of `t`.
  pub fn is_strict_subtype(&self, t: &Sort, st: &Sort) -> bool {
    self.owns(t) && self.owns(st) && self.promotions[t.index].contains(st.index)
  }

  pub fn are_vertically_related(&self, t1: &Sort, t2: &Sort) -> bool {
    self.is_subtype(t1, t2) || self.is_subtype(t2, t1)
  }

  /// The promotion set of `sort`: its strict ancestors, as indices.
  pub fn promotion_set(&self, sort: &Sort) -> Option<&NatSet> {
    match self.owns(sort) {
      true  => Some(&self.promotions[sort.index]),
      false => None,
    }
  }

  /// The strict ancestors of `sort` in registration order.
  pub fn ancestors<'a>(&'a self, sort: &Sort) -> impl Iterator<Item = &'a RcSort> + 'a {
    self.promotion_set(sort)
        .into_iter()
        .flat_map(|set| set.iter())
        .filter_map(|index| self.sorts.at(index))
  }

  /// The direct parents of `sort` in declaration order.
  pub fn parents<'a>(&'a self, sort: &Sort) -> impl Iterator<Item = &'a RcSort> + 'a {
    let parents: &'a [SortIndex] = match self.owns(sort) {
      true  => &self.parents[sort.index],
      false => &[],
    };
    parents.iter().filter_map(|&index| self.sorts.at(index))
  }

  /// Every edge `(child, parent)` of the hierarchy, ordered by child and then by declaration.
  pub fn hierarchy(&self) -> impl Iterator<Item = (&RcSort, &RcSort)> {
    self.parents
        .iter()
        .enumerate()
        .flat_map(move |(child, parents)| {
          parents.iter().map(move |&parent| (&self.sorts[child], &self.sorts[parent]))
        })
  }

  #[inline(always)]
  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  // endregion
}
