/*!

The builtin sorts every language starts with, wired into the hierarchy as the strict chain

```text
Natural ⊏ Integer ⊏ Real ⊏ Object
```

Each language builds its own chain at construction time, so builtin sorts of two languages are distinct sorts. They
are constructed in the order of `BuiltinSort::ALL`, which makes a builtin's index within the registry equal to its
discriminant.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::IString,
  core::sort::{
    interval::{cast_to_integer, cast_to_real, DomainValue, Interval},
    registry::SortRegistry,
    sort::{RcSort, SortIndex},
  },
};

/// Largest magnitude of a `Real`: the single precision float range.
pub const REAL_BOUND      : f64 = 3.40282e+38;
/// Largest magnitude of an `Integer`.
pub const INTEGER_BOUND   : i64 = (1 << 31) - 1;
/// Largest `Natural`.
pub const NATURAL_UPPER   : i64 = (1 << 32) - 1;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinSort {
  Object,
  Real,
  Integer,
  Natural,
}

impl BuiltinSort {
  /// In construction order. Every builtin's parent precedes it.
  pub const ALL: [BuiltinSort; 4] = [
    BuiltinSort::Object,
    BuiltinSort::Real,
    BuiltinSort::Integer,
    BuiltinSort::Natural,
  ];

  pub fn name(self) -> &'static str {
    match self {
      BuiltinSort::Object  => "Object",
      BuiltinSort::Real    => "Real",
      BuiltinSort::Integer => "Integer",
      BuiltinSort::Natural => "Natural",
    }
  }

  /// The index of this builtin within every language's sort registry.
  #[inline(always)]
  pub fn index(self) -> SortIndex {
    self as SortIndex
  }

  pub fn parent(self) -> Option<BuiltinSort> {
    match self {
      BuiltinSort::Object  => None,
      BuiltinSort::Real    => Some(BuiltinSort::Object),
      BuiltinSort::Integer => Some(BuiltinSort::Real),
      BuiltinSort::Natural => Some(BuiltinSort::Integer),
    }
  }

  /// The bounds and cast of the builtin, or `None` for `Object`.
  pub fn interval(self) -> Option<Interval> {
    match self {
      BuiltinSort::Object  => None,
      BuiltinSort::Real    => Some(Interval::new(
        DomainValue::from(-REAL_BOUND),
        DomainValue::from(REAL_BOUND),
        cast_to_real
      )),
      BuiltinSort::Integer => Some(Interval::new(
        DomainValue::from(-INTEGER_BOUND),
        DomainValue::from(INTEGER_BOUND),
        cast_to_integer
      )),
      BuiltinSort::Natural => Some(Interval::new(
        DomainValue::from(0i64),
        DomainValue::from(NATURAL_UPPER),
        cast_to_integer
      )),
    }
  }

  pub fn from_index(index: SortIndex) -> Option<BuiltinSort> {
    BuiltinSort::ALL.get(index).copied()
  }
}

impl Display for BuiltinSort {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Builds the builtin chain into a fresh registry.
pub struct BuiltinSortFactory;

impl BuiltinSortFactory {
  /// Populates an empty `registry` with the builtin sorts, returning them in the order of `BuiltinSort::ALL`.
  /// Panics if the registry is not empty, as the builtin indices would no longer match `BuiltinSort::index`.
  pub fn populate(registry: &mut SortRegistry) -> [RcSort; 4] {
    assert!(registry.is_empty(), "builtin sorts must be the first sorts of a registry");

    BuiltinSort::ALL.map(|builtin| {
      let parents: Vec<SortIndex> = builtin.parent().map(BuiltinSort::index).into_iter().collect();
      let sort = registry.insert_sort(IString::from(builtin.name()), &parents, true, builtin.interval());
      debug_assert_eq!(sort.index(), builtin.index());
      sort
    })
  }
}
