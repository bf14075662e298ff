/*!

A `Sort` is a named value domain. Sorts are related to each other by the subtype relation, which is stored in the
owning `SortRegistry`, not in the sorts themselves.

See the module level documentation for the [`sort`](crate::core::sort) module for more about the hierarchy and
how its closure is maintained.

## Lifecycle and Ownership

Sorts are created only by their `Language` and are never renamed or removed. A `Sort` is shared through an `RcSort`
handle; the handle records the `LanguageId` of its owner, which is used for identity checks only. Two handles are
equal exactly when they name the same sort of the same language, so handles are stable keys for the lifetime of the
language.

*/

use std::{
  fmt::{Debug, Display, Formatter},
  hash::{Hash, Hasher},
  rc::Rc,
};

use enumflags2::{bitflags, BitFlags};

use crate::{
  abstractions::IString,
  api::{
    error::{LanguageError, LanguageResult},
    language::LanguageId,
  },
  core::{
    format::{FormatStyle, Formattable},
    sort::interval::{CastRejection, DomainValue, Interval, Literal},
  },
};

/// A shared handle to a sort.
pub type RcSort    = Rc<Sort>;
/// The position of a sort within its registry. Sorts are numbered in registration order, starting with `Object`.
pub type SortIndex = usize;

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SortFlag {
  /// One of `Object`, `Real`, `Integer`, `Natural`.
  Builtin,
  /// The sort carries bounds and a cast function.
  Interval,
}

pub type SortFlags = BitFlags<SortFlag, u8>;

pub struct Sort {
  pub name: IString,
  pub(crate) index   : SortIndex,
  pub(crate) language: LanguageId,
  pub(crate) flags   : SortFlags,
  pub(crate) interval: Option<Interval>,
}

impl Sort {
  pub(crate) fn new(
    name    : IString,
    index   : SortIndex,
    language: LanguageId,
    builtin : bool,
    interval: Option<Interval>
  ) -> Sort
  {
    let mut flags = SortFlags::empty();
    if builtin {
      flags |= SortFlag::Builtin;
    }
    if interval.is_some() {
      flags |= SortFlag::Interval;
    }

    Sort {
      name,
      index,
      language,
      flags,
      interval,
    }
  }

  // region Accessors

  #[inline(always)]
  pub fn index(&self) -> SortIndex {
    self.index
  }

  #[inline(always)]
  pub fn language(&self) -> LanguageId {
    self.language
  }

  #[inline(always)]
  pub fn flags(&self) -> SortFlags {
    self.flags
  }

  #[inline(always)]
  pub fn is_builtin(&self) -> bool {
    self.flags.contains(SortFlag::Builtin)
  }

  #[inline(always)]
  pub fn is_interval(&self) -> bool {
    self.flags.contains(SortFlag::Interval)
  }

  pub fn interval(&self) -> Option<&Interval> {
    self.interval.as_ref()
  }

  pub fn bounds(&self) -> Option<(&DomainValue, &DomainValue)> {
    self.interval.as_ref().map(|interval| (&interval.lower, &interval.upper))
  }

  // endregion

  /// Casts `literal` into this sort's domain, checking bounds. Sorts without an interval admit nothing.
  pub fn admit(&self, literal: &Literal) -> Result<DomainValue, CastRejection> {
    match &self.interval {
      Some(interval) => interval.admit(literal),
      None           => Err(CastRejection::NotRepresentable),
    }
  }

  /// A sort is malformed if it cannot contain any value. Only interval sorts can be empty.
  pub fn check_well_formed(&self) -> LanguageResult<()> {
    match &self.interval {
      Some(interval) if interval.is_empty() => Err(LanguageError::EmptySort { sort: self.name.clone() }),
      _ => Ok(()),
    }
  }
}

impl PartialEq for Sort {
  fn eq(&self, other: &Self) -> bool {
    self.language == other.language && self.index == other.index
  }
}

impl Eq for Sort {}

impl Hash for Sort {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.language.hash(state);
    self.index.hash(state);
  }
}

impl Formattable for Sort {
  fn repr(&self, style: FormatStyle) -> String {
    match style {
      FormatStyle::Default | FormatStyle::Simple => self.name.to_string(),

      FormatStyle::Input => {
        match &self.interval {
          Some(interval) => format!("interval {}{}", self.name, interval),
          None           => format!("sort {}", self.name),
        }
      }

      FormatStyle::Debug => {
        format!("{}#{}@{}{:?}", self.name, self.index, self.language, self.flags.iter().collect::<Vec<_>>())
      }
    }
  }
}

impl Display for Sort {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}

impl Debug for Sort {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Debug))
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::interval::cast_to_integer;

  #[test]
  fn identity_is_language_and_index() {
    let language = LanguageId::fresh();
    let a        = Sort::new(IString::from("a"), 4, language, false, None);
    let a_again  = Sort::new(IString::from("a"), 4, language, false, None);
    let foreign  = Sort::new(IString::from("a"), 4, LanguageId::fresh(), false, None);

    assert_eq!(a, a_again);
    assert_ne!(a, foreign);
  }

  #[test]
  fn empty_interval_is_malformed() {
    let empty = Interval::new(DomainValue::from(5i64), DomainValue::from(1i64), cast_to_integer);
    let sort  = Sort::new(IString::from("nothing"), 4, LanguageId::fresh(), false, Some(empty));

    assert!(sort.is_interval());
    assert!(!sort.is_builtin());
    assert!(matches!(sort.check_well_formed(), Err(LanguageError::EmptySort { .. })));
  }

  #[test]
  fn plain_sorts_admit_nothing() {
    let sort = Sort::new(IString::from("item"), 4, LanguageId::fresh(), false, None);
    assert_eq!(sort.admit(&Literal::from("1")), Err(CastRejection::NotRepresentable));
    assert_eq!(sort.repr(FormatStyle::Input), "sort item");
  }
}
