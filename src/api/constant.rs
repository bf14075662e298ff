/*!

A constant is either a named element of a user sort, stored in the language's constant namespace, or a value of an
interval sort. Values are produced by casting a literal and are never stored: `constant("3", Integer)` twice yields
two equal values, not a duplicate definition.

*/

use std::{
  fmt::{Debug, Display, Formatter},
  hash::{Hash, Hasher},
  rc::Rc,
};

use crate::{
  abstractions::IString,
  api::language::LanguageId,
  core::{
    format::{FormatStyle, Formattable},
    sort::{interval::DomainValue, RcSort},
  },
};

pub type RcNamedConstant = Rc<NamedConstant>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constant {
  Named(RcNamedConstant),
  Value(ValueConstant),
}

impl Constant {
  pub fn name(&self) -> IString {
    match self {
      Constant::Named(named) => named.name.clone(),
      Constant::Value(value) => IString::from(value.value.to_string()),
    }
  }

  pub fn sort(&self) -> &RcSort {
    match self {
      Constant::Named(named) => &named.sort,
      Constant::Value(value) => &value.sort,
    }
  }

  /// The domain value of an interval constant.
  pub fn value(&self) -> Option<&DomainValue> {
    match self {
      Constant::Named(_)     => None,
      Constant::Value(value) => Some(&value.value),
    }
  }

  #[inline(always)]
  pub fn language(&self) -> LanguageId {
    self.sort().language()
  }

  /// Is this constant stored in its language's namespace?
  #[inline(always)]
  pub fn is_named(&self) -> bool {
    matches!(self, Constant::Named(_))
  }
}

impl Formattable for Constant {
  fn repr(&self, style: FormatStyle) -> String {
    match style {
      FormatStyle::Default | FormatStyle::Simple => self.name().to_string(),
      FormatStyle::Input => format!("constant {}: {}", self.name(), self.sort()),
      FormatStyle::Debug => {
        match self {
          Constant::Named(named) => format!("{}#{}: {}", named.name, named.index, named.sort.repr(FormatStyle::Debug)),
          Constant::Value(value) => format!("{:?}: {}", value.value, value.sort.repr(FormatStyle::Debug)),
        }
      }
    }
  }
}

impl Display for Constant {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}

/// A constant of a user sort.
pub struct NamedConstant {
  pub name: IString,
  pub sort: RcSort,
  pub(crate) index: usize,
}

impl NamedConstant {
  pub(crate) fn new(name: IString, sort: RcSort, index: usize) -> NamedConstant {
    NamedConstant { name, sort, index }
  }
}

impl PartialEq for NamedConstant {
  fn eq(&self, other: &Self) -> bool {
    self.sort.language() == other.sort.language() && self.index == other.index
  }
}

impl Eq for NamedConstant {}

impl Hash for NamedConstant {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.sort.language().hash(state);
    self.index.hash(state);
  }
}

impl Debug for NamedConstant {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}#{}: {}", self.name, self.index, self.sort)
  }
}

/// A transient value of an interval sort.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueConstant {
  pub value: DomainValue,
  pub sort : RcSort,
}
