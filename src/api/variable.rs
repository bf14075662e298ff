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
    sort::RcSort,
  },
};

pub type RcVariable = Rc<Variable>;

/// A sorted variable. Variable names are scoped by the formulas that bind them, so a language may hand out several
/// variables with the same name; each is a distinct variable, identified by its position in creation order.
pub struct Variable {
  pub name: IString,
  pub sort: RcSort,
  pub(crate) index: usize,
}

impl Variable {
  pub(crate) fn new(name: IString, sort: RcSort, index: usize) -> Variable {
    Variable { name, sort, index }
  }

  /// Variables belong to the language of their sort.
  #[inline(always)]
  pub fn language(&self) -> LanguageId {
    self.sort.language()
  }

  #[inline(always)]
  pub fn index(&self) -> usize {
    self.index
  }
}

impl PartialEq for Variable {
  fn eq(&self, other: &Self) -> bool {
    self.language() == other.language() && self.index == other.index
  }
}

impl Eq for Variable {}

impl Hash for Variable {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.language().hash(state);
    self.index.hash(state);
  }
}

impl Formattable for Variable {
  fn repr(&self, style: FormatStyle) -> String {
    match style {
      FormatStyle::Default | FormatStyle::Simple => format!("?{}", self.name),
      FormatStyle::Input => format!("?{}: {}", self.name, self.sort),
      FormatStyle::Debug => format!("?{}#{}: {}", self.name, self.index, self.sort.repr(FormatStyle::Debug)),
    }
  }
}

impl Display for Variable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}

impl Debug for Variable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Debug))
  }
}
