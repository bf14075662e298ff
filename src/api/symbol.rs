/*!

Definitions related to predicate and function symbols. A symbol is a name to which a signature is attached: the
ordered sequence of sorts of its arguments. In an atom like `at(truck1, depot)` the predicate symbol is `at` and its
signature might be `(vehicle, location)`.

Predicates and functions have the same shape but live in separate namespaces, so they are separate types sharing a
`Signature`.

*/

use std::{
  fmt::{Debug, Display, Formatter},
  hash::{Hash, Hasher},
  ops::Deref,
  rc::Rc,
};

use crate::{
  abstractions::IString,
  api::language::LanguageId,
  core::{
    format::{join_string, FormatStyle, Formattable},
    sort::RcSort,
  },
};

pub type RcPredicate = Rc<Predicate>;
pub type RcFunction  = Rc<Function>;

/// The name and argument sorts of a symbol, together with its identity within its language.
pub struct Signature {
  pub name: IString,
  pub(crate) index   : usize,
  pub(crate) language: LanguageId,
  pub(crate) sorts   : Vec<RcSort>,
}

impl Signature {
  pub(crate) fn new(name: IString, index: usize, language: LanguageId, sorts: Vec<RcSort>) -> Signature {
    Signature { name, index, language, sorts }
  }

  /// The argument sorts in order.
  #[inline(always)]
  pub fn sorts(&self) -> &[RcSort] {
    &self.sorts
  }

  #[inline(always)]
  pub fn arity(&self) -> usize {
    self.sorts.len()
  }

  #[inline(always)]
  pub fn language(&self) -> LanguageId {
    self.language
  }

  #[inline(always)]
  pub fn index(&self) -> usize {
    self.index
  }

  fn repr_as(&self, keyword: &str, style: FormatStyle) -> String {
    match style {
      FormatStyle::Default => format!("{}/{}", self.name, self.arity()),
      FormatStyle::Simple  => self.name.to_string(),
      FormatStyle::Input   => format!("{} {}({})", keyword, self.name, join_string(self.sorts.iter(), ", ")),
      FormatStyle::Debug   => {
        format!(
          "{}#{}@{}({})",
          self.name,
          self.index,
          self.language,
          join_string(self.sorts.iter().map(|sort| sort.repr(FormatStyle::Debug)), ", ")
        )
      }
    }
  }
}

macro_rules! implement_symbol {
  ($symbol:ident, $keyword:literal) => {
    pub struct $symbol(Signature);

    impl $symbol {
      pub(crate) fn new(signature: Signature) -> $symbol {
        $symbol(signature)
      }
    }

    impl Deref for $symbol {
      type Target = Signature;

      fn deref(&self) -> &Signature {
        &self.0
      }
    }

    // Identity is the language and the position in the namespace; names are unique per language anyway.
    impl PartialEq for $symbol {
      fn eq(&self, other: &Self) -> bool {
        self.0.language == other.0.language && self.0.index == other.0.index
      }
    }

    impl Eq for $symbol {}

    impl Hash for $symbol {
      fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.language.hash(state);
        self.0.index.hash(state);
      }
    }

    impl Formattable for $symbol {
      fn repr(&self, style: FormatStyle) -> String {
        self.0.repr_as($keyword, style)
      }
    }

    impl Display for $symbol {
      fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repr(FormatStyle::Default))
      }
    }

    impl Debug for $symbol {
      fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repr(FormatStyle::Debug))
      }
    }
  };
}

implement_symbol!(Predicate, "predicate");
implement_symbol!(Function, "function");


#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::Sort;

  fn sort(name: &str, index: usize, language: LanguageId) -> RcSort {
    Rc::new(Sort::new(IString::from(name), index, language, false, None))
  }

  #[test]
  fn formatting_styles() {
    let language = LanguageId::fresh();
    let sorts    = vec![sort("vehicle", 4, language), sort("location", 5, language)];
    let at       = Predicate::new(Signature::new(IString::from("at"), 0, language, sorts));

    assert_eq!(at.to_string(), "at/2");
    assert_eq!(at.repr(FormatStyle::Simple), "at");
    assert_eq!(at.repr(FormatStyle::Input), "predicate at(vehicle, location)");
    assert_eq!(at.arity(), 2);
  }

  #[test]
  fn identity_ignores_signature() {
    let language = LanguageId::fresh();
    let f = Function::new(Signature::new(IString::from("f"), 0, language, vec![]));
    let g = Function::new(Signature::new(IString::from("g"), 0, language, vec![sort("a", 4, language)]));
    let h = Function::new(Signature::new(IString::from("f"), 1, language, vec![]));

    assert_eq!(f, g);
    assert_ne!(f, h);
  }
}
