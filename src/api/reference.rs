/*!

Registration operations accept sorts (and other elements) either by name or as an already constructed handle. A
`Reference` makes the two cases explicit: `ByName` is looked up in the namespace of the requested `SymbolKind`,
`Resolved` is checked to belong to the resolving language. Most callers never name `Reference` directly and pass
`"item"`, `&item_sort` or `item_sort.clone()`, relying on the `From` impls below.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::IString,
  api::{
    constant::Constant,
    language::LanguageId,
    symbol::{RcFunction, RcPredicate},
    variable::RcVariable,
  },
  core::{
    format::{FormatStyle, Formattable},
    sort::RcSort,
  },
};

/// The kinds of language elements. Each kind with unique names has its own namespace.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
  Sort,
  Predicate,
  Function,
  Variable,
  Constant,
}

impl Display for SymbolKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      SymbolKind::Sort      => "sort",
      SymbolKind::Predicate => "predicate",
      SymbolKind::Function  => "function",
      SymbolKind::Variable  => "variable",
      SymbolKind::Constant  => "constant",
    };
    write!(f, "{}", name)
  }
}

/// A handle to any element of a language.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Element {
  Sort(RcSort),
  Predicate(RcPredicate),
  Function(RcFunction),
  Constant(Constant),
  Variable(RcVariable),
}

impl Element {
  pub fn kind(&self) -> SymbolKind {
    match self {
      Element::Sort(_)      => SymbolKind::Sort,
      Element::Predicate(_) => SymbolKind::Predicate,
      Element::Function(_)  => SymbolKind::Function,
      Element::Constant(_)  => SymbolKind::Constant,
      Element::Variable(_)  => SymbolKind::Variable,
    }
  }

  /// The language that created the element.
  pub fn language(&self) -> LanguageId {
    match self {
      Element::Sort(sort)           => sort.language(),
      Element::Predicate(predicate) => predicate.language(),
      Element::Function(function)   => function.language(),
      Element::Constant(constant)   => constant.language(),
      Element::Variable(variable)   => variable.language(),
    }
  }
}

impl Formattable for Element {
  fn repr(&self, style: FormatStyle) -> String {
    match self {
      Element::Sort(sort)           => sort.repr(style),
      Element::Predicate(predicate) => predicate.repr(style),
      Element::Function(function)   => function.repr(style),
      Element::Constant(constant)   => constant.repr(style),
      Element::Variable(variable)   => variable.repr(style),
    }
  }
}

impl Display for Element {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", self.kind(), self.repr(FormatStyle::Default))
  }
}

/// Either the name of an element or the element itself.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Reference {
  ByName(IString),
  Resolved(Element),
}

impl From<&str> for Reference {
  fn from(name: &str) -> Self {
    Reference::ByName(IString::from(name))
  }
}

impl From<String> for Reference {
  fn from(name: String) -> Self {
    Reference::ByName(IString::from(name))
  }
}

impl From<IString> for Reference {
  fn from(name: IString) -> Self {
    Reference::ByName(name)
  }
}

impl From<Element> for Reference {
  fn from(element: Element) -> Self {
    Reference::Resolved(element)
  }
}

macro_rules! implement_reference_from {
  ($variant:ident, $handle:ty) => {
    impl From<$handle> for Reference {
      fn from(handle: $handle) -> Self {
        Reference::Resolved(Element::$variant(handle))
      }
    }

    impl From<&$handle> for Reference {
      fn from(handle: &$handle) -> Self {
        Reference::Resolved(Element::$variant(handle.clone()))
      }
    }
  };
}

implement_reference_from!(Sort, RcSort);
implement_reference_from!(Predicate, RcPredicate);
implement_reference_from!(Function, RcFunction);
implement_reference_from!(Constant, Constant);
implement_reference_from!(Variable, RcVariable);

impl Display for Reference {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Reference::ByName(name)      => write!(f, "\"{}\"", name),
      Reference::Resolved(element) => write!(f, "{}", element),
    }
  }
}
