/*!

Sorts, symbols and sort hierarchies for many-sorted first-order languages.

A [`Language`] owns a subtype hierarchy of sorts rooted at the builtin `Object`, with the numeric interval sorts
`Real ⊐ Integer ⊐ Natural` beneath it, plus the predicate, function and constant symbols and the variables of the
language. Subtype queries are answered from an eagerly maintained closure, so `is_subtype` is a set lookup.

*/

pub mod abstractions;
pub mod api;
pub mod core;

// We re-export the names most clients need.
pub use abstractions::{
  log,
  IString
};
pub use api::{
  constant::Constant,
  error::{ErrorKind, InvalidUse, LanguageError, LanguageResult},
  language::{language, Language, LanguageId},
  reference::{Element, Reference, SymbolKind},
  symbol::{RcFunction, RcPredicate},
  variable::RcVariable,
};
pub use crate::core::{
  builtins::{BuiltinFunctionSymbol, BuiltinPredicateSymbol},
  format::{FormatStyle, Formattable},
  sort::{
    builtin::BuiltinSort,
    interval::{DomainValue, Literal},
    RcSort,
  },
};
