/*!

Every way a registration or lookup can fail. Errors are returned at the point of detection and no operation leaves
partial state behind when it fails, so a caller may recover from any of them, for example by catching
`DuplicateSort` and reusing the existing sort.

Callers should distinguish errors by [`LanguageError::kind`], not by their messages.

*/

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
};

use crate::{
  abstractions::IString,
  api::{
    constant::Constant,
    language::LanguageId,
    reference::SymbolKind,
    symbol::{RcFunction, RcPredicate},
  },
  core::{
    builtins::BuiltinFunctionSymbol,
    sort::{
      interval::{CastRejection, Literal},
      RcSort,
    },
  },
};

pub type LanguageResult<T> = Result<T, LanguageError>;

#[derive(Clone, PartialEq)]
pub enum LanguageError {
  DuplicateSort      { existing: RcSort },
  DuplicatePredicate { existing: RcPredicate },
  DuplicateFunction  { existing: RcFunction },
  DuplicateConstant  { existing: Constant },

  UndefinedSort(IString),
  UndefinedPredicate(IString),
  UndefinedFunction(IString),
  UndefinedConstant(IString),
  UndefinedElement { name: IString, kind: SymbolKind },

  /// An element of one language was handed to another.
  LanguageMismatch {
    element : String,
    owner   : LanguageId,
    expected: LanguageId,
  },

  /// An interval sort did not admit a literal.
  SemanticError {
    sort   : IString,
    literal: Literal,
    reason : CastRejection,
  },

  /// An interval sort whose bounds admit no value.
  EmptySort { sort: IString },

  /// Structural misuse of the language.
  InvalidUse(InvalidUse),
}

/// The ways of misusing a language that are not covered by a more specific error.
#[derive(Clone, PartialEq, Debug)]
pub enum InvalidUse {
  /// A resolved reference was of a different kind than requested.
  UnexpectedElement { expected: SymbolKind, found: SymbolKind },
  /// A sort of another language was given as a parent.
  ForeignParent { sort: IString, parent: IString },
  /// Builtin sorts never receive new parents.
  SealedSort { sort: IString },
  /// The edge `sort ⊑ parent` would close a cycle.
  Cycle { sort: IString, parent: IString },
  UndefinedOperator {
    operator: BuiltinFunctionSymbol,
    left    : IString,
    right   : IString,
  },
  UnknownOperatorSymbol(String),
  /// Elements of this kind cannot be looked up by name.
  NotANamespace(SymbolKind),
  /// An interval sort was requested under a sort that is not an interval.
  NotAnInterval { sort: IString },
  /// The language is frozen.
  Frozen { operation: &'static str },
}

/// The kind of a `LanguageError`, without its data.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
  DuplicateSort,
  DuplicatePredicate,
  DuplicateFunction,
  DuplicateConstant,
  UndefinedSort,
  UndefinedPredicate,
  UndefinedFunction,
  UndefinedConstant,
  UndefinedElement,
  LanguageMismatch,
  SemanticError,
  EmptySort,
  LanguageError,
}

impl LanguageError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      LanguageError::DuplicateSort { .. }      => ErrorKind::DuplicateSort,
      LanguageError::DuplicatePredicate { .. } => ErrorKind::DuplicatePredicate,
      LanguageError::DuplicateFunction { .. }  => ErrorKind::DuplicateFunction,
      LanguageError::DuplicateConstant { .. }  => ErrorKind::DuplicateConstant,
      LanguageError::UndefinedSort(_)          => ErrorKind::UndefinedSort,
      LanguageError::UndefinedPredicate(_)     => ErrorKind::UndefinedPredicate,
      LanguageError::UndefinedFunction(_)      => ErrorKind::UndefinedFunction,
      LanguageError::UndefinedConstant(_)      => ErrorKind::UndefinedConstant,
      LanguageError::UndefinedElement { .. }   => ErrorKind::UndefinedElement,
      LanguageError::LanguageMismatch { .. }   => ErrorKind::LanguageMismatch,
      LanguageError::SemanticError { .. }      => ErrorKind::SemanticError,
      LanguageError::EmptySort { .. }          => ErrorKind::EmptySort,
      LanguageError::InvalidUse(_)             => ErrorKind::LanguageError,
    }
  }
}

impl Display for LanguageError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      LanguageError::DuplicateSort { existing } => {
        write!(f, "duplicate definition of sort \"{}\"", existing.name)
      }

      LanguageError::DuplicatePredicate { existing } => {
        write!(f, "duplicate definition of predicate \"{}\", already defined as {}", existing.name, existing)
      }

      LanguageError::DuplicateFunction { existing } => {
        write!(f, "duplicate definition of function \"{}\", already defined as {}", existing.name, existing)
      }

      LanguageError::DuplicateConstant { existing } => {
        write!(f, "duplicate definition of constant \"{}\" of sort {}", existing.name(), existing.sort())
      }

      LanguageError::UndefinedSort(name)      => write!(f, "undefined sort \"{}\"", name),
      LanguageError::UndefinedPredicate(name) => write!(f, "undefined predicate \"{}\"", name),
      LanguageError::UndefinedFunction(name)  => write!(f, "undefined function \"{}\"", name),
      LanguageError::UndefinedConstant(name)  => write!(f, "undefined constant \"{}\"", name),

      LanguageError::UndefinedElement { name, kind } => {
        write!(f, "undefined {} \"{}\"", kind, name)
      }

      LanguageError::LanguageMismatch { element, owner, expected } => {
        write!(f, "{} belongs to language {}, not to language {}", element, owner, expected)
      }

      LanguageError::SemanticError { sort, literal, reason } => {
        write!(
          f,
          "cannot create constant of sort \"{}\" from \"{}\" of type {}: {}",
          sort,
          literal,
          literal.type_name(),
          reason
        )
      }

      LanguageError::EmptySort { sort } => {
        write!(f, "sort \"{}\" is empty: its lower bound exceeds its upper bound", sort)
      }

      LanguageError::InvalidUse(misuse) => write!(f, "{}", misuse),

    } // end match on `LanguageError`
  }
}

impl Display for InvalidUse {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      InvalidUse::UnexpectedElement { expected, found } => {
        write!(f, "expected a {} but was given a {}", expected, found)
      }

      InvalidUse::ForeignParent { sort, parent } => {
        write!(f, "tried to set as parent of \"{}\" the sort \"{}\" from a different language", sort, parent)
      }

      InvalidUse::SealedSort { sort } => {
        write!(f, "the builtin sort \"{}\" cannot receive new parents", sort)
      }

      InvalidUse::Cycle { sort, parent } => {
        write!(f, "making \"{}\" a subtype of \"{}\" would introduce a cycle in the sort hierarchy", sort, parent)
      }

      InvalidUse::UndefinedOperator { operator, left, right } => {
        write!(f, "operator '{}' not defined on domain ({}, {})", operator, left, right)
      }

      InvalidUse::UnknownOperatorSymbol(symbol) => {
        write!(f, "unknown builtin symbol '{}'", symbol)
      }

      InvalidUse::NotANamespace(kind) => {
        write!(f, "elements of kind {} cannot be looked up by name", kind)
      }

      InvalidUse::NotAnInterval { sort } => {
        write!(f, "sort \"{}\" is not an interval sort", sort)
      }

      InvalidUse::Frozen { operation } => {
        write!(f, "cannot {}: the language is frozen", operation)
      }

    }
  }
}

impl Debug for LanguageError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for LanguageError {}

impl From<InvalidUse> for LanguageError {
  fn from(misuse: InvalidUse) -> Self {
    LanguageError::InvalidUse(misuse)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn structural_misuse_is_a_language_error() {
    let error = LanguageError::from(InvalidUse::Frozen { operation: "register sort" });
    assert_eq!(error.kind(), ErrorKind::LanguageError);
    assert_eq!(error.to_string(), "cannot register sort: the language is frozen");
  }

  #[test]
  fn semantic_error_names_literal_and_type() {
    let error = LanguageError::SemanticError {
      sort   : IString::from("Integer"),
      literal: Literal::from("3.5"),
      reason : CastRejection::NotRepresentable,
    };
    assert_eq!(error.kind(), ErrorKind::SemanticError);
    let message = error.to_string();
    assert!(message.contains("\"3.5\""));
    assert!(message.contains("text"));
  }
}
