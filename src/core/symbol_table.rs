/*!

The `SymbolTable` owns the namespaces for predicates, functions and constants, and the list of variables. Sorts live
in the `SortRegistry`, which the symbol table consults to validate argument sorts and to resolve sort references.

Every `register_*` method checks everything it can before it mutates anything, so a failed registration leaves the
table exactly as it was.

*/

use std::rc::Rc;

use crate::{
  abstractions::IString,
  api::{
    constant::{Constant, NamedConstant, ValueConstant},
    error::{InvalidUse, LanguageError, LanguageResult},
    language::LanguageId,
    reference::{Element, Reference, SymbolKind},
    symbol::{Function, Predicate, RcFunction, RcPredicate, Signature},
    variable::{RcVariable, Variable},
  },
  core::{
    format::{FormatStyle, Formattable},
    namespace::Namespace,
    sort::{interval::Literal, registry::SortRegistry, RcSort},
  },
};

pub struct SymbolTable {
  language  : LanguageId,
  predicates: Namespace<RcPredicate>,
  functions : Namespace<RcFunction>,
  constants : Namespace<Constant>,
  variables : Vec<RcVariable>,
}

impl SymbolTable {
  pub fn new(language: LanguageId) -> SymbolTable {
    SymbolTable {
      language,
      predicates: Namespace::new(),
      functions : Namespace::new(),
      constants : Namespace::new(),
      variables : Vec::new(),
    }
  }

  // region Registration

  pub fn register_predicate(&mut self, name: IString, sorts: Vec<RcSort>) -> LanguageResult<RcPredicate> {
    if let Some(existing) = self.predicates.get(&name) {
      return Err(LanguageError::DuplicatePredicate { existing: existing.clone() });
    }
    self.check_sorts(&sorts)?;

    let index     = self.predicates.next_index();
    let predicate = Rc::new(Predicate::new(Signature::new(name.clone(), index, self.language, sorts)));
    self.predicates.insert(name, predicate.clone());

    Ok(predicate)
  }

  pub fn register_function(&mut self, name: IString, sorts: Vec<RcSort>) -> LanguageResult<RcFunction> {
    if let Some(existing) = self.functions.get(&name) {
      return Err(LanguageError::DuplicateFunction { existing: existing.clone() });
    }
    self.check_sorts(&sorts)?;

    let index    = self.functions.next_index();
    let function = Rc::new(Function::new(Signature::new(name.clone(), index, self.language, sorts)));
    self.functions.insert(name, function.clone());

    Ok(function)
  }

  /// Constants of interval sorts are cast from `literal` and returned without being stored. Constants of other
  /// sorts are stored under the literal's text and must be unique.
  pub fn register_constant(&mut self, literal: Literal, sort: RcSort) -> LanguageResult<Constant> {
    self.check_sorts(std::slice::from_ref(&sort))?;

    if sort.is_interval() {
      return match sort.admit(&literal) {
        Ok(value) => Ok(Constant::Value(ValueConstant { value, sort })),
        Err(reason) => Err(LanguageError::SemanticError {
          sort: sort.name.clone(),
          literal,
          reason,
        }),
      };
    }

    let name = literal.to_name();
    if let Some(existing) = self.constants.get(&name) {
      return Err(LanguageError::DuplicateConstant { existing: existing.clone() });
    }

    let index    = self.constants.next_index();
    let constant = Constant::Named(Rc::new(NamedConstant::new(name.clone(), sort, index)));
    self.constants.insert(name, constant.clone());

    Ok(constant)
  }

  /// Variables are not unique by name; every call creates a new variable.
  pub fn register_variable(&mut self, name: IString, sort: RcSort) -> LanguageResult<RcVariable> {
    self.check_sorts(std::slice::from_ref(&sort))?;

    let variable = Rc::new(Variable::new(name, sort, self.variables.len()));
    self.variables.push(variable.clone());

    Ok(variable)
  }

  fn check_sorts(&self, sorts: &[RcSort]) -> LanguageResult<()> {
    for sort in sorts {
      self.check_language(sort.language(), || sort.repr(FormatStyle::Input))?;
    }
    Ok(())
  }

  fn check_language(&self, owner: LanguageId, describe: impl FnOnce() -> String) -> LanguageResult<()> {
    if owner != self.language {
      return Err(LanguageError::LanguageMismatch {
        element : describe(),
        owner,
        expected: self.language,
      });
    }
    Ok(())
  }

  // endregion

  // region Resolution

  /// Turns `reference` into an element of kind `kind`. Names are looked up in the namespace of `kind`; handles must
  /// belong to this language and be of the requested kind.
  pub fn resolve(&self, sorts: &SortRegistry, reference: Reference, kind: SymbolKind) -> LanguageResult<Element> {
    match reference {

      Reference::Resolved(element) => {
        if element.kind() != kind {
          return Err(LanguageError::InvalidUse(
            InvalidUse::UnexpectedElement {
              expected: kind,
              found   : element.kind(),
            }
          ));
        }
        self.check_language(element.language(), || element.repr(FormatStyle::Input))?;
        Ok(element)
      }

      Reference::ByName(name) => {
        let found = match kind {
          SymbolKind::Sort      => sorts.get_sort(&name).ok().map(Element::Sort),
          SymbolKind::Predicate => self.predicates.get(&name).cloned().map(Element::Predicate),
          SymbolKind::Function  => self.functions.get(&name).cloned().map(Element::Function),
          SymbolKind::Constant  => self.constants.get(&name).cloned().map(Element::Constant),
          SymbolKind::Variable  => {
            return Err(LanguageError::InvalidUse(InvalidUse::NotANamespace(SymbolKind::Variable)));
          }
        };
        found.ok_or(LanguageError::UndefinedElement { name, kind })
      }

    } // end match on `reference`
  }

  /// Resolves a reference that must denote a sort.
  pub fn resolve_sort(&self, sorts: &SortRegistry, reference: Reference) -> LanguageResult<RcSort> {
    match self.resolve(sorts, reference, SymbolKind::Sort)? {
      Element::Sort(sort) => Ok(sort),
      // `resolve` only returns elements of the requested kind.
      other => Err(LanguageError::InvalidUse(
        InvalidUse::UnexpectedElement {
          expected: SymbolKind::Sort,
          found   : other.kind(),
        }
      )),
    }
  }

  /// Resolves every reference, failing on the first one that does not resolve.
  pub fn resolve_sorts(&self, sorts: &SortRegistry, references: &[Reference]) -> LanguageResult<Vec<RcSort>> {
    references
        .iter()
        .map(|reference| self.resolve_sort(sorts, reference.clone()))
        .collect()
  }

  // endregion

  // region Queries

  pub fn has_predicate(&self, name: &str) -> bool {
    self.predicates.contains(name)
  }

  pub fn get_predicate(&self, name: &str) -> LanguageResult<RcPredicate> {
    self.predicates
        .get(name)
        .cloned()
        .ok_or_else(|| LanguageError::UndefinedPredicate(IString::from(name)))
  }

  pub fn has_function(&self, name: &str) -> bool {
    self.functions.contains(name)
  }

  pub fn get_function(&self, name: &str) -> LanguageResult<RcFunction> {
    self.functions
        .get(name)
        .cloned()
        .ok_or_else(|| LanguageError::UndefinedFunction(IString::from(name)))
  }

  pub fn has_constant(&self, name: &str) -> bool {
    self.constants.contains(name)
  }

  pub fn get_constant(&self, name: &str) -> LanguageResult<Constant> {
    self.constants
        .get(name)
        .cloned()
        .ok_or_else(|| LanguageError::UndefinedConstant(IString::from(name)))
  }

  pub fn predicates(&self) -> impl Iterator<Item = &RcPredicate> {
    self.predicates.iter()
  }

  pub fn functions(&self) -> impl Iterator<Item = &RcFunction> {
    self.functions.iter()
  }

  pub fn constants(&self) -> impl Iterator<Item = &Constant> {
    self.constants.iter()
  }

  pub fn variables(&self) -> impl Iterator<Item = &RcVariable> {
    self.variables.iter()
  }

  pub fn predicate_count(&self) -> usize {
    self.predicates.len()
  }

  pub fn function_count(&self) -> usize {
    self.functions.len()
  }

  pub fn variable_count(&self) -> usize {
    self.variables.len()
  }

  // endregion
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::{api::error::ErrorKind, core::sort::builtin::BuiltinSortFactory};

  fn fixture() -> (SortRegistry, SymbolTable) {
    let language     = LanguageId::fresh();
    let mut registry = SortRegistry::new(language);
    BuiltinSortFactory::populate(&mut registry);
    registry.register_sort(IString::from("block"), &[], false, None).unwrap();
    (registry, SymbolTable::new(language))
  }

  #[test]
  fn duplicate_predicate_keeps_the_original() {
    let (registry, mut table) = fixture();
    let block = registry.get_sort("block").unwrap();

    let on = table.register_predicate(IString::from("on"), vec![block.clone(), block.clone()]).unwrap();
    let result = table.register_predicate(IString::from("on"), vec![block]);

    match result {
      Err(LanguageError::DuplicatePredicate { existing }) => assert_eq!(existing, on),
      other => panic!("expected DuplicatePredicate, got {:?}", other.map(|p| p.to_string())),
    }
    assert_eq!(table.get_predicate("on").unwrap().arity(), 2);
    assert_eq!(table.predicate_count(), 1);
  }

  #[test]
  fn interval_constants_are_not_stored() {
    let (registry, mut table) = fixture();
    let integer = registry.get_sort("Integer").unwrap();

    let three = table.register_constant(Literal::from("3"), integer.clone()).unwrap();
    let again = table.register_constant(Literal::from("3"), integer.clone()).unwrap();
    assert_eq!(three, again);
    assert!(!table.has_constant("3"));

    let error = table.register_constant(Literal::from("3.5"), integer).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::SemanticError);
  }

  #[test]
  fn named_constants_are_unique() {
    let (registry, mut table) = fixture();
    let block = registry.get_sort("block").unwrap();

    let a = table.register_constant(Literal::from("a"), block.clone()).unwrap();
    assert!(a.is_named());
    let error = table.register_constant(Literal::from("a"), block).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DuplicateConstant);
    assert_eq!(table.get_constant("a").unwrap(), a);
  }

  #[test]
  fn variables_may_share_names() {
    let (registry, mut table) = fixture();
    let block = registry.get_sort("block").unwrap();

    let x1 = table.register_variable(IString::from("x"), block.clone()).unwrap();
    let x2 = table.register_variable(IString::from("x"), block).unwrap();
    assert_ne!(x1, x2);
    assert_eq!(table.variable_count(), 2);
  }

  #[test]
  fn resolution_by_name_and_by_handle() {
    let (registry, mut table) = fixture();
    let block = registry.get_sort("block").unwrap();
    let clear = table.register_predicate(IString::from("clear"), vec![block.clone()]).unwrap();

    let by_name = table.resolve(&registry, Reference::from("clear"), SymbolKind::Predicate).unwrap();
    assert_eq!(by_name, Element::Predicate(clear.clone()));

    let wrong_kind = table.resolve(&registry, Reference::from(&clear), SymbolKind::Function).unwrap_err();
    assert_eq!(wrong_kind.kind(), ErrorKind::LanguageError);

    let missing = table.resolve(&registry, Reference::from("holding"), SymbolKind::Predicate).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::UndefinedElement);

    let variable = table.resolve(&registry, Reference::from("x"), SymbolKind::Variable).unwrap_err();
    assert_eq!(variable.kind(), ErrorKind::LanguageError);

    assert_eq!(table.resolve_sort(&registry, Reference::from(&block)).unwrap(), block);
  }

  #[test]
  fn foreign_handles_are_a_mismatch() {
    let (registry, mut table) = fixture();
    let (foreign_registry, _) = fixture();
    let foreign_block = foreign_registry.get_sort("block").unwrap();

    let error = table.resolve_sort(&registry, Reference::from(&foreign_block)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LanguageMismatch);

    let error = table.register_predicate(IString::from("p"), vec![foreign_block]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LanguageMismatch);
    assert!(!table.has_predicate("p"));
  }
}
