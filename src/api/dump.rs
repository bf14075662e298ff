/*!

A structural snapshot of a language's sorts, predicates and functions, as produced by
[`Language::dump`](crate::api::language::Language::dump). Entries are self-describing: each carries its name and
kind plus whatever of parents, argument sorts and bounds applies to it.

*/

use crate::{
  abstractions::IString,
  api::{
    reference::SymbolKind,
    symbol::Signature,
  },
  core::sort::{interval::DomainValue, registry::SortRegistry, Sort},
};

#[derive(Clone, PartialEq, Debug)]
pub struct LanguageDump {
  pub sorts     : Vec<DumpEntry>,
  pub predicates: Vec<DumpEntry>,
  pub functions : Vec<DumpEntry>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct DumpEntry {
  pub name   : IString,
  pub kind   : SymbolKind,
  pub builtin: bool,
  /// Direct parents, for sorts.
  pub parents: Vec<IString>,
  /// Argument sorts, for predicates and functions.
  pub domain : Vec<IString>,
  /// Bounds, for interval sorts.
  pub bounds : Option<(DomainValue, DomainValue)>,
}

impl DumpEntry {
  pub(crate) fn of_sort(sort: &Sort, registry: &SortRegistry) -> DumpEntry {
    DumpEntry {
      name   : sort.name.clone(),
      kind   : SymbolKind::Sort,
      builtin: sort.is_builtin(),
      parents: registry.parents(sort).map(|parent| parent.name.clone()).collect(),
      domain : Vec::new(),
      bounds : sort.bounds().map(|(lower, upper)| (lower.clone(), upper.clone())),
    }
  }

  pub(crate) fn of_signature(signature: &Signature, kind: SymbolKind) -> DumpEntry {
    DumpEntry {
      name   : signature.name.clone(),
      kind,
      builtin: false,
      parents: Vec::new(),
      domain : signature.sorts().iter().map(|sort| sort.name.clone()).collect(),
      bounds : None,
    }
  }
}
