/*!

The `OperatorDispatchTable` maps an operator applied to a pair of operand sorts to the handler implementing it.

Lookup is by exact key. If `(op, left, right)` has no handler, dispatch fails even if a handler exists for some pair
of supersorts; the subtype hierarchy is never consulted. Registering a key a second time replaces the previous
handler, so extensions can rebind builtin operators.

The table knows sorts only by index. The `Language` facade resolves and identity-checks sort handles before they
reach the table.

*/

use std::fmt::{Debug, Formatter};

use crate::{
  abstractions::HashMap,
  core::{
    builtins::BuiltinFunctionSymbol,
    sort::{interval::DomainValue, SortIndex},
  },
};

/// Implements an operator on two domain values.
pub type OperatorHandler = Box<dyn Fn(&DomainValue, &DomainValue) -> DomainValue>;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DispatchKey {
  pub operator: BuiltinFunctionSymbol,
  pub left    : SortIndex,
  pub right   : SortIndex,
}

impl DispatchKey {
  pub fn new(operator: BuiltinFunctionSymbol, left: SortIndex, right: SortIndex) -> DispatchKey {
    DispatchKey { operator, left, right }
  }
}

#[derive(Default)]
pub struct OperatorDispatchTable {
  handlers: HashMap<DispatchKey, OperatorHandler>,
}

impl OperatorDispatchTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores `handler` under `key`, returning `true` if it replaced an earlier handler.
  pub fn register(&mut self, key: DispatchKey, handler: OperatorHandler) -> bool {
    self.handlers.insert(key, handler).is_some()
  }

  /// Applies the handler registered for exactly `key`, or returns `None` if there is none.
  pub fn dispatch(&self, key: &DispatchKey, lhs: &DomainValue, rhs: &DomainValue) -> Option<DomainValue> {
    self.handlers.get(key).map(|handler| handler(lhs, rhs))
  }

  #[inline(always)]
  pub fn contains(&self, key: &DispatchKey) -> bool {
    self.handlers.contains_key(key)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }
}

impl Debug for OperatorDispatchTable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.handlers.keys()).finish()
  }
}
