/*!

A `Language` is a many-sorted first-order vocabulary: sorts arranged in a subtype hierarchy, plus predicate,
function and constant symbols and variables typed over those sorts. It owns every element it creates and is the
only way to create them.

## Language Construction

Every language starts with the builtin sorts `Object ⊐ Real ⊐ Integer ⊐ Natural`. Callers then register their own
sorts and symbols. Registration validates against what is already registered and either succeeds completely or fails
without any effect. Queries never mutate.

```
use sortlib::api::language::Language;

let mut lang = Language::new("blocksworld");
let item  = lang.sort("item", &[]).unwrap();
let heavy = lang.sort("heavy_item", &["item".into()]).unwrap();
let on    = lang.predicate("on", &[(&item).into(), (&item).into()]).unwrap();

assert!(lang.is_subtype(&heavy, &item));
assert!(lang.is_subtype(&heavy, &lang.object()));
assert_eq!(on.arity(), 2);
```

Once built, a language can be frozen, after which every registration fails with a `LanguageError`. A language is not
synchronized. It is meant to be built by one owner and then only read.

## Identity

Each language has a process-unique `LanguageId`. Handles record the id of the language that created them, and every
operation taking a handle rejects handles of other languages with `LanguageMismatch`, except that a foreign sort
given as a parent fails with `InvalidUse::ForeignParent`. Two languages therefore never share sorts, not even their
builtins. The subtype queries return `false` for foreign sorts and log the misuse.

*/

use std::{
  fmt::{Debug, Display, Formatter},
  sync::atomic::{AtomicU32, Ordering},
};

use paste::paste;

use crate::{
  abstractions::{IString, NatSet},
  api::{
    constant::Constant,
    dump::{DumpEntry, LanguageDump},
    error::{InvalidUse, LanguageError, LanguageResult},
    reference::{Element, Reference, SymbolKind},
    symbol::{RcFunction, RcPredicate},
    variable::RcVariable,
  },
  core::{
    builtins::BuiltinFunctionSymbol,
    format::{FormatStyle, Formattable},
    operator::{DispatchKey, OperatorDispatchTable},
    sort::{
      builtin::{BuiltinSort, BuiltinSortFactory},
      interval::{DomainValue, Interval, Literal},
      registry::SortRegistry,
      RcSort,
      Sort,
    },
    symbol_table::SymbolTable,
  },
  debug,
  info,
  warning,
};

const DISPLAY_INDENT: usize = 2;

static NEXT_LANGUAGE_ID: AtomicU32 = AtomicU32::new(0);

/// Identifies a `Language` instance for the lifetime of the process.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct LanguageId(u32);

impl LanguageId {
  pub(crate) fn fresh() -> LanguageId {
    LanguageId(NEXT_LANGUAGE_ID.fetch_add(1, Ordering::Relaxed))
  }
}

impl Display for LanguageId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Creates a language named `name`.
pub fn language(name: &str) -> Language {
  Language::new(name)
}

/// Generates `has_$kind`/`get_$kind` pairs forwarding to the component owning the namespace.
macro_rules! implement_namespace_queries {
  ($($kind:ident -> $handle:ty => $component:ident;)+) => {
    paste! {
      $(
        #[doc = "Is there a " $kind " named `name`?"]
        pub fn [<has_ $kind>](&self, name: &str) -> bool {
          self.$component.[<has_ $kind>](name)
        }

        #[doc = "Looks up the " $kind " named `name`."]
        pub fn [<get_ $kind>](&self, name: &str) -> LanguageResult<$handle> {
          self.$component.[<get_ $kind>](name)
        }
      )+
    }
  };
}

pub struct Language {
  name     : IString,
  id       : LanguageId,
  sorts    : SortRegistry,
  builtins : [RcSort; 4],
  symbols  : SymbolTable,
  operators: OperatorDispatchTable,
  frozen   : bool,
}

impl Default for Language {
  fn default() -> Self {
    Language::new("L")
  }
}

impl Language {
  pub fn new(name: &str) -> Language {
    let id           = LanguageId::fresh();
    let mut sorts    = SortRegistry::new(id);
    let builtins     = BuiltinSortFactory::populate(&mut sorts);

    info!(2, "constructed language {} ({})", name, id);

    Language {
      name     : IString::from(name),
      id,
      sorts,
      builtins,
      symbols  : SymbolTable::new(id),
      operators: OperatorDispatchTable::new(),
      frozen   : false,
    }
  }

  // region Accessors

  #[inline(always)]
  pub fn name(&self) -> &IString {
    &self.name
  }

  #[inline(always)]
  pub fn id(&self) -> LanguageId {
    self.id
  }

  pub fn builtin(&self, builtin: BuiltinSort) -> RcSort {
    self.builtins[builtin.index()].clone()
  }

  pub fn object(&self) -> RcSort {
    self.builtin(BuiltinSort::Object)
  }

  pub fn real(&self) -> RcSort {
    self.builtin(BuiltinSort::Real)
  }

  pub fn integer(&self) -> RcSort {
    self.builtin(BuiltinSort::Integer)
  }

  pub fn natural(&self) -> RcSort {
    self.builtin(BuiltinSort::Natural)
  }

  // endregion

  // region Freezing

  /// Forbids every further registration.
  pub fn freeze(&mut self) {
    if !self.frozen {
      self.frozen = true;
      info!(2, "language {} frozen with {}", self.name, self);
    }
  }

  #[inline(always)]
  pub fn is_frozen(&self) -> bool {
    self.frozen
  }

  fn ensure_open(&self, operation: &'static str) -> LanguageResult<()> {
    match self.frozen {
      true  => Err(LanguageError::InvalidUse(InvalidUse::Frozen { operation })),
      false => Ok(()),
    }
  }

  /// Logs a failed registration on its way out.
  fn report<T>(&self, result: LanguageResult<T>) -> LanguageResult<T> {
    if let Err(error) = &result {
      warning!(2, "language {}: {}", self.name, error);
    }
    result
  }

  // endregion

  // region Registration

  /// Registers a sort under the given parents, or under `Object` if there are none.
  pub fn sort(&mut self, name: &str, supers: &[Reference]) -> LanguageResult<RcSort> {
    let result = self.define_sort(IString::from(name), supers, None);
    self.report(result)
  }

  fn define_sort(
    &mut self,
    name    : IString,
    supers  : &[Reference],
    interval: Option<Interval>
  ) -> LanguageResult<RcSort>
  {
    self.ensure_open("register a sort")?;
    if let Ok(existing) = self.sorts.get_sort(&name) {
      return Err(LanguageError::DuplicateSort { existing });
    }
    let parents = supers
        .iter()
        .map(|parent| self.resolve_parent(&name, parent.clone()))
        .collect::<LanguageResult<Vec<_>>>()?;
    let sort    = self.sorts.register_sort(name, &parents, false, interval)?;

    debug!(4, "language {}: registered {}", self.name, sort.repr(FormatStyle::Input));
    Ok(sort)
  }

  /// Registers an interval sort under an interval `parent`. The bounds are cast by the parent and must lie within
  /// the parent's bounds; the new sort casts literals the way its parent does.
  pub fn interval(
    &mut self,
    name  : &str,
    parent: impl Into<Reference>,
    lower : impl Into<Literal>,
    upper : impl Into<Literal>
  ) -> LanguageResult<RcSort>
  {
    let result = self.define_interval(IString::from(name), parent.into(), lower.into(), upper.into());
    self.report(result)
  }

  fn define_interval(
    &mut self,
    name  : IString,
    parent: Reference,
    lower : Literal,
    upper : Literal
  ) -> LanguageResult<RcSort>
  {
    self.ensure_open("register an interval sort")?;
    let parent = self.resolve_parent(&name, parent)?;
    let parent_interval = parent.interval().ok_or_else(|| {
      LanguageError::InvalidUse(InvalidUse::NotAnInterval { sort: parent.name.clone() })
    })?;

    let admit = |literal: Literal| {
      parent_interval.admit(&literal).map_err(|reason| {
        LanguageError::SemanticError {
          sort: parent.name.clone(),
          literal,
          reason,
        }
      })
    };
    let interval = Interval::new(admit(lower)?, admit(upper)?, parent_interval.cast_fn());

    self.define_sort(name, &[Reference::from(&parent)], Some(interval))
  }

  /// Resolves a parent of the sort `name`. A sort handle of another language is a misuse of the hierarchy, not a
  /// mismatched argument, so it fails with `ForeignParent`.
  fn resolve_parent(&self, name: &IString, parent: Reference) -> LanguageResult<RcSort> {
    if let Reference::Resolved(Element::Sort(sort)) = &parent {
      if sort.language() != self.id {
        return Err(LanguageError::InvalidUse(
          InvalidUse::ForeignParent {
            sort  : name.clone(),
            parent: sort.name.clone(),
          }
        ));
      }
    }
    self.symbols.resolve_sort(&self.sorts, parent)
  }

  /// Adds `child ⊑ parent` between two existing sorts.
  pub fn set_parent(&mut self, child: impl Into<Reference>, parent: impl Into<Reference>) -> LanguageResult<()> {
    let result = self.define_parent(child.into(), parent.into());
    self.report(result)
  }

  fn define_parent(&mut self, child: Reference, parent: Reference) -> LanguageResult<()> {
    self.ensure_open("add a parent")?;
    let child  = self.symbols.resolve_sort(&self.sorts, child)?;
    let parent = self.resolve_parent(&child.name, parent)?;
    self.sorts.set_parent(&child, &parent)?;

    debug!(4, "language {}: added {} ⊑ {}", self.name, child, parent);
    Ok(())
  }

  pub fn predicate(&mut self, name: &str, sorts: &[Reference]) -> LanguageResult<RcPredicate> {
    let result = self.define_predicate(IString::from(name), sorts);
    self.report(result)
  }

  fn define_predicate(&mut self, name: IString, sorts: &[Reference]) -> LanguageResult<RcPredicate> {
    self.ensure_open("register a predicate")?;
    if let Ok(existing) = self.symbols.get_predicate(&name) {
      return Err(LanguageError::DuplicatePredicate { existing });
    }
    let sorts     = self.symbols.resolve_sorts(&self.sorts, sorts)?;
    let predicate = self.symbols.register_predicate(name, sorts)?;

    debug!(4, "language {}: registered {}", self.name, predicate.repr(FormatStyle::Input));
    Ok(predicate)
  }

  pub fn function(&mut self, name: &str, sorts: &[Reference]) -> LanguageResult<RcFunction> {
    let result = self.define_function(IString::from(name), sorts);
    self.report(result)
  }

  fn define_function(&mut self, name: IString, sorts: &[Reference]) -> LanguageResult<RcFunction> {
    self.ensure_open("register a function")?;
    if let Ok(existing) = self.symbols.get_function(&name) {
      return Err(LanguageError::DuplicateFunction { existing });
    }
    let sorts    = self.symbols.resolve_sorts(&self.sorts, sorts)?;
    let function = self.symbols.register_function(name, sorts)?;

    debug!(4, "language {}: registered {}", self.name, function.repr(FormatStyle::Input));
    Ok(function)
  }

  /// Creates a constant of `sort`. For interval sorts `name` is a literal cast into the sort and the resulting value
  /// is returned without being stored. For other sorts the constant is stored under `name`.
  pub fn constant(&mut self, name: impl Into<Literal>, sort: impl Into<Reference>) -> LanguageResult<Constant> {
    let result = self.define_constant(name.into(), sort.into());
    self.report(result)
  }

  fn define_constant(&mut self, name: Literal, sort: Reference) -> LanguageResult<Constant> {
    self.ensure_open("register a constant")?;
    let sort     = self.symbols.resolve_sort(&self.sorts, sort)?;
    let constant = self.symbols.register_constant(name, sort)?;

    if constant.is_named() {
      debug!(4, "language {}: registered {}", self.name, constant.repr(FormatStyle::Input));
    }
    Ok(constant)
  }

  /// Creates a new variable. Variable names need not be unique.
  pub fn variable(&mut self, name: &str, sort: impl Into<Reference>) -> LanguageResult<RcVariable> {
    let result = self.define_variable(IString::from(name), sort.into());
    self.report(result)
  }

  fn define_variable(&mut self, name: IString, sort: Reference) -> LanguageResult<RcVariable> {
    self.ensure_open("create a variable")?;
    let sort = self.symbols.resolve_sort(&self.sorts, sort)?;
    self.symbols.register_variable(name, sort)
  }

  // endregion

  // region Operators

  /// Binds `handler` to `operator` applied to exactly the sorts `left` and `right`, replacing any earlier binding.
  pub fn register_operator(
    &mut self,
    operator: BuiltinFunctionSymbol,
    left    : impl Into<Reference>,
    right   : impl Into<Reference>,
    handler : impl Fn(&DomainValue, &DomainValue) -> DomainValue + 'static
  ) -> LanguageResult<()>
  {
    let result = self.define_operator(operator, left.into(), right.into(), Box::new(handler));
    self.report(result)
  }

  fn define_operator(
    &mut self,
    operator: BuiltinFunctionSymbol,
    left    : Reference,
    right   : Reference,
    handler : Box<dyn Fn(&DomainValue, &DomainValue) -> DomainValue>
  ) -> LanguageResult<()>
  {
    self.ensure_open("register an operator")?;
    let left  = self.symbols.resolve_sort(&self.sorts, left)?;
    let right = self.symbols.resolve_sort(&self.sorts, right)?;

    if self.operators.register(DispatchKey::new(operator, left.index(), right.index()), handler) {
      debug!(3, "language {}: rebound operator '{}' on ({}, {})", self.name, operator, left, right);
    }
    Ok(())
  }

  /// Applies the handler bound to `operator` on exactly `(left, right)`. There is no fallback to supersorts.
  pub fn dispatch(
    &self,
    operator: BuiltinFunctionSymbol,
    left    : impl Into<Reference>,
    right   : impl Into<Reference>,
    lhs     : &DomainValue,
    rhs     : &DomainValue
  ) -> LanguageResult<DomainValue>
  {
    let left  = self.symbols.resolve_sort(&self.sorts, left.into())?;
    let right = self.symbols.resolve_sort(&self.sorts, right.into())?;

    self.operators
        .dispatch(&DispatchKey::new(operator, left.index(), right.index()), lhs, rhs)
        .ok_or_else(|| {
          LanguageError::InvalidUse(InvalidUse::UndefinedOperator {
            operator,
            left : left.name.clone(),
            right: right.name.clone(),
          })
        })
  }

  // endregion

  // region Lookup

  /// Resolves a name or handle to an element of the given kind belonging to this language.
  pub fn resolve(&self, reference: impl Into<Reference>, kind: SymbolKind) -> LanguageResult<Element> {
    self.symbols.resolve(&self.sorts, reference.into(), kind)
  }

  pub fn resolve_sort(&self, reference: impl Into<Reference>) -> LanguageResult<RcSort> {
    self.symbols.resolve_sort(&self.sorts, reference.into())
  }

  implement_namespace_queries! {
    sort      -> RcSort      => sorts;
    predicate -> RcPredicate => symbols;
    function  -> RcFunction  => symbols;
    constant  -> Constant    => symbols;
  }

  pub fn sorts(&self) -> impl Iterator<Item = &RcSort> {
    self.sorts.iter()
  }

  pub fn predicates(&self) -> impl Iterator<Item = &RcPredicate> {
    self.symbols.predicates()
  }

  pub fn functions(&self) -> impl Iterator<Item = &RcFunction> {
    self.symbols.functions()
  }

  /// Stored constants only; values of interval sorts are never stored.
  pub fn constants(&self) -> impl Iterator<Item = &Constant> {
    self.symbols.constants()
  }

  pub fn variables(&self) -> impl Iterator<Item = &RcVariable> {
    self.symbols.variables()
  }

  // endregion

  // region Sort hierarchy

  /// Logs a sort of another language passed to a subtype query. Returns whether any of `sorts` is foreign.
  fn report_foreign(&self, query: &str, sorts: [&Sort; 2]) -> bool {
    let mut foreign = false;
    for sort in sorts.into_iter().filter(|sort| !self.sorts.owns(sort)) {
      warning!(2, "language {}: {} given {} of language {}", self.name, query, sort.name, sort.language());
      foreign = true;
    }
    foreign
  }

  /// `t ⊑ st`. A sort of another language is related to nothing here, so any foreign argument yields `false` and is
  /// logged as a misuse.
  pub fn is_subtype(&self, t: &Sort, st: &Sort) -> bool {
    !self.report_foreign("is_subtype", [t, st]) && self.sorts.is_subtype(t, st)
  }

  /// `t ⊏ st`. Foreign sorts are handled as in `is_subtype`.
  pub fn is_strict_subtype(&self, t: &Sort, st: &Sort) -> bool {
    !self.report_foreign("is_strict_subtype", [t, st]) && self.sorts.is_strict_subtype(t, st)
  }

  /// Foreign sorts are handled as in `is_subtype`.
  pub fn are_vertically_related(&self, t1: &Sort, t2: &Sort) -> bool {
    !self.report_foreign("are_vertically_related", [t1, t2]) && self.sorts.are_vertically_related(t1, t2)
  }

  /// The indices of the strict ancestors of `sort`, or `None` for a sort of another language.
  pub fn promotion_set(&self, sort: &Sort) -> Option<&NatSet> {
    self.sorts.promotion_set(sort)
  }

  pub fn ancestors<'a>(&'a self, sort: &Sort) -> impl Iterator<Item = &'a RcSort> + 'a {
    self.sorts.ancestors(sort)
  }

  pub fn parents<'a>(&'a self, sort: &Sort) -> impl Iterator<Item = &'a RcSort> + 'a {
    self.sorts.parents(sort)
  }

  /// Every `(child, parent)` edge of the hierarchy.
  pub fn sort_hierarchy(&self) -> impl Iterator<Item = (&RcSort, &RcSort)> {
    self.sorts.hierarchy()
  }

  // endregion

  /// Asks every sort to validate itself, failing with the first sort's error.
  pub fn check_well_formed(&self) -> LanguageResult<()> {
    self.sorts.iter().try_for_each(|sort| sort.check_well_formed())
  }

  pub fn dump(&self) -> LanguageDump {
    LanguageDump {
      sorts     : self.sorts.iter().map(|sort| DumpEntry::of_sort(sort, &self.sorts)).collect(),
      predicates: self.predicates().map(|p| DumpEntry::of_signature(p, SymbolKind::Predicate)).collect(),
      functions : self.functions().map(|f| DumpEntry::of_signature(f, SymbolKind::Function)).collect(),
    }
  }

  /// Formats the language for display with `prefix` for each line. The `Debug` impl defers to this method.
  fn debug_fmt(&self, f: &mut Formatter<'_>, prefix: &str) -> std::fmt::Result {
    let inner_prefix = format!("{}{}", prefix, " ".repeat(DISPLAY_INDENT));
    writeln!(f, "{}Language {{", prefix)?;
    writeln!(f, "{}name: {}", inner_prefix, self.name)?;
    writeln!(f, "{}id: {}", inner_prefix, self.id)?;
    writeln!(f, "{}frozen: {}", inner_prefix, self.frozen)?;

    let sorts = self.sorts.iter().map(|sort| {
      let parents = self.sorts.parents(sort).map(|p| p.name.to_string()).collect::<Vec<_>>();
      match parents.is_empty() {
        true  => sort.repr(FormatStyle::Input),
        false => format!("{} < {}", sort.repr(FormatStyle::Input), parents.join(", ")),
      }
    });
    format_named_list(f, &inner_prefix, "sorts", sorts)?;

    if self.symbols.predicate_count() > 0 {
      format_named_list(f, &inner_prefix, "predicates", self.predicates().map(|p| p.repr(FormatStyle::Input)))?;
    }
    if self.symbols.function_count() > 0 {
      format_named_list(f, &inner_prefix, "functions", self.functions().map(|x| x.repr(FormatStyle::Input)))?;
    }
    if self.constants().next().is_some() {
      format_named_list(f, &inner_prefix, "constants", self.constants().map(|c| c.repr(FormatStyle::Input)))?;
    }
    if !self.operators.is_empty() {
      writeln!(f, "{}operators: {:?}", inner_prefix, self.operators)?;
    }
    writeln!(f, "{}}}", prefix)
  }
}

impl Display for Language {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}: language with {} sorts, {} function symbols, {} predicate symbols and {} variables",
      self.name,
      self.sorts.len(),
      self.symbols.function_count(),
      self.symbols.predicate_count(),
      self.symbols.variable_count()
    )
  }
}

impl Debug for Language {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.debug_fmt(f, "")
  }
}

/// Helper function to format a named list of something:
/// ```txt
/// thing_name: [
///   thing1
///   thing2
/// ]
/// ```
fn format_named_list(
  f     : &mut Formatter<'_>,
  prefix: &str,
  name  : &str,
  list  : impl Iterator<Item = String>
) -> std::fmt::Result
{
  let tab = " ".repeat(DISPLAY_INDENT);
  writeln!(f, "{}{}: [", prefix, name)?;
  for item in list {
    writeln!(f, "{}{}{}", prefix, tab, item)?;
  }
  writeln!(f, "{}]", prefix)
}
