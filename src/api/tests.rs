use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
  abstractions::{HashSet, IString},
  api::{
    error::{ErrorKind, InvalidUse, LanguageError},
    language::{language, Language},
    reference::{Element, Reference, SymbolKind},
  },
  core::{
    builtins::BuiltinFunctionSymbol,
    format::{FormatStyle, Formattable},
    sort::{
      builtin::BuiltinSort,
      interval::{CastRejection, DomainValue},
      RcSort,
    },
  },
};

fn logistics() -> Language {
  let mut lang = language("logistics");
  let location = lang.sort("location", &[]).unwrap();
  lang.sort("city", &[(&location).into()]).unwrap();
  let vehicle = lang.sort("vehicle", &[]).unwrap();
  lang.sort("truck", &[(&vehicle).into()]).unwrap();
  lang.predicate("at", &["vehicle".into(), "location".into()]).unwrap();
  lang.function("distance", &["location".into(), "location".into(), "Real".into()]).unwrap();
  lang
}

#[test]
fn builtin_sorts_form_a_chain() {
  let lang = Language::default();
  let chain = [lang.natural(), lang.integer(), lang.real(), lang.object()];

  for (i, lower) in chain.iter().enumerate() {
    for upper in &chain[i..] {
      assert!(lang.is_subtype(lower, upper), "{} should be a subtype of {}", lower, upper);
    }
    for upper in &chain[i + 1..] {
      assert!(!lang.is_subtype(upper, lower));
    }
  }
  assert!(lang.promotion_set(&lang.object()).unwrap().is_empty());
  assert_eq!(lang.builtin(BuiltinSort::Integer), lang.get_sort("Integer").unwrap());
  assert!(lang.sorts().all(|sort| sort.is_builtin()));
}

#[test]
fn user_sorts_default_to_object() {
  let mut lang = language("blocks");
  let item  = lang.sort("item", &[]).unwrap();
  let heavy = lang.sort("heavy_item", &["item".into()]).unwrap();

  assert!(lang.is_subtype(&heavy, &item));
  assert!(lang.is_subtype(&heavy, &lang.object()));
  assert!(lang.is_strict_subtype(&item, &lang.object()));
  assert!(!lang.is_subtype(&item, &heavy));
  assert!(!lang.are_vertically_related(&item, &lang.real()));
  assert_eq!(lang.parents(&heavy).collect::<Vec<_>>(), vec![&item]);
  assert_eq!(lang.ancestors(&heavy).count(), 2);
}

#[test]
fn interval_constants_are_cast() {
  let mut lang = Language::default();

  let three = lang.constant("3", "Integer").unwrap();
  assert_eq!(three.value(), Some(&DomainValue::Integer(3)));
  assert!(!three.is_named());
  assert!(!lang.has_constant("3"));

  let error = lang.constant("3.5", "Integer").unwrap_err();
  assert_eq!(error.kind(), ErrorKind::SemanticError);

  let error = lang.constant(-1, "Natural").unwrap_err();
  match error {
    LanguageError::SemanticError { reason, .. } => assert_eq!(reason, CastRejection::OutOfBounds),
    other => panic!("expected SemanticError, got {}", other),
  }

  let half = lang.constant("0.5", "Real").unwrap();
  assert_eq!(half.value().map(DomainValue::as_f64), Some(0.5));
}

#[test]
fn named_constants_are_stored() {
  let mut lang = logistics();
  let paris = lang.constant("paris", "city").unwrap();

  assert!(paris.is_named());
  assert_eq!(lang.get_constant("paris").unwrap(), paris);
  assert_eq!(lang.constant("paris", "location").unwrap_err().kind(), ErrorKind::DuplicateConstant);
  assert_eq!(lang.constants().count(), 1);
}

#[test]
fn lookups_report_missing_names() {
  let lang = logistics();

  assert!(lang.has_sort("city"));
  assert!(!lang.has_sort("NoSuchSort"));
  assert_eq!(lang.get_sort("NoSuchSort").unwrap_err().kind(), ErrorKind::UndefinedSort);
  assert!(!lang.has_sort("NoSuchSort"));
  assert_eq!(lang.get_sort("ship").unwrap_err().kind(), ErrorKind::UndefinedSort);
  assert_eq!(lang.get_predicate("in").unwrap_err().kind(), ErrorKind::UndefinedPredicate);
  assert_eq!(lang.get_function("cost").unwrap_err().kind(), ErrorKind::UndefinedFunction);
  assert_eq!(lang.get_constant("rome").unwrap_err().kind(), ErrorKind::UndefinedConstant);
  assert_eq!(lang.get_function("distance").unwrap().arity(), 3);
}

#[test]
fn failed_registration_changes_nothing() {
  let mut lang = logistics();
  let before   = lang.dump();

  let error = lang.sort("city", &[]).unwrap_err();
  match error {
    LanguageError::DuplicateSort { existing } => assert_eq!(existing, lang.get_sort("city").unwrap()),
    other => panic!("expected DuplicateSort, got {}", other),
  }
  assert_eq!(lang.sort("ship", &["vessel".into()]).unwrap_err().kind(), ErrorKind::UndefinedElement);
  assert_eq!(lang.predicate("at", &["city".into()]).unwrap_err().kind(), ErrorKind::DuplicatePredicate);
  assert_eq!(lang.function("cost", &["route".into()]).unwrap_err().kind(), ErrorKind::UndefinedElement);

  assert!(!lang.has_sort("ship"));
  assert!(!lang.has_function("cost"));
  assert_eq!(lang.dump(), before);
}

#[test]
fn resolution_accepts_names_and_handles() {
  let mut lang = logistics();
  let at = lang.get_predicate("at").unwrap();
  let x  = lang.variable("x", "truck").unwrap();

  assert_eq!(lang.resolve("at", SymbolKind::Predicate).unwrap(), Element::Predicate(at.clone()));
  assert_eq!(lang.resolve(&at, SymbolKind::Predicate).unwrap(), Element::Predicate(at.clone()));
  assert_eq!(lang.resolve(&x, SymbolKind::Variable).unwrap(), Element::Variable(x.clone()));

  let error = lang.resolve(&at, SymbolKind::Sort).unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::UnexpectedElement { .. })));

  let error = lang.resolve("x", SymbolKind::Variable).unwrap_err();
  assert_eq!(error, LanguageError::InvalidUse(InvalidUse::NotANamespace(SymbolKind::Variable)));
}

#[test]
fn variables_are_not_unique() {
  let mut lang = logistics();
  let first  = lang.variable("x", "truck").unwrap();
  let second = lang.variable("x", "city").unwrap();

  assert_ne!(first, second);
  assert_eq!(first.repr(FormatStyle::Input), "?x: truck");
  assert_eq!(lang.variables().cloned().collect::<Vec<_>>(), vec![first, second]);
}

#[test]
fn elements_of_other_languages_are_rejected() {
  let mut first  = logistics();
  let mut second = logistics();
  let city       = first.get_sort("city").unwrap();
  let other_city = second.get_sort("city").unwrap();

  assert_ne!(city, other_city);
  assert_ne!(first.id(), second.id());
  assert!(!second.is_subtype(&city, &second.object()));
  assert!(second.promotion_set(&city).is_none());

  let error = second.predicate("in", &[(&city).into()]).unwrap_err();
  assert_eq!(error.kind(), ErrorKind::LanguageMismatch);
  assert!(!second.has_predicate("in"));

  // A foreign parent is a structural misuse rather than a mismatched argument.
  let error = second.sort("capital", &[Reference::from(&city)]).unwrap_err();
  assert_eq!(error.kind(), ErrorKind::LanguageError);
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::ForeignParent { .. })));
  assert!(!second.has_sort("capital"));

  let error = first.set_parent(&city, &other_city).unwrap_err();
  assert_eq!(error.kind(), ErrorKind::LanguageError);
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::ForeignParent { .. })));

  let error = first.interval("share", &second.integer(), 0, 10).unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::ForeignParent { .. })));

  // A foreign child is still a mismatch.
  let error = first.set_parent(&other_city, "location").unwrap_err();
  assert_eq!(error.kind(), ErrorKind::LanguageMismatch);

  assert!(!first.is_strict_subtype(&other_city, &first.object()));
  assert!(!first.are_vertically_related(&other_city, &other_city));
}

#[test]
fn set_parent_extends_descendants() {
  let mut lang = logistics();
  let asset = lang.sort("asset", &[]).unwrap();
  let truck = lang.get_sort("truck").unwrap();

  assert!(!lang.is_subtype(&truck, &asset));
  lang.set_parent("vehicle", &asset).unwrap();
  assert!(lang.is_subtype(&truck, &asset));
  assert!(lang.sort_hierarchy().any(|(child, parent)| &*child.name == "vehicle" && parent == &asset));

  let error = lang.set_parent(&asset, "truck").unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::Cycle { .. })));
  assert!(!lang.is_subtype(&asset, &truck));

  let error = lang.set_parent("Integer", &asset).unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::SealedSort { .. })));
}

#[test]
fn operators_dispatch_on_exact_sorts() {
  let mut lang = Language::default();
  let sum = |a: &DomainValue, b: &DomainValue| DomainValue::Integer(a.as_i64().unwrap_or(0) + b.as_i64().unwrap_or(0));
  let plus: BuiltinFunctionSymbol = "+".parse().unwrap();
  lang.register_operator(plus, "Integer", "Integer", sum).unwrap();

  let (two, three) = (DomainValue::Integer(2), DomainValue::Integer(3));
  let result = lang.dispatch(BuiltinFunctionSymbol::Add, "Integer", "Integer", &two, &three).unwrap();
  assert_eq!(result, DomainValue::Integer(5));

  // No promotion to a registered pair of supersorts.
  let error = lang.dispatch(plus, "Integer", "Real", &two, &DomainValue::from(3.0)).unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::UndefinedOperator { .. })));
  let error = lang.dispatch(BuiltinFunctionSymbol::Add, "Natural", "Natural", &two, &three).unwrap_err();
  assert_eq!(error.kind(), ErrorKind::LanguageError);

  // Rebinding replaces the handler.
  let product = |a: &DomainValue, b: &DomainValue| DomainValue::Integer(a.as_i64().unwrap_or(0) * b.as_i64().unwrap_or(0));
  lang.register_operator(BuiltinFunctionSymbol::Add, "Integer", "Integer", product).unwrap();
  let result = lang.dispatch(BuiltinFunctionSymbol::Add, "Integer", "Integer", &two, &three).unwrap();
  assert_eq!(result, DomainValue::Integer(6));
}

#[test]
fn user_intervals_inherit_the_cast() {
  let mut lang = logistics();
  let percent  = lang.interval("percent", "Integer", 0, 100).unwrap();

  assert!(percent.is_interval());
  assert!(lang.is_strict_subtype(&percent, &lang.integer()));
  assert_eq!(lang.constant("42", &percent).unwrap().value(), Some(&DomainValue::Integer(42)));
  assert_eq!(lang.constant("101", &percent).unwrap_err().kind(), ErrorKind::SemanticError);

  let error = lang.interval("grade", "city", 0, 10).unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::NotAnInterval { .. })));
  assert_eq!(lang.interval("count", "Natural", -1, 10).unwrap_err().kind(), ErrorKind::SemanticError);
  assert!(!lang.has_sort("count"));

  lang.check_well_formed().unwrap();
  lang.interval("nothing", "Integer", 5, 1).unwrap();
  assert_eq!(lang.check_well_formed().unwrap_err().kind(), ErrorKind::EmptySort);
}

#[test]
fn frozen_languages_reject_registration() {
  let mut lang = logistics();
  lang.freeze();
  assert!(lang.is_frozen());

  let frozen = |error: LanguageError| matches!(error, LanguageError::InvalidUse(InvalidUse::Frozen { .. }));
  assert!(frozen(lang.sort("ship", &[]).unwrap_err()));
  assert!(frozen(lang.predicate("in", &[]).unwrap_err()));
  assert!(frozen(lang.constant("rome", "city").unwrap_err()));
  assert!(frozen(lang.variable("y", "city").unwrap_err()));
  assert!(frozen(lang.set_parent("city", "vehicle").unwrap_err()));
  assert!(frozen(lang.function("cost", &["city".into()]).unwrap_err()));
  assert!(frozen(lang.interval("percent", "Integer", 0, 100).unwrap_err()));

  let sum = |a: &DomainValue, b: &DomainValue| DomainValue::Integer(a.as_i64().unwrap_or(0) + b.as_i64().unwrap_or(0));
  assert!(frozen(lang.register_operator(BuiltinFunctionSymbol::Add, "Integer", "Integer", sum).unwrap_err()));

  // Queries still work, and nothing was registered.
  assert!(lang.has_predicate("at"));
  assert!(!lang.has_sort("ship"));
  assert!(!lang.has_sort("percent"));
  assert!(!lang.has_function("cost"));
  let (two, three) = (DomainValue::Integer(2), DomainValue::Integer(3));
  let error = lang.dispatch(BuiltinFunctionSymbol::Add, "Integer", "Integer", &two, &three).unwrap_err();
  assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::UndefinedOperator { .. })));
}

#[test]
fn dump_and_display() {
  let lang = logistics();
  let dump = lang.dump();

  assert_eq!(dump.sorts.len(), 8);
  assert_eq!(&*dump.sorts[0].name, "Object");
  assert!(dump.sorts[0].builtin && dump.sorts[0].parents.is_empty());
  assert_eq!(dump.sorts[2].bounds, Some((DomainValue::Integer(-2147483647), DomainValue::Integer(2147483647))));

  let city = dump.sorts.iter().find(|entry| &*entry.name == "city").unwrap();
  assert_eq!(city.parents, vec![IString::from("location")]);
  assert_eq!(dump.predicates[0].domain, vec![IString::from("vehicle"), IString::from("location")]);
  assert_eq!(dump.functions[0].kind, SymbolKind::Function);

  assert_eq!(
    lang.to_string(),
    "logistics: language with 8 sorts, 1 function symbols, 1 predicate symbols and 0 variables"
  );
  let debug = format!("{:?}", lang);
  assert!(debug.contains("sort city < location"));
}

/// Builds a random hierarchy and compares `is_subtype` against reachability over the recorded edges.
#[test]
fn random_hierarchies_are_partial_orders() {
  let mut rng = StdRng::seed_from_u64(0x5017);

  for round in 0..20 {
    let mut lang  = language("random");
    let mut sorts: Vec<RcSort> = Vec::new();

    for i in 0..rng.random_range(2..16) {
      let parents: Vec<Reference> = sorts.iter().filter(|_| rng.random_bool(0.25)).map(Reference::from).collect();
      sorts.push(lang.sort(&format!("s{}_{}", round, i), &parents).unwrap());
    }
    for _ in 0..8 {
      let child  = &sorts[rng.random_range(0..sorts.len())];
      let parent = &sorts[rng.random_range(0..sorts.len())];
      // Cycles are rejected; anything else must succeed.
      if let Err(error) = lang.set_parent(child, parent) {
        assert!(matches!(error, LanguageError::InvalidUse(InvalidUse::Cycle { .. })));
      }
    }

    let all: Vec<RcSort> = lang.sorts().cloned().collect();
    let edges: HashSet<(usize, usize)> =
        lang.sort_hierarchy().map(|(child, parent)| (child.index(), parent.index())).collect();

    for a in &all {
      // Depth first search from `a` over the parent edges.
      let mut reachable = HashSet::new();
      let mut stack     = vec![a.index()];
      while let Some(current) = stack.pop() {
        for &(child, parent) in &edges {
          if child == current && reachable.insert(parent) {
            stack.push(parent);
          }
        }
      }

      assert!(lang.is_subtype(a, a));
      for b in &all {
        let expected = a == b || reachable.contains(&b.index());
        assert_eq!(lang.is_subtype(a, b), expected, "{} ⊑ {}", a, b);
        if a != b && lang.is_subtype(a, b) {
          assert!(!lang.is_subtype(b, a), "{} and {} form a cycle", a, b);
        }
        for c in &all {
          if lang.is_subtype(a, b) && lang.is_subtype(b, c) {
            assert!(lang.is_subtype(a, c));
          }
        }
      }
    }
  }
}
