/*!

The vocabulary of a small logistics domain: packages are carried by trucks between locations within a city and by
airplanes between airports.

*/

use sortlib::{Language, LanguageResult, Literal, Reference};

/// Sorts as `(name, parents)`, parents first.
const SORTS: &[(&str, &[&str])] = &[
  ("place",    &[]),
  ("location", &["place"]),
  ("airport",  &["location"]),
  ("city",     &["place"]),
  ("physobj",  &[]),
  ("package",  &["physobj"]),
  ("vehicle",  &["physobj"]),
  ("truck",    &["vehicle"]),
  ("airplane", &["vehicle"]),
];

const PREDICATES: &[(&str, &[&str])] = &[
  ("at",      &["physobj", "place"]),
  ("in",      &["package", "vehicle"]),
  ("in_city", &["location", "city"]),
];

const FUNCTIONS: &[(&str, &[&str])] = &[
  ("distance",  &["location", "location", "Real"]),
  ("fuel_left", &["vehicle", "Natural"]),
];

const OBJECTS: &[(&str, &str)] = &[
  ("boston",  "city"),
  ("logan",   "airport"),
  ("truck1",  "truck"),
  ("plane1",  "airplane"),
  ("parcel1", "package"),
];

fn references(names: &[&str]) -> Vec<Reference> {
  names.iter().map(|&name| Reference::from(name)).collect()
}

pub fn build() -> LanguageResult<Language> {
  let mut lang = Language::new("logistics");

  for &(name, parents) in SORTS {
    lang.sort(name, &references(parents))?;
  }
  lang.interval("load", "Natural", 0, 40)?;

  for &(name, sorts) in PREDICATES {
    lang.predicate(name, &references(sorts))?;
  }
  for &(name, sorts) in FUNCTIONS {
    lang.function(name, &references(sorts))?;
  }
  for &(name, sort) in OBJECTS {
    lang.constant(Literal::from(name), sort)?;
  }

  lang.check_well_formed()?;
  lang.freeze();
  Ok(lang)
}
