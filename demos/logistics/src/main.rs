mod domain;

use sortlib::{
  log::{error, info, set_global_logging_threshold},
  BuiltinFunctionSymbol,
  DomainValue,
  FormatStyle,
  Formattable,
  Language,
};

fn report(lang: &Language) {
  println!("{}", lang);
  println!("{:?}", lang);

  if let (Ok(airport), Ok(place), Ok(vehicle)) = (lang.get_sort("airport"), lang.get_sort("place"), lang.get_sort("vehicle")) {
    println!("airport ⊑ place: {}", lang.is_subtype(&airport, &place));
    println!("airport ⊑ vehicle: {}", lang.is_subtype(&airport, &vehicle));

    let ancestors: Vec<String> = lang.ancestors(&airport).map(|s| s.repr(FormatStyle::Simple)).collect();
    println!("ancestors of airport: {}", ancestors.join(", "));
  }

  for constant in lang.constants() {
    println!("{}", constant.repr(FormatStyle::Input));
  }
}

fn main() {
  set_global_logging_threshold(2);

  let lang = match domain::build() {
    Ok(lang) => lang,
    Err(e) => {
      error!(0, "could not build the logistics language: {}", e);
      return;
    }
  };
  report(&lang);

  // The logistics language is frozen, so operators are bound in a language of their own.
  let mut arithmetic = Language::new("arithmetic");
  let bound = arithmetic.register_operator(
    BuiltinFunctionSymbol::Add,
    "Natural",
    "Natural",
    |a: &DomainValue, b: &DomainValue| DomainValue::Integer(a.as_i64().unwrap_or(0) + b.as_i64().unwrap_or(0)),
  );
  if let Err(e) = bound {
    error!(0, "could not bind +: {}", e);
    return;
  }

  let (two, forty) = (DomainValue::Integer(2), DomainValue::Integer(40));
  match arithmetic.dispatch(BuiltinFunctionSymbol::Add, "Natural", "Natural", &two, &forty) {
    Ok(sum) => info!(1, "2 + 40 = {}", sum),
    Err(e)  => error!(1, "{}", e),
  }
  // Dispatch never promotes operand sorts.
  if let Err(e) = arithmetic.dispatch(BuiltinFunctionSymbol::Add, "Natural", "Real", &two, &forty) {
    info!(1, "Natural + Real is unbound: {}", e);
  }
}
