/*!

There are different text representations possible for sorts and symbols that we want depending on the context: a
bare name in messages, a declaration when echoing a language back as input, extra bookkeeping when debugging. This
module provides a unified API for formatting them across the project.

*/

use std::{
  fmt::Display,
  iter::once,
};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FormatStyle {
  #[default]
  Default, // Use the default formatting
  Simple,  // Just the name
  Input,   // Format as a declaration, if possible.
  Debug,   // Format with extra debugging information
}

pub trait Formattable {
  /// Writes a text representation of `self` according to the given `FormatStyle`.
  fn repr(&self, style: FormatStyle) -> String;
}

/**
Any type that implements `Formattable` can trivially implement `Display` as in this example:

```ignore
impl Display for Predicate {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}
```
*/
impl Display for dyn Formattable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", Formattable::repr(self, FormatStyle::Default))
  }
}

/// Join a list of things that can be displayed as string with a given separator.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  let mut iter = iter.map(|t| t.to_string());
  iter.next()
      .into_iter()
      .chain(iter.flat_map(|s| once(sep.to_string()).chain(once(s))))
      .collect()
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join_string_separates_only_between_items() {
    assert_eq!(join_string(["truck", "city"].iter(), ", "), "truck, city");
    assert_eq!(join_string(["truck"].iter(), ", "), "truck");
    assert_eq!(join_string(Vec::<u8>::new().iter(), ", "), "");
  }
}
