/*!

Interval sorts are sorts whose values are bounded scalars. An `Interval` carries its bounds and a cast function that
interprets an external `Literal` as a `DomainValue` of the interval's representation.

Casting and bound checking are separate steps. `Interval::cast` only answers whether the literal can be represented
at all, for example whether `"3.5"` is an integer. `Interval::admit` additionally rejects values outside
`[lower, upper]`, which is what constant construction uses.

*/

use std::fmt::{Display, Formatter};

use total_float_wrap::TotalF64;

use crate::abstractions::IString;

/// Interprets an external literal in the representation of an interval sort, or returns `None` if it cannot.
pub type CastFn = fn(&Literal) -> Option<DomainValue>;

/// A value of an interval sort.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum DomainValue {
  Real(TotalF64),
  Integer(i64),
}

impl DomainValue {
  pub fn as_f64(&self) -> f64 {
    match self {
      DomainValue::Real(value)    => value.0,
      DomainValue::Integer(value) => *value as f64,
    }
  }

  /// Returns the value as an integer if it is one.
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      DomainValue::Integer(value) => Some(*value),
      DomainValue::Real(_)        => None,
    }
  }

  /// Integers compare exactly against integers; every other pairing compares as floating point. `NaN` is never `<=`
  /// anything.
  pub fn le(&self, other: &DomainValue) -> bool {
    match (self, other) {
      (DomainValue::Integer(a), DomainValue::Integer(b)) => a <= b,
      _ => self.as_f64() <= other.as_f64(),
    }
  }
}

impl From<i64> for DomainValue {
  fn from(value: i64) -> Self {
    DomainValue::Integer(value)
  }
}

impl From<f64> for DomainValue {
  fn from(value: f64) -> Self {
    DomainValue::Real(TotalF64::from(value))
  }
}

impl Display for DomainValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      DomainValue::Real(value)    => write!(f, "{}", value.0),
      DomainValue::Integer(value) => write!(f, "{}", value),
    }
  }
}

/// An external literal naming a constant. Text is what a parser would hand us; the numeric variants are for callers
/// building languages programmatically.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
  Text(IString),
  Integer(i64),
  Real(f64),
}

impl Literal {
  /// The apparent source type of the literal, used in error messages.
  pub fn type_name(&self) -> &'static str {
    match self {
      Literal::Text(_)    => "text",
      Literal::Integer(_) => "integer",
      Literal::Real(_)    => "real",
    }
  }

  /// The literal as a symbol name.
  pub fn to_name(&self) -> IString {
    match self {
      Literal::Text(text) => text.clone(),
      other               => IString::from(other.to_string()),
    }
  }
}

impl Display for Literal {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Literal::Text(text)     => write!(f, "{}", text),
      Literal::Integer(value) => write!(f, "{}", value),
      Literal::Real(value)    => write!(f, "{}", value),
    }
  }
}

impl From<&str> for Literal {
  fn from(text: &str) -> Self {
    Literal::Text(IString::from(text))
  }
}

impl From<String> for Literal {
  fn from(text: String) -> Self {
    Literal::Text(IString::from(text))
  }
}

impl From<IString> for Literal {
  fn from(text: IString) -> Self {
    Literal::Text(text)
  }
}

impl From<i64> for Literal {
  fn from(value: i64) -> Self {
    Literal::Integer(value)
  }
}

impl From<i32> for Literal {
  fn from(value: i32) -> Self {
    Literal::Integer(value as i64)
  }
}

impl From<u32> for Literal {
  fn from(value: u32) -> Self {
    Literal::Integer(value as i64)
  }
}

impl From<f64> for Literal {
  fn from(value: f64) -> Self {
    Literal::Real(value)
  }
}

/// Why a literal was not admitted by an interval sort.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CastRejection {
  /// The literal cannot be read in the sort's representation.
  NotRepresentable,
  /// The literal was read but lies outside the sort's bounds.
  OutOfBounds,
}

impl Display for CastRejection {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      CastRejection::NotRepresentable => write!(f, "not representable"),
      CastRejection::OutOfBounds      => write!(f, "out of bounds"),
    }
  }
}

// region Cast functions

/// Reads any numeric literal as a floating point value.
pub fn cast_to_real(literal: &Literal) -> Option<DomainValue> {
  match literal {
    Literal::Text(text)     => text.trim().parse::<f64>().ok().map(DomainValue::from),
    Literal::Integer(value) => Some(DomainValue::from(*value as f64)),
    Literal::Real(value)    => Some(DomainValue::from(*value)),
  }
}

/// Reads integral literals as a signed integer. Floats are accepted only when they have no fractional part.
pub fn cast_to_integer(literal: &Literal) -> Option<DomainValue> {
  match literal {
    Literal::Text(text)     => text.trim().parse::<i64>().ok().map(DomainValue::from),
    Literal::Integer(value) => Some(DomainValue::from(*value)),
    Literal::Real(value)    => {
      let in_range = *value >= i64::MIN as f64 && *value <= i64::MAX as f64;
      if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(DomainValue::from(*value as i64))
      } else {
        None
      }
    }
  }
}

// endregion

#[derive(Clone, Debug)]
pub struct Interval {
  pub lower: DomainValue,
  pub upper: DomainValue,
  cast     : CastFn,
}

impl Interval {
  pub fn new(lower: DomainValue, upper: DomainValue, cast: CastFn) -> Interval {
    Interval { lower, upper, cast }
  }

  #[inline(always)]
  pub fn cast_fn(&self) -> CastFn {
    self.cast
  }

  /// Interprets `literal` in this interval's representation without checking bounds.
  pub fn cast(&self, literal: &Literal) -> Result<DomainValue, CastRejection> {
    (self.cast)(literal).ok_or(CastRejection::NotRepresentable)
  }

  /// Casts `literal` and checks the result against the bounds.
  pub fn admit(&self, literal: &Literal) -> Result<DomainValue, CastRejection> {
    let value = self.cast(literal)?;
    if self.contains(&value) {
      Ok(value)
    } else {
      Err(CastRejection::OutOfBounds)
    }
  }

  pub fn contains(&self, value: &DomainValue) -> bool {
    self.lower.le(value) && value.le(&self.upper)
  }

  /// An interval is empty when its lower bound exceeds its upper bound.
  pub fn is_empty(&self) -> bool {
    !self.lower.le(&self.upper)
  }
}

impl Display for Interval {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}, {}]", self.lower, self.upper)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn integers() -> Interval {
    Interval::new(DomainValue::from(-10i64), DomainValue::from(10i64), cast_to_integer)
  }

  #[test]
  fn integer_cast_rejects_fractional_literals() {
    let interval = integers();
    assert_eq!(interval.cast(&Literal::from("3")), Ok(DomainValue::Integer(3)));
    assert_eq!(interval.cast(&Literal::from(4.0)), Ok(DomainValue::Integer(4)));
    assert_eq!(interval.cast(&Literal::from("3.5")), Err(CastRejection::NotRepresentable));
    assert_eq!(interval.cast(&Literal::from(3.5)), Err(CastRejection::NotRepresentable));
    assert_eq!(interval.cast(&Literal::from("three")), Err(CastRejection::NotRepresentable));
  }

  #[test]
  fn admit_checks_bounds() {
    let interval = integers();
    assert_eq!(interval.admit(&Literal::from(10)), Ok(DomainValue::Integer(10)));
    assert_eq!(interval.admit(&Literal::from(11)), Err(CastRejection::OutOfBounds));
    // Representable but out of bounds is still representable.
    assert!(interval.cast(&Literal::from(11)).is_ok());
  }

  #[test]
  fn real_cast_accepts_every_numeric_literal() {
    assert_eq!(cast_to_real(&Literal::from("2.5")), Some(DomainValue::from(2.5)));
    assert_eq!(cast_to_real(&Literal::from(2)), Some(DomainValue::from(2.0)));
    assert_eq!(cast_to_real(&Literal::from("x")), None);
  }

  #[test]
  fn nan_is_never_admitted() {
    let reals = Interval::new(DomainValue::from(-1.0), DomainValue::from(1.0), cast_to_real);
    assert_eq!(reals.admit(&Literal::from("NaN")), Err(CastRejection::OutOfBounds));
  }

  #[test]
  fn empty_interval() {
    let empty = Interval::new(DomainValue::from(2i64), DomainValue::from(1i64), cast_to_integer);
    assert!(empty.is_empty());
    assert!(!integers().is_empty());
  }
}
