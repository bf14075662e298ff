/*!

The catalog of builtin predicate and function symbols: the comparison predicates and the arithmetic, special and
random functions a downstream term layer may interpret over interval sorts. The function symbols double as the
operator kinds of the [`OperatorDispatchTable`](crate::core::operator::OperatorDispatchTable).

*/

use std::{
  fmt::{Display, Formatter},
  str::FromStr,
};

use crate::api::error::{InvalidUse, LanguageError};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinPredicateSymbol {
  Eq,
  Ne,
  Lt,
  Le,
  Gt,
  Ge,
}

impl BuiltinPredicateSymbol {
  pub const ALL: [BuiltinPredicateSymbol; 6] = [
    BuiltinPredicateSymbol::Eq,
    BuiltinPredicateSymbol::Ne,
    BuiltinPredicateSymbol::Lt,
    BuiltinPredicateSymbol::Le,
    BuiltinPredicateSymbol::Gt,
    BuiltinPredicateSymbol::Ge,
  ];

  pub fn symbol(self) -> &'static str {
    match self {
      BuiltinPredicateSymbol::Eq => "=",
      BuiltinPredicateSymbol::Ne => "!=",
      BuiltinPredicateSymbol::Lt => "<",
      BuiltinPredicateSymbol::Le => "<=",
      BuiltinPredicateSymbol::Gt => ">",
      BuiltinPredicateSymbol::Ge => ">=",
    }
  }

  /// The predicate that holds exactly when `self` does not.
  pub fn complement(self) -> BuiltinPredicateSymbol {
    match self {
      BuiltinPredicateSymbol::Eq => BuiltinPredicateSymbol::Ne,
      BuiltinPredicateSymbol::Ne => BuiltinPredicateSymbol::Eq,
      BuiltinPredicateSymbol::Lt => BuiltinPredicateSymbol::Ge,
      BuiltinPredicateSymbol::Le => BuiltinPredicateSymbol::Gt,
      BuiltinPredicateSymbol::Gt => BuiltinPredicateSymbol::Le,
      BuiltinPredicateSymbol::Ge => BuiltinPredicateSymbol::Lt,
    }
  }
}

impl Display for BuiltinPredicateSymbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for BuiltinPredicateSymbol {
  type Err = LanguageError;

  fn from_str(symbol: &str) -> Result<Self, Self::Err> {
    BuiltinPredicateSymbol::ALL
        .into_iter()
        .find(|candidate| candidate.symbol() == symbol)
        .ok_or_else(|| LanguageError::InvalidUse(InvalidUse::UnknownOperatorSymbol(symbol.to_string())))
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinFunctionSymbol {
  // Arithmetic
  Add,
  Sub,
  Mul,
  MatMul,
  Div,
  Pow,
  Mod,

  // Special
  Min,
  Max,
  Abs,
  Sin,
  Cos,
  Tan,
  Atan,
  Asin,
  Exp,
  Log,
  Erf,
  Erfc,
  Sgn,
  Sqrt,

  // Random variables and tensor operations
  Normal,
  Gamma,
  Kron,
  Dirac,
  Bernoulli,
  Discrete,
  Poisson,
}

impl BuiltinFunctionSymbol {
  pub const ALL: [BuiltinFunctionSymbol; 28] = [
    BuiltinFunctionSymbol::Add,
    BuiltinFunctionSymbol::Sub,
    BuiltinFunctionSymbol::Mul,
    BuiltinFunctionSymbol::MatMul,
    BuiltinFunctionSymbol::Div,
    BuiltinFunctionSymbol::Pow,
    BuiltinFunctionSymbol::Mod,
    BuiltinFunctionSymbol::Min,
    BuiltinFunctionSymbol::Max,
    BuiltinFunctionSymbol::Abs,
    BuiltinFunctionSymbol::Sin,
    BuiltinFunctionSymbol::Cos,
    BuiltinFunctionSymbol::Tan,
    BuiltinFunctionSymbol::Atan,
    BuiltinFunctionSymbol::Asin,
    BuiltinFunctionSymbol::Exp,
    BuiltinFunctionSymbol::Log,
    BuiltinFunctionSymbol::Erf,
    BuiltinFunctionSymbol::Erfc,
    BuiltinFunctionSymbol::Sgn,
    BuiltinFunctionSymbol::Sqrt,
    BuiltinFunctionSymbol::Normal,
    BuiltinFunctionSymbol::Gamma,
    BuiltinFunctionSymbol::Kron,
    BuiltinFunctionSymbol::Dirac,
    BuiltinFunctionSymbol::Bernoulli,
    BuiltinFunctionSymbol::Discrete,
    BuiltinFunctionSymbol::Poisson,
  ];

  pub fn symbol(self) -> &'static str {
    match self {
      BuiltinFunctionSymbol::Add       => "+",
      BuiltinFunctionSymbol::Sub       => "-",
      BuiltinFunctionSymbol::Mul       => "*",
      BuiltinFunctionSymbol::MatMul    => "@",
      BuiltinFunctionSymbol::Div       => "/",
      BuiltinFunctionSymbol::Pow       => "**",
      BuiltinFunctionSymbol::Mod       => "%",
      BuiltinFunctionSymbol::Min       => "min",
      BuiltinFunctionSymbol::Max       => "max",
      BuiltinFunctionSymbol::Abs       => "abs",
      BuiltinFunctionSymbol::Sin       => "sin",
      BuiltinFunctionSymbol::Cos       => "cos",
      BuiltinFunctionSymbol::Tan       => "tan",
      BuiltinFunctionSymbol::Atan      => "atan",
      BuiltinFunctionSymbol::Asin      => "asin",
      BuiltinFunctionSymbol::Exp       => "exp",
      BuiltinFunctionSymbol::Log       => "log",
      BuiltinFunctionSymbol::Erf       => "erf",
      BuiltinFunctionSymbol::Erfc      => "erfc",
      BuiltinFunctionSymbol::Sgn       => "sgn",
      BuiltinFunctionSymbol::Sqrt      => "sqrt",
      BuiltinFunctionSymbol::Normal    => "normal",
      BuiltinFunctionSymbol::Gamma     => "gamma",
      BuiltinFunctionSymbol::Kron      => "kron",
      BuiltinFunctionSymbol::Dirac     => "dirac",
      BuiltinFunctionSymbol::Bernoulli => "bernoulli",
      BuiltinFunctionSymbol::Discrete  => "discrete",
      BuiltinFunctionSymbol::Poisson   => "poisson",
    }
  }
}

impl Display for BuiltinFunctionSymbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for BuiltinFunctionSymbol {
  type Err = LanguageError;

  fn from_str(symbol: &str) -> Result<Self, Self::Err> {
    BuiltinFunctionSymbol::ALL
        .into_iter()
        .find(|candidate| candidate.symbol() == symbol)
        .ok_or_else(|| LanguageError::InvalidUse(InvalidUse::UnknownOperatorSymbol(symbol.to_string())))
  }
}

// region Groupings

pub fn equality_predicates() -> [BuiltinPredicateSymbol; 2] {
  [BuiltinPredicateSymbol::Eq, BuiltinPredicateSymbol::Ne]
}

pub fn arithmetic_predicates() -> [BuiltinPredicateSymbol; 4] {
  use BuiltinPredicateSymbol::*;
  [Lt, Le, Gt, Ge]
}

pub fn arithmetic_binary_functions() -> [BuiltinFunctionSymbol; 6] {
  use BuiltinFunctionSymbol::*;
  [Add, Sub, Mul, Div, Pow, Mod]
}

pub fn arithmetic_unary_functions() -> [BuiltinFunctionSymbol; 1] {
  [BuiltinFunctionSymbol::Sqrt]
}

pub fn special_binary_functions() -> [BuiltinFunctionSymbol; 2] {
  [BuiltinFunctionSymbol::Min, BuiltinFunctionSymbol::Max]
}

pub fn special_unary_functions() -> [BuiltinFunctionSymbol; 11] {
  use BuiltinFunctionSymbol::*;
  [Abs, Sin, Cos, Tan, Atan, Asin, Exp, Log, Erf, Erfc, Sgn]
}

pub fn random_binary_functions() -> [BuiltinFunctionSymbol; 2] {
  [BuiltinFunctionSymbol::Normal, BuiltinFunctionSymbol::Gamma]
}

// No unary random functions yet. Kept so callers can iterate over every group uniformly.
pub fn random_unary_functions() -> [BuiltinFunctionSymbol; 0] {
  []
}

// endregion
