/*!

The public API of the library. Everything a client touches is created by, and owned by, a
[`Language`](language::Language).

*/

pub mod constant;
pub mod dump;
pub mod error;
pub mod language;
pub mod reference;
pub mod symbol;
pub mod variable;

#[cfg(test)]
mod tests;
