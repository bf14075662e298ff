/*!

Types/type aliases that abstract over the implementing backing type.

A motivating example is `IString`, the interned string used for every symbol name. A number of external crates could
provide this functionality. This module redirects to whatever chosen implementation we want, so the rest of the
library never names the backing crate directly.

*/

mod nat_set;

// Logging
pub mod log;

// A set of natural numbers
pub use nat_set::NatSet;

// Interned string.
pub use string_cache::DefaultAtom as IString;

// Hashing containers. Sort and symbol names are short, so the standard hasher is fine for now.
pub use std::collections::{HashMap, HashSet};
