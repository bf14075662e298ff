/*!

The machinery behind a `Language`: the sort hierarchy and its closure, the namespaces of the symbol table, the
builtin symbol catalog, and operator dispatch. None of it checks for freezing; that is the facade's job.

*/

pub mod builtins;
pub mod format;
pub mod namespace;
pub mod operator;
pub mod sort;
pub mod symbol_table;
