/*!

A sort (represented in code by the [`Sort`](crate::core::sort::Sort) struct) is a named value domain. Sorts are
organized into a hierarchy by the subtype relation: `t ⊑ st` says every value of `t` is also a value of `st`. A sort
may have several parents, so the hierarchy is a directed acyclic graph rather than a tree. It has a single root,
`Object`, of which every other sort is a strict subtype.

## Lifecycle and Ownership

`Sort`s are owned by the [`SortRegistry`](crate::core::sort::registry::SortRegistry) of the `Language` in which they
are defined and share its lifetime. The registry is append-only: sorts are never renamed or removed, and hierarchy
edges are never removed. Callers hold `RcSort` handles, which compare by identity (language and index), never by
structure.

## The Promotion Set

The promotion set of a sort is the set of its strict ancestors: every sort reachable by following parent edges.
Subtype queries reduce to membership in the promotion set:

 - `is_subtype(t, st)` iff `t == st` or `st ∈ promotion_set(t)`,
 - `is_strict_subtype(t, st)` iff `st ∈ promotion_set(t)`,
 - `are_vertically_related(t1, t2)` iff either is a subtype of the other.

Promotion sets are kept closed eagerly. There is no separate "finalize" step; every registration leaves the closure
consistent with the edge set, so a query never sees a stale relation. See the
[`registry`](crate::core::sort::registry) module for how the closure is extended.

## Cycles

A cycle would make two distinct sorts mutual subtypes. A new sort can never close a cycle, because nothing is below
it yet. Adding an edge between existing sorts can, and such an edge is rejected before anything is mutated.

## Interval Sorts

An interval sort carries bounds and a cast function from external literals into its domain. The four builtin sorts
`Object ⊐ Real ⊐ Integer ⊐ Natural` are created by the [`BuiltinSortFactory`](builtin::BuiltinSortFactory) for every
language; all but `Object` are intervals.

*/

pub mod builtin;
pub mod interval;
pub mod registry;
pub mod sort;

pub use sort::*;
