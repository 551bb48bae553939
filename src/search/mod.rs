//! Search specification
//!
//! A [`SearchSpec`] captures everything one paged search needs: base DN,
//! filter, attribute projection, scope, limits, and the alias-dereference
//! policy. It is validated at construction and immutable afterwards — the
//! cursor only ever mutates its own paging state, never the spec.

mod types;

pub use types::{DerefPolicy, Scope, SearchSpec, SearchSpecBuilder, SearchSpecDef, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
