//! Rule table data: types, the canonical table, and construction-time validation.

pub mod patterns;
pub mod types;
mod validate;

pub use types::{ConditionalRule, MatchPredicate, Pattern, PredicateKind, Scope};
pub(crate) use validate::validate_patterns;
