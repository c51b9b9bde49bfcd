//! Rule table data model: [`Pattern`], [`ConditionalRule`], [`MatchPredicate`].
//!
//! All types are plain, `'static`-borrowing value types — the canonical table
//! in [`super::patterns`] is a compile-time constant, and a caller extending
//! it via [`crate::engine::Engine::from_patterns`] supplies patterns built
//! from string literals the same way.

/// Which side of the matched span a [`MatchPredicate`] examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// Examine the character immediately before the matched span.
    Prefix,
    /// Examine the character immediately after the matched span.
    Suffix,
}

/// The context class a [`MatchPredicate`] checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Neither a vowel nor a consonant (including out-of-bounds and digits).
    Punctuation,
    /// A vowel; out-of-bounds never satisfies this.
    Vowel,
    /// A consonant; out-of-bounds never satisfies this.
    Consonant,
    /// An exact literal window adjacent to the matched span.
    Exact(&'static str),
}

/// A single context check, with negation pre-compiled into `negate` (the
/// source table's `!`-prefixed scope strings are resolved at table-build
/// time rather than re-parsed on every evaluation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPredicate {
    /// Which side of the match to examine.
    pub kind: PredicateKind,
    /// What context class to test for.
    pub scope: Scope,
    /// If true, the predicate holds when the raw condition is false.
    pub negate: bool,
}

/// A guarded alternative replacement: fires when every predicate in
/// `matches` holds.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalRule {
    /// Conjunction of context checks; all must hold for this rule to fire.
    pub matches: &'static [MatchPredicate],
    /// Replacement text used when this rule fires.
    pub replace: &'static str,
}

/// An ordered table entry: `find` a prefix of the remaining input, emit
/// `replace` (or, if `rules` is non-empty and one fires, that rule's
/// replacement instead).
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Non-empty string of input characters this pattern matches.
    pub find: &'static str,
    /// Default output when no rule fires (or when there are no rules).
    pub replace: &'static str,
    /// Ordered conditional rules; empty for a non-rule pattern.
    pub rules: &'static [ConditionalRule],
}

impl Pattern {
    /// True iff this pattern carries conditional rules.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}
