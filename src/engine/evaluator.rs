//! Rule Evaluator
//!
//! For a matched rule-bearing pattern, evaluates each [`ConditionalRule`] in
//! order and returns the first one whose predicates all hold. Predicate
//! evaluation reproduces two deliberate boundary asymmetries from the
//! reference implementation:
//!
//! - `punctuation` treats out-of-bounds as a boundary (word edges count as
//!   punctuation); `vowel`/`consonant` require an in-bounds character.
//! - `exact` uses a strict upper bound (`end < len(text)`), so an `exact`
//!   suffix window touching the very end of the string is rejected even
//!   though it would otherwise fit.

use crate::classify;
use crate::data::{ConditionalRule, MatchPredicate, PredicateKind, Scope};

/// Evaluates `rules` in order against the span `[cur, cur_end)` of `text`.
/// Returns the replacement of the first rule whose predicates all hold, or
/// `None` if no rule fires (the caller should fall back to the pattern's
/// default `replace`).
pub(crate) fn evaluate(
    rules: &[ConditionalRule],
    text: &[char],
    cur: usize,
    cur_end: usize,
) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| rule.matches.iter().all(|m| holds(m, text, cur, cur_end)))
        .map(|rule| rule.replace)
}

fn holds(predicate: &MatchPredicate, text: &[char], cur: usize, cur_end: usize) -> bool {
    let raw = match predicate.scope {
        Scope::Punctuation => punctuation_raw(predicate.kind, text, cur, cur_end),
        Scope::Vowel => bounded_raw(predicate.kind, text, cur, cur_end, classify::is_vowel),
        Scope::Consonant => bounded_raw(predicate.kind, text, cur, cur_end, classify::is_consonant),
        Scope::Exact(value) => exact_raw(predicate.kind, text, cur, cur_end, value),
    };
    raw != predicate.negate
}

fn punctuation_raw(kind: PredicateKind, text: &[char], cur: usize, cur_end: usize) -> bool {
    match kind {
        PredicateKind::Prefix => {
            cur == 0 || classify::is_punctuation(text[cur - 1])
        }
        PredicateKind::Suffix => {
            cur_end >= text.len() || classify::is_punctuation(text[cur_end])
        }
    }
}

fn bounded_raw(
    kind: PredicateKind,
    text: &[char],
    cur: usize,
    cur_end: usize,
    class: impl Fn(char) -> bool,
) -> bool {
    match kind {
        PredicateKind::Prefix => cur > 0 && class(text[cur - 1]),
        PredicateKind::Suffix => cur_end < text.len() && class(text[cur_end]),
    }
}

fn exact_raw(kind: PredicateKind, text: &[char], cur: usize, cur_end: usize, value: &str) -> bool {
    let value_chars: Vec<char> = value.chars().collect();
    let len = value_chars.len();
    let (start, end) = match kind {
        PredicateKind::Prefix => (cur as isize - len as isize, cur),
        PredicateKind::Suffix => (cur_end as isize, cur_end + len),
    };
    // Strict upper bound, per the reference implementation: a window ending
    // exactly at the string boundary is rejected, not accepted.
    start >= 0 && end < text.len() && text[start as usize..end] == value_chars[..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    const fn predicate(kind: PredicateKind, scope: Scope, negate: bool) -> MatchPredicate {
        MatchPredicate {
            kind,
            scope,
            negate,
        }
    }

    #[test]
    fn punctuation_prefix_true_at_string_start() {
        let text = chars("oi");
        assert!(holds(
            &predicate(PredicateKind::Prefix, Scope::Punctuation, false),
            &text,
            0,
            2
        ));
    }

    #[test]
    fn punctuation_suffix_true_at_string_end() {
        let text = chars("oi");
        assert!(holds(
            &predicate(PredicateKind::Suffix, Scope::Punctuation, false),
            &text,
            0,
            2
        ));
    }

    #[test]
    fn vowel_prefix_false_at_string_start() {
        let text = chars("oi");
        assert!(!holds(
            &predicate(PredicateKind::Prefix, Scope::Vowel, false),
            &text,
            0,
            2
        ));
    }

    #[test]
    fn consonant_prefix_false_at_string_start() {
        let text = chars("oi");
        assert!(!holds(
            &predicate(PredicateKind::Prefix, Scope::Consonant, false),
            &text,
            0,
            2
        ));
    }

    #[test]
    fn negated_punctuation_fails_at_boundary() {
        let text = chars("oi");
        // !punctuation at cur==0: raw punctuation condition is true (OOB
        // counts as punctuation), so the negated predicate must fail.
        assert!(!holds(
            &predicate(PredicateKind::Prefix, Scope::Punctuation, true),
            &text,
            0,
            2
        ));
    }

    #[test]
    fn consonant_prefix_true_after_a_consonant() {
        let text = chars("koi");
        assert!(holds(
            &predicate(PredicateKind::Prefix, Scope::Consonant, false),
            &text,
            1,
            3
        ));
    }

    #[test]
    fn exact_suffix_rejects_window_touching_string_end() {
        // text = "a`", matching "a" at cur=0..1, suffix exact "`" would need
        // window [1, 2) but len(text) == 2, so end < len(text) fails (2 < 2
        // is false) and the predicate is rejected despite an apparent match.
        let text = chars("a`");
        assert!(!holds(
            &predicate(
                PredicateKind::Suffix,
                Scope::Exact("`"),
                false
            ),
            &text,
            0,
            1
        ));
    }

    #[test]
    fn exact_suffix_accepts_window_strictly_inside() {
        let text = chars("a`x");
        assert!(holds(
            &predicate(
                PredicateKind::Suffix,
                Scope::Exact("`"),
                false
            ),
            &text,
            0,
            1
        ));
    }

    #[test]
    fn exact_prefix_rejects_window_before_string_start() {
        let text = chars("x");
        assert!(!holds(
            &predicate(PredicateKind::Prefix, Scope::Exact("ab"), false),
            &text,
            0,
            1
        ));
    }

    #[test]
    fn evaluate_returns_first_firing_rule() {
        let rules = [
            ConditionalRule {
                matches: &const { [predicate(PredicateKind::Prefix, Scope::Consonant, false)] },
                replace: "first",
            },
            ConditionalRule {
                matches: &const { [predicate(PredicateKind::Prefix, Scope::Punctuation, false)] },
                replace: "second",
            },
        ];
        let text = chars("oi");
        assert_eq!(evaluate(&rules, &text, 0, 2), Some("second"));
    }

    #[test]
    fn evaluate_returns_none_when_no_rule_fires() {
        let rules = [ConditionalRule {
            matches: &const { [predicate(PredicateKind::Prefix, Scope::Consonant, false)] },
            replace: "first",
        }];
        let text = chars("oi");
        assert_eq!(evaluate(&rules, &text, 0, 2), None);
    }
}
