//! Transducer Loop
//!
//! Drives the cursor across normalized input, consulting the non-rule
//! sub-table first, then the rule sub-table, then falling back to emitting
//! the input character unchanged. No backtracking: once a match is chosen
//! its span is committed and the cursor jumps past it.

use super::evaluator;
use super::matcher::SubTable;

pub(crate) fn run(non_rule: &SubTable, rule: &SubTable, text: &[char]) -> String {
    let mut output = String::new();
    let mut cur_end = 0usize;

    for cur in 0..text.len() {
        if cur < cur_end {
            continue;
        }

        if let Some((pattern, len)) = non_rule.find_at(text, cur) {
            output.push_str(pattern.replace);
            cur_end = cur + len;
            continue;
        }

        if let Some((pattern, len)) = rule.find_at(text, cur) {
            cur_end = cur + len;
            match evaluator::evaluate(pattern.rules, text, cur, cur_end) {
                Some(replacement) => output.push_str(replacement),
                None => output.push_str(pattern.replace),
            }
            continue;
        }

        output.push(text[cur]);
        cur_end = cur + 1;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ConditionalRule, MatchPredicate, Pattern, PredicateKind, Scope};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn non_rule_pattern_wins_over_rule_pattern_at_same_cursor() {
        let non_rule = SubTable::build(vec![Pattern {
            find: "a",
            replace: "NONRULE",
            rules: &[],
        }]);
        let rule = SubTable::build(vec![Pattern {
            find: "a",
            replace: "RULE-DEFAULT",
            rules: &[ConditionalRule {
                matches: &[MatchPredicate {
                    kind: PredicateKind::Prefix,
                    scope: Scope::Punctuation,
                    negate: false,
                }],
                replace: "RULE-FIRED",
            }],
        }]);
        let text = chars("a");
        assert_eq!(run(&non_rule, &rule, &text), "NONRULE");
    }

    #[test]
    fn unmatched_characters_pass_through() {
        let non_rule = SubTable::build(vec![Pattern {
            find: "zz",
            replace: "Z",
            rules: &[],
        }]);
        let rule = SubTable::build(vec![]);
        let text = chars("abc");
        assert_eq!(run(&non_rule, &rule, &text), "abc");
    }

    #[test]
    fn cursor_never_reprocesses_a_consumed_span() {
        let non_rule = SubTable::build(vec![Pattern {
            find: "ab",
            replace: "X",
            rules: &[],
        }]);
        let rule = SubTable::build(vec![]);
        // If "ab" were reprocessed at cur=1, "b" alone would also try to
        // match; since it doesn't appear in the table it would pass through,
        // which would make the output "Xb" instead of "X".
        let text = chars("ab");
        assert_eq!(run(&non_rule, &rule, &text), "X");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let non_rule = SubTable::build(vec![]);
        let rule = SubTable::build(vec![]);
        assert_eq!(run(&non_rule, &rule, &[]), "");
    }
}
