//! Negative tests: cases where a plausible-looking rule does *not* fire.

use avro_phonetic::Engine;

#[test]
fn backtick_is_consumed_and_emits_nothing() {
    let engine = Engine::new();
    // The backtick prevents the word-initial a -> আ rule from firing and is
    // itself swallowed, leaving only the vowel sign া.
    assert_eq!(engine.parse("a`"), "া");
}

#[test]
fn oo_after_a_consonant_does_not_trigger_the_word_initial_rule() {
    let engine = Engine::new();
    // Inside "boo", "oo" is preceded by the consonant "b", so the
    // word-initial rule for "oo" does not fire and the default vowel sign
    // ু is used instead.
    assert_eq!(engine.parse("boo"), "বু");
}

#[test]
fn unrecognized_characters_pass_through_unchanged() {
    let engine = Engine::new();
    assert_eq!(engine.parse("@#%"), "@#%");
}

#[test]
fn characters_outside_any_find_key_are_untouched_by_normalization_only() {
    let engine = Engine::new();
    // None of these characters begins any pattern's `find`, so the output
    // should equal the case-normalized input verbatim.
    let input = "!@#%&";
    assert_eq!(engine.parse(input), avro_phonetic::case::normalize(input));
}
