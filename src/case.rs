//! Case Normalizer
//!
//! The sole interface between raw input and every other component. Converts
//! each character to lowercase unless [`classify::is_case_sensitive`] holds
//! for it, in which case its case is preserved — the convention treats `o`
//! vs `O`, `r` vs `R`, etc. as distinct phonemes, while case elsewhere (`b`
//! vs `B`, `k` vs `K`) is incidental.

use crate::classify;

/// Normalizes `text`, producing a string of equal character count.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if classify::is_case_sensitive(c) {
                c
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
