//! Whole-word and whole-phrase match patterns for one keyword.

use crate::matching::variants::variants;

/// Builds boundary-anchored regex pattern strings for a normalized keyword.
///
/// A single word yields one pattern per morphological variant. A multi-word
/// phrase yields the literal phrase first, then one pattern per variant of
/// the *last* word ("tower crane" also matches "tower cranes"). Interior
/// words are matched literally; plurals land overwhelmingly on the final
/// noun of a phrase, so varying interior words buys noise, not recall.
///
/// Callers must not pass an empty or whitespace-only keyword; such input
/// produces no patterns.
pub fn patterns(phrase: &str) -> Vec<String> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let Some((last, head)) = words.split_last() else {
        return Vec::new();
    };

    if head.is_empty() {
        return variants(last).iter().map(|v| whole_word(v)).collect();
    }

    let mut out = vec![whole_phrase(head, last)];
    for variant in variants(last) {
        if variant.as_str() != *last {
            out.push(whole_phrase(head, &variant));
        }
    }
    out
}

fn whole_word(word: &str) -> String {
    format!(r"\b{}\b", regex::escape(word))
}

fn whole_phrase(head: &[&str], last: &str) -> String {
    let mut body = head
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join(r"\s+");
    body.push_str(r"\s+");
    body.push_str(&regex::escape(last));
    format!(r"\b{body}\b")
}
