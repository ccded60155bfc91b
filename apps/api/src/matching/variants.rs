//! Morphological variants of a single word.
//!
//! The generator deliberately over-produces: a linguistically wrong form
//! ("cranes" also yields "cran") can never cause a bad hit because every
//! variant is whole-word matched downstream. Precision comes from the word
//! boundaries, not from restricting the variant set.

use std::collections::BTreeSet;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Suffix shapes whose plural simply appends "es" (boxes, churches, ...).
const ES_SUFFIXES: [&str; 5] = ["sses", "shes", "ches", "xes", "zes"];

/// Returns the plausible singular/plural forms of `word`, always including
/// `word` itself. Expects a single already-normalized token; iteration
/// order is deterministic.
pub fn variants(word: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    out.insert(word.to_string());

    let n = word.chars().count();

    // Singular candidates: strip a plural suffix.
    if n > 3 && word.ends_with("ies") {
        out.insert(format!("{}y", &word[..word.len() - 3]));
    } else if let Some(stem) = word.strip_suffix("es") {
        if ES_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            out.insert(stem.to_string());
        } else if word.ends_with("ves") && n > 3 {
            let vstem = &word[..word.len() - 3];
            out.insert(word[..word.len() - 1].to_string()); // valves -> valve
            out.insert(format!("{vstem}f")); // wolves -> wolf
            out.insert(format!("{vstem}fe")); // knives -> knife
        } else {
            // Both shapes are candidates: cranes -> crane, buses -> bus.
            out.insert(word[..word.len() - 1].to_string());
            out.insert(stem.to_string());
        }
    } else if word.ends_with('s') && !word.ends_with("ss") {
        out.insert(word[..word.len() - 1].to_string());
    }

    // Plural candidates, derived from the word as given.
    if let Some(stem) = word.strip_suffix('y') {
        if n > 2 && !stem.ends_with(VOWELS) {
            out.insert(format!("{stem}ies"));
        }
    } else if word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
        || word.ends_with('z')
    {
        out.insert(format!("{word}es"));
    } else if let Some(stem) = word.strip_suffix('f') {
        out.insert(format!("{stem}ves"));
    } else if let Some(stem) = word.strip_suffix("fe") {
        out.insert(format!("{stem}ves"));
    }

    if !word.ends_with('s') {
        out.insert(format!("{word}s"));
    }

    out
}
