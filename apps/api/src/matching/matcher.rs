//! Keyword presence scan over normalized resume text.

use regex::Regex;

use crate::matching::normalize::normalize;
use crate::matching::patterns::patterns;

/// Partition of the input keywords into found and missing, each preserving
/// the input order. Every keyword lands in exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Scans `text` for each keyword. A keyword counts as found when any of its
/// whole-word patterns matches the normalized text; the check is
/// existence-only, so the first hit short-circuits and no positions or
/// counts are kept.
pub fn find_keywords(text: &str, keywords: &[String]) -> MatchResult {
    let haystack = normalize(text);
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for keyword in keywords {
        let normalized = normalize(keyword);
        let hit = patterns(&normalized)
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .any(|re| re.is_match(&haystack));

        if hit {
            found.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    MatchResult { found, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_literal_phrase_match() {
        let result = find_keywords("Experienced tower crane operator", &kw(&["tower crane"]));
        assert_eq!(result.found, kw(&["tower crane"]));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_phrase_matches_via_last_word_plural() {
        let result = find_keywords("I operate tower cranes daily", &kw(&["tower crane"]));
        assert_eq!(result.found, kw(&["tower crane"]));
    }

    #[test]
    fn test_single_word_matches_plural_form() {
        let result = find_keywords("managed several batteries on site", &kw(&["battery"]));
        assert_eq!(result.found, kw(&["battery"]));
    }

    #[test]
    fn test_whole_word_only() {
        // "java" must not match inside "javascript".
        let result = find_keywords("JavaScript developer", &kw(&["java"]));
        assert_eq!(result.missing, kw(&["java"]));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let result = find_keywords("PYTHON\n  developer", &kw(&["python Developer"]));
        assert_eq!(result.found, kw(&["python Developer"]));
    }

    #[test]
    fn test_partition_property() {
        let keywords = kw(&["Python", "AWS", "Docker", "tower crane"]);
        let result = find_keywords("Python and Docker experience", &keywords);
        assert_eq!(result.found.len() + result.missing.len(), keywords.len());
        for k in &keywords {
            let in_found = result.found.contains(k);
            let in_missing = result.missing.contains(k);
            assert!(in_found ^ in_missing, "{k} must appear exactly once");
        }
    }

    #[test]
    fn test_order_preserved_within_each_partition() {
        let keywords = kw(&["Rust", "AWS", "Python", "Kafka"]);
        let result = find_keywords("Python shops often adopt Rust", &keywords);
        assert_eq!(result.found, kw(&["Rust", "Python"]));
        assert_eq!(result.missing, kw(&["AWS", "Kafka"]));
    }

    #[test]
    fn test_empty_keyword_list() {
        let result = find_keywords("any text at all", &[]);
        assert!(result.found.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        let result = find_keywords("", &kw(&["python"]));
        assert_eq!(result.missing, kw(&["python"]));
    }
}
