//! Text normalization shared by resume text and keywords.

/// Lowercases `text`, collapses every run of whitespace into a single ASCII
/// space, and trims both ends. Total over any input: the empty string maps
/// to the empty string, and normalizing already-normalized text is a no-op.
///
/// The same function is applied to the haystack and to every keyword before
/// pattern construction, which is what makes matching case- and
/// whitespace-insensitive.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
