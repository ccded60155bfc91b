//! Keyword matching and scoring engine.
//!
//! Pure and stateless: every function here is a deterministic computation
//! over its inputs with no I/O, no locks, and no shared state. Handlers may
//! call it concurrently for any number of resumes without coordination.

pub mod matcher;
pub mod normalize;
pub mod patterns;
pub mod scoring;
pub mod variants;

pub use matcher::{find_keywords, MatchResult};

/// Result of analyzing one resume against a keyword profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32,
}

/// Analyzes resume text against a keyword list: partitions the keywords
/// into found/missing, then computes the weighted score. This is the fixed
/// entry point the screening layer consumes.
pub fn analyze(text: &str, keywords: &[String], double_weight: &[String]) -> AnalysisOutcome {
    let MatchResult { found, missing } = find_keywords(text, keywords);
    let score = scoring::score(&found, keywords, double_weight);
    AnalysisOutcome {
        found,
        missing,
        score,
    }
}
