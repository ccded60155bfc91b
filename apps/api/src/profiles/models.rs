//! Job profile data model.

use serde::{Deserialize, Serialize};

/// A named keyword set used to score resumes against a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Keywords that count twice in the score.
    #[serde(default)]
    pub double_weight_keywords: Vec<String>,
    pub category: String,
}

/// Response for the profile listing endpoint.
#[derive(Debug, Serialize)]
pub struct JobProfilesResponse {
    pub profiles: Vec<JobProfile>,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_weight_keywords_default_to_empty() {
        let profile: JobProfile = serde_json::from_str(
            r#"{
                "id": "crane-op",
                "name": "Crane Operator",
                "description": "Heavy lifting roles",
                "keywords": ["tower crane", "rigging"],
                "category": "Construction"
            }"#,
        )
        .unwrap();
        assert!(profile.double_weight_keywords.is_empty());
        assert_eq!(profile.keywords.len(), 2);
    }
}
