use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category a challenge counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ChallengeCategory {
    Food,
    Home,
    Community,
}

impl std::fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChallengeCategory::Food => write!(f, "Food"),
            ChallengeCategory::Home => write!(f, "Home"),
            ChallengeCategory::Community => write!(f, "Community"),
        }
    }
}

/// A plastic-reduction challenge completed by submitting photo proof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Challenge {
    /// Unique challenge identifier
    pub id: String,

    /// User-facing title
    pub title: String,

    /// User-facing description
    pub description: String,

    /// Category the challenge counts towards
    pub category: ChallengeCategory,

    /// Points awarded on completion
    pub points: u32,

    /// Text prompts for zero-shot detection
    #[serde(default)]
    pub queries: Vec<String>,
}

impl Challenge {
    /// Create a new challenge without queries
    pub fn new(id: String, title: String, category: ChallengeCategory, points: u32) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            category,
            points,
            queries: Vec::new(),
        }
    }

    /// With a description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// With detection queries
    pub fn with_queries(mut self, queries: Vec<String>) -> Self {
        self.queries = queries;
        self
    }

    /// Queries a submission for this challenge is validated against.
    ///
    /// When the challenge carries no usable prompts, a single query derived
    /// from the lower-cased title is synthesized, so the result is never
    /// empty.
    pub fn validation_queries(&self) -> Vec<String> {
        let queries: Vec<String> = self
            .queries
            .iter()
            .map(|query| query.trim().to_string())
            .filter(|query| !query.is_empty())
            .collect();

        if queries.is_empty() {
            vec![self.title.to_lowercase()]
        } else {
            queries
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_queries_passthrough() {
        let challenge = Challenge::new(
            "straw".to_string(),
            "No Plastic Straw".to_string(),
            ChallengeCategory::Food,
            20,
        )
        .with_queries(vec!["metal straw".to_string(), "paper straw".to_string()]);

        assert_eq!(
            challenge.validation_queries(),
            vec!["metal straw".to_string(), "paper straw".to_string()]
        );
    }

    #[test]
    fn test_validation_queries_title_fallback() {
        let challenge = Challenge::new(
            "lunch".to_string(),
            "Pack Your Lunch".to_string(),
            ChallengeCategory::Food,
            40,
        );

        assert_eq!(
            challenge.validation_queries(),
            vec!["pack your lunch".to_string()]
        );
    }

    #[test]
    fn test_validation_queries_blank_entries_fall_back() {
        let challenge = Challenge::new(
            "bag".to_string(),
            "Reusable Bag".to_string(),
            ChallengeCategory::Home,
            20,
        )
        .with_queries(vec!["  ".to_string(), "".to_string()]);

        assert_eq!(challenge.validation_queries(), vec!["reusable bag".to_string()]);
    }

    #[test]
    fn test_validation_queries_trims_entries() {
        let challenge = Challenge::new(
            "coffee".to_string(),
            "Reusable Coffee Cup".to_string(),
            ChallengeCategory::Food,
            35,
        )
        .with_queries(vec![" travel mug ".to_string()]);

        assert_eq!(challenge.validation_queries(), vec!["travel mug".to_string()]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ChallengeCategory::Food.to_string(), "Food");
        assert_eq!(ChallengeCategory::Community.to_string(), "Community");
    }

    #[test]
    fn test_serialization_round_trip() {
        let challenge = Challenge::new(
            "cleanup".to_string(),
            "Join a Cleanup".to_string(),
            ChallengeCategory::Community,
            100,
        )
        .with_description("Participate in a local cleanup event.".to_string())
        .with_queries(vec!["person collecting litter".to_string()]);

        let json = serde_json::to_string(&challenge).unwrap();
        let parsed: Challenge = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, challenge);
    }
}
