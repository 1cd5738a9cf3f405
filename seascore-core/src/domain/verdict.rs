use crate::domain::Detection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured outcome of one proof submission.
///
/// Created once per attempt and replaced wholesale on retry. `confidence` is
/// absent only when the submission never produced detections (transport or
/// processing failure); a low-confidence rejection still reports its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the submission clears the acceptance threshold
    pub is_valid: bool,

    /// Top detection score, when the submission reached the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// User-facing summary
    pub message: String,

    /// User-facing elaboration
    pub details: String,

    /// Title of the challenge the verdict is for
    pub challenge_name: String,

    /// Original detections, kept for diagnostic display
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw: Vec<Detection>,
}

impl Verdict {
    /// Verdict for a submission that failed before producing detections
    pub fn submission_error(challenge_name: String) -> Self {
        Self {
            is_valid: false,
            confidence: None,
            message: "Submission error. Please try again.".to_string(),
            details: "We couldn't reach the validation service. Check your connection and retry."
                .to_string(),
            challenge_name,
            raw: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_has_no_confidence() {
        let verdict = Verdict::submission_error("No Plastic Straw".to_string());

        assert!(!verdict.is_valid);
        assert!(verdict.confidence.is_none());
        assert!(verdict.raw.is_empty());
        assert_eq!(verdict.challenge_name, "No Plastic Straw");
    }

    #[test]
    fn test_wire_format_omits_absent_confidence() {
        let verdict = Verdict::submission_error("Reusable Bag".to_string());
        let json = serde_json::to_value(&verdict).unwrap();

        assert!(json.get("confidence").is_none());
        assert_eq!(json["isValid"], false);
        assert_eq!(json["challengeName"], "Reusable Bag");
    }
}
