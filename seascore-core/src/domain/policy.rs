use crate::domain::{top_detection, Detection, Verdict};

/// Acceptance threshold used when none is configured
pub const DEFAULT_THRESHOLD: f32 = 0.6;

/// Environment variable overriding the acceptance threshold
pub const THRESHOLD_ENV: &str = "SEASCORE_THRESHOLD";

/// Turns a raw detection list into an accept/reject verdict.
///
/// Pure and deterministic: the same detections and threshold always yield an
/// identical verdict. The threshold is inclusive, so a top score exactly at
/// the threshold is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    threshold: f32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DecisionPolicy {
    /// Policy with an explicit threshold, clamped into [0, 1]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Read the threshold from `SEASCORE_THRESHOLD`, defaulting to 0.6
    pub fn from_env() -> Self {
        match std::env::var(THRESHOLD_ENV) {
            Ok(raw) => match raw.trim().parse::<f32>() {
                Ok(value) => Self::new(value),
                Err(_) => {
                    tracing::warn!(
                        "Ignoring malformed {} value {:?}, using default {}",
                        THRESHOLD_ENV,
                        raw,
                        DEFAULT_THRESHOLD
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Configured acceptance threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Evaluate the detections returned for a challenge submission
    pub fn evaluate(&self, challenge_name: &str, detections: &[Detection]) -> Verdict {
        let best = match top_detection(detections) {
            Some(best) if best.score > 0.0 => best,
            _ => {
                tracing::debug!("📊 No usable detection for {}", challenge_name);
                return Verdict {
                    is_valid: false,
                    confidence: Some(0.0),
                    message: "We couldn't find anything matching this challenge.".to_string(),
                    details: "Make sure the item is clearly visible and well lit, then try again."
                        .to_string(),
                    challenge_name: challenge_name.to_string(),
                    raw: detections.to_vec(),
                };
            }
        };

        let score = best.score;
        tracing::debug!(
            "📊 Top detection for {}: {} at {:.3} (threshold {:.2})",
            challenge_name,
            best.label,
            score,
            self.threshold
        );

        if score >= self.threshold {
            Verdict {
                is_valid: true,
                confidence: Some(score),
                message: "Your photo has been validated successfully!".to_string(),
                details: format!(
                    "Your photo clearly shows: {} ({:.0}% confidence).",
                    best.label,
                    score * 100.0
                ),
                challenge_name: challenge_name.to_string(),
                raw: detections.to_vec(),
            }
        } else {
            Verdict {
                is_valid: false,
                confidence: Some(score),
                message: "We detected something, but confidence is too low.".to_string(),
                details: format!(
                    "Best match \"{}\" scored {:.0}%, below the acceptance bar. Try a clearer photo.",
                    best.label,
                    score * 100.0
                ),
                challenge_name: challenge_name.to_string(),
                raw: detections.to_vec(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundingBox;

    fn detection(label: &str, score: f32) -> Detection {
        Detection {
            label: label.to_string(),
            score,
            bounding_box: BoundingBox {
                x_min: 10.0,
                y_min: 10.0,
                x_max: 200.0,
                y_max: 200.0,
            },
        }
    }

    #[test]
    fn test_empty_detections_rejected_with_zero_confidence() {
        let verdict = DecisionPolicy::default().evaluate("No Plastic Straw", &[]);

        assert!(!verdict.is_valid);
        assert_eq!(verdict.confidence, Some(0.0));
        assert!(verdict.raw.is_empty());
    }

    #[test]
    fn test_confidence_equals_max_score_not_first() {
        let detections = vec![
            detection("paper straw", 0.2),
            detection("metal straw", 0.82),
            detection("glass", 0.5),
        ];

        let verdict = DecisionPolicy::default().evaluate("No Plastic Straw", &detections);

        assert!(verdict.is_valid);
        assert_eq!(verdict.confidence, Some(0.82));
        assert!(verdict.details.contains("metal straw"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let detections = vec![detection("tote bag", 0.6)];

        let verdict = DecisionPolicy::default().evaluate("Reusable Bag", &detections);

        assert!(verdict.is_valid);
        assert_eq!(verdict.confidence, Some(0.6));
    }

    #[test]
    fn test_just_below_threshold_rejected_with_confidence() {
        let detections = vec![detection("tote bag", 0.59)];

        let verdict = DecisionPolicy::default().evaluate("Reusable Bag", &detections);

        assert!(!verdict.is_valid);
        assert_eq!(verdict.confidence, Some(0.59));
    }

    #[test]
    fn test_zero_score_equivalent_to_empty() {
        let detections = vec![detection("tote bag", 0.0)];

        let verdict = DecisionPolicy::default().evaluate("Reusable Bag", &detections);

        assert!(!verdict.is_valid);
        assert_eq!(verdict.confidence, Some(0.0));
        // Raw detections are still carried for diagnostics
        assert_eq!(verdict.raw.len(), 1);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let detections = vec![detection("lunch box", 0.44), detection("container", 0.71)];
        let policy = DecisionPolicy::default();

        let first = policy.evaluate("Pack Your Lunch", &detections);
        let second = policy.evaluate("Pack Your Lunch", &detections);

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_threshold() {
        let detections = vec![detection("compost bin", 0.45)];

        let strict = DecisionPolicy::new(0.5).evaluate("Compost Food Scraps", &detections);
        let lenient = DecisionPolicy::new(0.4).evaluate("Compost Food Scraps", &detections);

        assert!(!strict.is_valid);
        assert!(lenient.is_valid);
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(DecisionPolicy::new(1.7).threshold(), 1.0);
        assert_eq!(DecisionPolicy::new(-0.3).threshold(), 0.0);
    }

    #[test]
    fn test_raw_detections_preserved_in_order() {
        let detections = vec![detection("a", 0.3), detection("b", 0.9)];

        let verdict = DecisionPolicy::default().evaluate("Recycle Right", &detections);

        assert_eq!(verdict.raw, detections);
    }
}
