use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    #[serde(rename = "xmin")]
    pub x_min: f32,

    #[serde(rename = "ymin")]
    pub y_min: f32,

    #[serde(rename = "xmax")]
    pub x_max: f32,

    #[serde(rename = "ymax")]
    pub y_max: f32,
}

/// One region the model matched against a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Detection {
    /// Query text the region matched
    pub label: String,

    /// Confidence score in [0, 1]
    pub score: f32,

    /// Where the match was found
    #[serde(rename = "box")]
    pub bounding_box: BoundingBox,
}

/// The highest-scoring detection, found by an explicit scan.
///
/// The endpoint makes no ordering promise, so rank is never inferred from
/// list position. Ties keep the earliest element; NaN scores count as zero.
pub fn top_detection(detections: &[Detection]) -> Option<&Detection> {
    detections.iter().fold(None, |best, candidate| match best {
        Some(current) if effective_score(candidate) <= effective_score(current) => Some(current),
        _ => Some(candidate),
    })
}

fn effective_score(detection: &Detection) -> f32 {
    if detection.score.is_nan() {
        0.0
    } else {
        detection.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(label: &str, score: f32) -> Detection {
        Detection {
            label: label.to_string(),
            score,
            bounding_box: BoundingBox {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 1.0,
                y_max: 1.0,
            },
        }
    }

    #[test]
    fn test_top_detection_empty() {
        assert!(top_detection(&[]).is_none());
    }

    #[test]
    fn test_top_detection_is_max_not_first() {
        let detections = vec![
            detection("paper straw", 0.41),
            detection("metal straw", 0.82),
            detection("drink", 0.55),
        ];

        let top = top_detection(&detections).unwrap();
        assert_eq!(top.label, "metal straw");
        assert_eq!(top.score, 0.82);
    }

    #[test]
    fn test_top_detection_tie_keeps_first() {
        let detections = vec![detection("first", 0.7), detection("second", 0.7)];

        assert_eq!(top_detection(&detections).unwrap().label, "first");
    }

    #[test]
    fn test_top_detection_nan_never_wins() {
        let detections = vec![detection("broken", f32::NAN), detection("ok", 0.2)];

        assert_eq!(top_detection(&detections).unwrap().label, "ok");
    }

    #[test]
    fn test_detection_wire_format() {
        let json = serde_json::to_value(detection("tote bag", 0.9)).unwrap();

        assert_eq!(json["label"], "tote bag");
        assert_eq!(json["box"]["xmin"], 0.0);
        assert_eq!(json["box"]["ymax"], 1.0);
    }
}
