pub mod mock_camera;
pub mod mock_transport;

use seascore_core::{BoundingBox, Challenge, ChallengeCategory, Detection, ImageFormat, ProofImage};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Challenge with explicit detection queries
pub fn straw_challenge() -> Challenge {
    Challenge::new(
        "straw".to_string(),
        "No Plastic Straw".to_string(),
        ChallengeCategory::Food,
        20,
    )
    .with_queries(vec!["metal straw".to_string(), "glass straw".to_string()])
}

/// Challenge shipping without queries, exercising the title fallback
pub fn lunch_challenge() -> Challenge {
    Challenge::new(
        "lunch".to_string(),
        "Pack Your Lunch".to_string(),
        ChallengeCategory::Food,
        40,
    )
}

pub fn detection(label: &str, score: f32) -> Detection {
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

pub fn jpeg_image() -> ProofImage {
    ProofImage::new(vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10], ImageFormat::Jpeg)
}
