use crate::domain::{Challenge, Detection};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Encoding of a captured proof photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type for the multipart image part
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// File name used for the multipart image part
    pub fn file_name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "proof.jpg",
            ImageFormat::Png => "proof.png",
        }
    }
}

/// A captured, encoded proof photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofImage {
    /// Encoded image bytes
    pub bytes: Vec<u8>,

    /// Encoding of `bytes`
    pub format: ImageFormat,
}

impl ProofImage {
    /// Wrap encoded image bytes
    pub fn new(bytes: Vec<u8>, format: ImageFormat) -> Self {
        Self { bytes, format }
    }

    /// Size of the encoded image in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One submission attempt, ready for transport.
///
/// `queries` is never empty: construction goes through the challenge's
/// `validation_queries`, which synthesizes a title-derived query when the
/// challenge ships without prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRequest {
    /// Encoded proof photo
    pub image: ProofImage,

    /// Detection prompts, at least one
    pub queries: Vec<String>,

    /// Challenge being attempted
    pub challenge_id: String,

    /// Challenge title, sent for server-side logging
    pub challenge_title: String,
}

impl ValidationRequest {
    /// Build the request for one challenge attempt
    pub fn for_challenge(image: ProofImage, challenge: &Challenge) -> Self {
        Self {
            image,
            queries: challenge.validation_queries(),
            challenge_id: challenge.id.clone(),
            challenge_title: challenge.title.clone(),
        }
    }
}

/// Success body of the validation endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResponse {
    /// Detections for the uploaded image, possibly empty
    #[serde(default)]
    pub detections: Vec<Detection>,
}
