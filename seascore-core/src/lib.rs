// Domain layer (core)
pub mod domain;

// Trait seams (collaborator interfaces)
pub mod traits;

// Re-exports for convenience
pub use domain::{
    top_detection, BoundingBox, CatalogError, Challenge, ChallengeCatalog, ChallengeCategory,
    DecisionPolicy, Detection, DetectionResponse, ImageFormat, Leaderboard, LeaderboardEntry,
    Passport, PassportError, ProofImage, Reward, RewardCatalog, ValidationRequest, Verdict,
    DEFAULT_THRESHOLD,
};
pub use traits::{CompletionLedger, LedgerError};
