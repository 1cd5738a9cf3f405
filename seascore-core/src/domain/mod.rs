pub mod catalog;
pub mod challenge;
pub mod detection;
pub mod leaderboard;
pub mod passport;
pub mod policy;
pub mod request;
pub mod reward;
pub mod verdict;

pub use catalog::{CatalogError, ChallengeCatalog};
pub use challenge::{Challenge, ChallengeCategory};
pub use detection::{top_detection, BoundingBox, Detection};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use passport::{Passport, PassportError};
pub use policy::{DecisionPolicy, DEFAULT_THRESHOLD};
pub use request::{DetectionResponse, ImageFormat, ProofImage, ValidationRequest};
pub use reward::{Reward, RewardCatalog};
pub use verdict::Verdict;
