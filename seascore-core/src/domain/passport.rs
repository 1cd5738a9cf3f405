use crate::domain::Reward;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Passport aggregate root: one user's stamps, points and redemptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Passport {
    /// Unique passport identifier
    id: Uuid,

    /// Display name of the holder
    holder: String,

    /// Completed challenge ids, in completion order
    #[serde(default)]
    completed: Vec<String>,

    /// Redeemable points balance
    #[serde(default)]
    points: u32,

    /// Redeemed reward ids, in redemption order
    #[serde(default)]
    redeemed: Vec<String>,
}

/// Errors that can occur in passport operations
#[derive(Debug, thiserror::Error, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum PassportError {
    #[error("Challenge already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Reward already redeemed: {0}")]
    AlreadyRedeemed(String),

    #[error("Not enough points: need {required}, have {available}")]
    InsufficientPoints { required: u32, available: u32 },
}

impl Passport {
    /// Create an empty passport with a random ID
    pub fn new(holder: String) -> Self {
        Self::with_id(Uuid::new_v4(), holder)
    }

    /// Create an empty passport with a specific ID
    pub fn with_id(id: Uuid, holder: String) -> Self {
        Passport {
            id,
            holder,
            completed: Vec::new(),
            points: 0,
            redeemed: Vec::new(),
        }
    }

    // ===== Getters =====

    /// Get passport ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get holder display name
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Completed challenge ids in completion order
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    /// Number of stamps earned
    pub fn stamp_count(&self) -> usize {
        self.completed.len()
    }

    /// Current points balance
    pub fn total_points(&self) -> u32 {
        self.points
    }

    /// Redeemed reward ids in redemption order
    pub fn redeemed_rewards(&self) -> &[String] {
        &self.redeemed
    }

    /// Whether a challenge has been completed
    pub fn is_completed(&self, challenge_id: &str) -> bool {
        self.completed.iter().any(|id| id == challenge_id)
    }

    // ===== Stamps =====

    /// Record a completed challenge and award its points.
    ///
    /// A challenge can be stamped at most once; a second attempt fails and
    /// leaves the passport unchanged.
    pub fn record_completion(
        &mut self,
        challenge_id: &str,
        points: u32,
    ) -> Result<(), PassportError> {
        if self.is_completed(challenge_id) {
            return Err(PassportError::AlreadyCompleted(challenge_id.to_string()));
        }

        self.completed.push(challenge_id.to_string());
        self.points += points;

        tracing::info!(
            "🏅 Stamp recorded: {} (+{} points, total {})",
            challenge_id,
            points,
            self.points
        );
        Ok(())
    }

    // ===== Rewards =====

    /// Whether a reward can currently be redeemed
    pub fn can_redeem(&self, reward: &Reward) -> bool {
        self.points >= reward.points && !self.redeemed.iter().any(|id| id == &reward.id)
    }

    /// Redeem a reward, deducting its cost from the balance
    pub fn redeem(&mut self, reward: &Reward) -> Result<(), PassportError> {
        if self.redeemed.iter().any(|id| id == &reward.id) {
            return Err(PassportError::AlreadyRedeemed(reward.id.clone()));
        }
        if self.points < reward.points {
            return Err(PassportError::InsufficientPoints {
                required: reward.points,
                available: self.points,
            });
        }

        self.points -= reward.points;
        self.redeemed.push(reward.id.clone());

        tracing::info!(
            "🎁 Reward redeemed: {} (-{} points, {} left)",
            reward.id,
            reward.points,
            self.points
        );
        Ok(())
    }

    // ===== Impact stats =====

    /// Estimated plastic bottles avoided (15 per completed challenge)
    pub fn bottles_avoided(&self) -> u32 {
        self.stamp_count() as u32 * 15
    }

    /// Estimated plastic bags saved (8 per completed challenge)
    pub fn bags_saved(&self) -> u32 {
        self.stamp_count() as u32 * 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(id: &str, points: u32) -> Reward {
        Reward::new(
            id.to_string(),
            format!("Reward {}", id),
            String::new(),
            points,
        )
    }

    #[test]
    fn test_record_completion_awards_points() {
        let mut passport = Passport::new("Mara".to_string());

        passport.record_completion("straw", 20).unwrap();
        passport.record_completion("cleanup", 100).unwrap();

        assert_eq!(passport.stamp_count(), 2);
        assert_eq!(passport.total_points(), 120);
        assert!(passport.is_completed("straw"));
        assert!(!passport.is_completed("bag"));
    }

    #[test]
    fn test_duplicate_completion_rejected() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("straw", 20).unwrap();

        let err = passport.record_completion("straw", 20).unwrap_err();

        assert_eq!(err, PassportError::AlreadyCompleted("straw".to_string()));
        assert_eq!(passport.stamp_count(), 1);
        assert_eq!(passport.total_points(), 20);
    }

    #[test]
    fn test_completion_order_preserved() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("bottle", 15).unwrap();
        passport.record_completion("bag", 20).unwrap();

        assert_eq!(
            passport.completed(),
            &["bottle".to_string(), "bag".to_string()]
        );
    }

    #[test]
    fn test_redeem_deducts_points() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("cleanup", 100).unwrap();
        passport.record_completion("compost", 90).unwrap();

        let coffee = reward("coffee-voucher", 150);
        assert!(passport.can_redeem(&coffee));
        passport.redeem(&coffee).unwrap();

        assert_eq!(passport.total_points(), 40);
        assert_eq!(passport.redeemed_rewards(), &["coffee-voucher".to_string()]);
    }

    #[test]
    fn test_redeem_insufficient_points() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("straw", 20).unwrap();

        let expensive = reward("tree-planted", 200);
        assert!(!passport.can_redeem(&expensive));

        let err = passport.redeem(&expensive).unwrap_err();
        assert_eq!(
            err,
            PassportError::InsufficientPoints {
                required: 200,
                available: 20
            }
        );
        assert_eq!(passport.total_points(), 20);
    }

    #[test]
    fn test_redeem_twice_rejected() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("cleanup", 100).unwrap();
        passport.record_completion("recycle", 80).unwrap();
        passport.record_completion("compost", 90).unwrap();

        let discount = reward("discount-5", 100);
        passport.redeem(&discount).unwrap();

        let err = passport.redeem(&discount).unwrap_err();
        assert_eq!(err, PassportError::AlreadyRedeemed("discount-5".to_string()));
        // Balance unchanged by the failed second redemption
        assert_eq!(passport.total_points(), 170);
    }

    #[test]
    fn test_redeemed_reward_not_redeemable_even_with_points() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("cleanup", 100).unwrap();
        passport.record_completion("recycle", 80).unwrap();

        let discount = reward("discount-5", 100);
        passport.redeem(&discount).unwrap();

        assert!(!passport.can_redeem(&discount));
    }

    #[test]
    fn test_impact_stats() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("straw", 20).unwrap();
        passport.record_completion("bag", 20).unwrap();
        passport.record_completion("coffee", 35).unwrap();

        assert_eq!(passport.bottles_avoided(), 45);
        assert_eq!(passport.bags_saved(), 24);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut passport = Passport::new("Mara".to_string());
        passport.record_completion("straw", 20).unwrap();

        let json = serde_json::to_string(&passport).unwrap();
        let parsed: Passport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, passport);
    }

    #[test]
    fn test_json_schema_includes_uuid_id() {
        let schema = schemars::schema_for!(Passport);
        let json = serde_json::to_value(&schema).unwrap();

        let properties = json["properties"].as_object().unwrap();
        assert!(properties.contains_key("id"));
        assert_eq!(properties["id"]["format"], "uuid");
    }
}
