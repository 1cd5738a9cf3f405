use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reward redeemable against the points balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Reward {
    /// Unique reward identifier
    pub id: String,

    /// User-facing title
    pub title: String,

    /// User-facing description
    pub description: String,

    /// Point cost to redeem
    pub points: u32,
}

impl Reward {
    /// Create a new reward
    pub fn new(id: String, title: String, description: String, points: u32) -> Self {
        Self {
            id,
            title,
            description,
            points,
        }
    }
}

/// Read-only collection of redeemable rewards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
}

impl RewardCatalog {
    /// The production reward set
    pub fn builtin() -> Self {
        Self {
            rewards: vec![
                Reward::new(
                    "discount-5".to_string(),
                    "5% Off Voucher".to_string(),
                    "Get a 5% discount at a partner store.".to_string(),
                    100,
                ),
                Reward::new(
                    "discount-10".to_string(),
                    "10% Off Voucher".to_string(),
                    "Get a 10% discount at a partner store.".to_string(),
                    250,
                ),
                Reward::new(
                    "coffee-voucher".to_string(),
                    "Free Coffee".to_string(),
                    "Get a free coffee at a partner cafe.".to_string(),
                    150,
                ),
                Reward::new(
                    "tree-planted".to_string(),
                    "Plant a Tree".to_string(),
                    "We'll plant a tree on your behalf.".to_string(),
                    200,
                ),
                Reward::new(
                    "discount-20".to_string(),
                    "20% Off Voucher".to_string(),
                    "Get a 20% discount at a partner store.".to_string(),
                    500,
                ),
                Reward::new(
                    "cleanup-kit".to_string(),
                    "Cleanup Kit".to_string(),
                    "Receive a kit with gloves, bags, and a picker.".to_string(),
                    300,
                ),
                Reward::new(
                    "water-bottle".to_string(),
                    "Reusable Water Bottle".to_string(),
                    "A stylish and durable reusable water bottle.".to_string(),
                    400,
                ),
                Reward::new(
                    "tote-bag".to_string(),
                    "Eco-Friendly Tote Bag".to_string(),
                    "A tote bag made from recycled materials.".to_string(),
                    180,
                ),
            ],
        }
    }

    /// Look up a reward by id
    pub fn get(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|reward| reward.id == id)
    }

    /// Iterate over all rewards in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.iter()
    }

    /// Number of rewards
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }
}
