use crate::domain::{Challenge, ChallengeCategory};

/// Errors when loading a challenge catalogue
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate challenge id: {0}")]
    DuplicateId(String),

    #[error("Invalid catalogue document: {0}")]
    InvalidDocument(String),
}

/// Read-only collection of the challenges offered to users
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    /// Create an empty catalogue
    pub fn new() -> Self {
        ChallengeCatalog {
            challenges: Vec::new(),
        }
    }

    /// The production challenge set
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for challenge in builtin_challenges() {
            catalog.add(challenge);
        }
        catalog
    }

    /// Load a catalogue from a JSON array of challenges
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let challenges: Vec<Challenge> = serde_json::from_str(document)
            .map_err(|err| CatalogError::InvalidDocument(err.to_string()))?;

        let mut catalog = Self::new();
        for challenge in challenges {
            if catalog.get(&challenge.id).is_some() {
                return Err(CatalogError::DuplicateId(challenge.id));
            }
            catalog.add(challenge);
        }
        Ok(catalog)
    }

    /// Add a challenge; re-adding an existing id is ignored
    pub fn add(&mut self, challenge: Challenge) {
        if self.challenges.iter().any(|c| c.id == challenge.id) {
            return;
        }
        self.challenges.push(challenge);
    }

    /// Look up a challenge by id
    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| challenge.id == id)
    }

    /// Iterate over all challenges in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    /// Number of challenges
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

fn builtin_challenges() -> Vec<Challenge> {
    vec![
        Challenge::new(
            "straw".to_string(),
            "No Plastic Straw".to_string(),
            ChallengeCategory::Food,
            20,
        )
        .with_description("Forgo a plastic straw when ordering a drink.".to_string())
        .with_queries(vec![
            "metal straw".to_string(),
            "bamboo straw".to_string(),
            "drink without a plastic straw".to_string(),
        ]),
        Challenge::new(
            "bottle".to_string(),
            "Reusable Bottle".to_string(),
            ChallengeCategory::Food,
            15,
        )
        .with_description("Use a reusable bottle instead of a single-use plastic one.".to_string())
        .with_queries(vec![
            "reusable water bottle".to_string(),
            "metal water bottle".to_string(),
        ]),
        Challenge::new(
            "bag".to_string(),
            "Reusable Bag".to_string(),
            ChallengeCategory::Home,
            20,
        )
        .with_description("Use a reusable bag for your shopping.".to_string())
        .with_queries(vec![
            "reusable shopping bag".to_string(),
            "tote bag".to_string(),
        ]),
        Challenge::new(
            "lunch".to_string(),
            "Pack Your Lunch".to_string(),
            ChallengeCategory::Food,
            40,
        )
        .with_description("Pack your lunch in reusable containers.".to_string())
        .with_queries(vec![
            "lunch box".to_string(),
            "reusable food container".to_string(),
        ]),
        Challenge::new(
            "coffee".to_string(),
            "Reusable Coffee Cup".to_string(),
            ChallengeCategory::Food,
            35,
        )
        .with_description("Use a reusable cup for your coffee.".to_string())
        .with_queries(vec![
            "reusable coffee cup".to_string(),
            "travel mug".to_string(),
        ]),
        Challenge::new(
            "plastic-free".to_string(),
            "Plastic-Free Purchase".to_string(),
            ChallengeCategory::Home,
            50,
        )
        .with_description("Buy a product with no plastic packaging.".to_string())
        .with_queries(vec![
            "unpackaged produce".to_string(),
            "product without plastic packaging".to_string(),
        ]),
        Challenge::new(
            "cleanup".to_string(),
            "Join a Cleanup".to_string(),
            ChallengeCategory::Community,
            100,
        )
        .with_description("Participate in a local cleanup event.".to_string())
        .with_queries(vec![
            "person collecting litter".to_string(),
            "trash bag with litter".to_string(),
            "litter picker".to_string(),
        ]),
        Challenge::new(
            "recycle".to_string(),
            "Recycle Right".to_string(),
            ChallengeCategory::Home,
            80,
        )
        .with_description("Sort your recyclables correctly.".to_string())
        .with_queries(vec![
            "recycling bin".to_string(),
            "sorted recyclables".to_string(),
        ]),
        Challenge::new(
            "compost".to_string(),
            "Compost Food Scraps".to_string(),
            ChallengeCategory::Home,
            90,
        )
        .with_description("Compost your food scraps for a week.".to_string())
        .with_queries(vec![
            "compost bin".to_string(),
            "food scraps in compost".to_string(),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ChallengeCatalog::builtin();

        assert_eq!(catalog.len(), 9);
        assert!(catalog.get("straw").is_some());
        assert!(catalog.get("compost").is_some());
        assert!(catalog.get("missing").is_none());

        let cleanup = catalog.get("cleanup").unwrap();
        assert_eq!(cleanup.points, 100);
        assert_eq!(cleanup.category, ChallengeCategory::Community);
    }

    #[test]
    fn test_builtin_challenges_all_have_queries() {
        for challenge in ChallengeCatalog::builtin().iter() {
            assert!(
                !challenge.queries.is_empty(),
                "challenge {} has no queries",
                challenge.id
            );
        }
    }

    #[test]
    fn test_add_ignores_duplicate_id() {
        let mut catalog = ChallengeCatalog::new();
        catalog.add(Challenge::new(
            "straw".to_string(),
            "First".to_string(),
            ChallengeCategory::Food,
            20,
        ));
        catalog.add(Challenge::new(
            "straw".to_string(),
            "Second".to_string(),
            ChallengeCategory::Food,
            30,
        ));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("straw").unwrap().title, "First");
    }

    #[test]
    fn test_from_json() {
        let document = r#"[
            {"id": "straw", "title": "No Plastic Straw", "description": "", "category": "Food", "points": 20, "queries": ["metal straw"]},
            {"id": "bag", "title": "Reusable Bag", "description": "", "category": "Home", "points": 20}
        ]"#;

        let catalog = ChallengeCatalog::from_json(document).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("bag").unwrap().queries.len(), 0);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let document = r#"[
            {"id": "straw", "title": "A", "description": "", "category": "Food", "points": 20},
            {"id": "straw", "title": "B", "description": "", "category": "Food", "points": 30}
        ]"#;

        assert_eq!(
            ChallengeCatalog::from_json(document),
            Err(CatalogError::DuplicateId("straw".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(matches!(
            ChallengeCatalog::from_json("not json"),
            Err(CatalogError::InvalidDocument(_))
        ));
    }
}
