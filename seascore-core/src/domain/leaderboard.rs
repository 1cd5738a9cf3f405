use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One member on the team leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LeaderboardEntry {
    /// Member display name
    pub name: String,

    /// Points earned
    pub points: u32,
}

/// Points leaderboard for one team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Leaderboard {
            entries: Vec::new(),
        }
    }

    /// Set a member's points, adding them if not yet listed
    pub fn record(&mut self, name: &str, points: u32) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.points = points,
            None => self.entries.push(LeaderboardEntry {
                name: name.to_string(),
                points,
            }),
        }
    }

    /// Entries sorted by points descending, ties broken by name
    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
        ranked
    }

    /// Combined team points
    pub fn team_total(&self) -> u32 {
        self.entries.iter().map(|entry| entry.points).sum()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_sorts_by_points_descending() {
        let mut board = Leaderboard::new();
        board.record("Ana", 120);
        board.record("Kim", 340);
        board.record("Lee", 80);

        let ranked = board.ranked();

        assert_eq!(ranked[0].name, "Kim");
        assert_eq!(ranked[1].name, "Ana");
        assert_eq!(ranked[2].name, "Lee");
    }

    #[test]
    fn test_ranked_ties_broken_by_name() {
        let mut board = Leaderboard::new();
        board.record("Noor", 100);
        board.record("Ana", 100);

        let ranked = board.ranked();

        assert_eq!(ranked[0].name, "Ana");
        assert_eq!(ranked[1].name, "Noor");
    }

    #[test]
    fn test_record_updates_existing_member() {
        let mut board = Leaderboard::new();
        board.record("Ana", 100);
        board.record("Ana", 150);

        assert_eq!(board.len(), 1);
        assert_eq!(board.team_total(), 150);
    }

    #[test]
    fn test_team_total() {
        let mut board = Leaderboard::new();
        board.record("Ana", 120);
        board.record("Kim", 340);

        assert_eq!(board.team_total(), 460);
    }
}
