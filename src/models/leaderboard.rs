use serde::Serialize;

use super::score::Score;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub score: Score,
}

impl LeaderboardEntry {
    pub fn new(user_id: impl Into<String>, score: impl Into<Score>) -> Self {
        Self {
            user_id: user_id.into(),
            score: score.into(),
        }
    }
}
