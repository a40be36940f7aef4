use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::leaderboard::LeaderboardEntry;
use super::purchase::ProductHarmScore;

pub const LEADERBOARD_KEY: &str = "leaderboard";
pub const HARMFUL_PRODUCTS_KEY_PREFIX: &str = "harmful_products_";

pub fn harmful_products_key(user_id: &str) -> String {
    format!("{HARMFUL_PRODUCTS_KEY_PREFIX}{user_id}")
}

/// The document consumed by the leaderboard page.
///
/// Serialized as an object with `leaderboard` first and
/// `harmful_products_<user_id>` second.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub target_user: String,
    pub harmful_products: Vec<ProductHarmScore>,
}

impl ExportReport {
    pub fn new(
        leaderboard: Vec<LeaderboardEntry>,
        target_user: impl Into<String>,
        harmful_products: Vec<ProductHarmScore>,
    ) -> Self {
        Self {
            leaderboard,
            target_user: target_user.into(),
            harmful_products,
        }
    }

    pub fn harmful_products_key(&self) -> String {
        harmful_products_key(&self.target_user)
    }
}

impl Serialize for ExportReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(LEADERBOARD_KEY, &self.leaderboard)?;
        map.serialize_entry(&self.harmful_products_key(), &self.harmful_products)?;
        map.end()
    }
}
