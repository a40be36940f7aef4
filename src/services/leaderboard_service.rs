use rusqlite::Connection;
use tracing::info;

use crate::db::repositories::leaderboard_repository::LeaderboardRepository;
use crate::error::AppResult;
use crate::models::leaderboard::LeaderboardEntry;

pub struct LeaderboardService;

impl LeaderboardService {
    pub fn ranked_entries(conn: &Connection) -> AppResult<Vec<LeaderboardEntry>> {
        let entries = LeaderboardRepository::list_ranked(conn)?;
        info!(target: "app::export", entries = entries.len(), "leaderboard loaded");
        Ok(entries)
    }
}
