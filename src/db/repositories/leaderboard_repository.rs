use std::convert::TryFrom;

use rusqlite::{Connection, Row};

use crate::error::{AppError, AppResult};
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::score::Score;

#[derive(Debug, Clone)]
pub struct LeaderboardRow {
    pub user_id: String,
    pub total_score: Score,
}

impl LeaderboardRow {
    pub fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            user_id: self.user_id,
            score: self.total_score,
        }
    }
}

impl TryFrom<&Row<'_>> for LeaderboardRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            total_score: row.get("total_score")?,
        })
    }
}

pub struct LeaderboardRepository;

impl LeaderboardRepository {
    /// All leaderboard rows, highest score first. Ties keep SQLite's order.
    pub fn list_ranked(conn: &Connection) -> AppResult<Vec<LeaderboardEntry>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    user_id,
                    total_score
                FROM leaderboard
                ORDER BY total_score DESC
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| LeaderboardRow::try_from(row))?
            .map(|row| row.map(LeaderboardRow::into_entry).map_err(AppError::from))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(rows)
    }
}
