use rusqlite::{named_params, Connection};
use tracing::debug;

use crate::error::{AppError, AppResult};

pub const TABLE_LEADERBOARD: &str = "leaderboard";
pub const TABLE_PURCHASES: &str = "purchases";
pub const TABLE_STORE_EMISSIONS: &str = "store_emissions";
pub const TABLE_BRAND_EMISSIONS: &str = "brand_emissions";

pub const SOURCE_TABLES: [&str; 4] = [
    TABLE_LEADERBOARD,
    TABLE_PURCHASES,
    TABLE_STORE_EMISSIONS,
    TABLE_BRAND_EMISSIONS,
];

pub fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = :name",
        named_params! {":name": table},
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Fails with `MissingTable` on the first source table that is absent.
pub fn ensure_source_tables(conn: &Connection) -> AppResult<()> {
    for table in SOURCE_TABLES {
        if !table_exists(conn, table)? {
            return Err(AppError::missing_table(table));
        }
        debug!(target: "app::db", table, "source table present");
    }
    Ok(())
}
