use rusqlite::{named_params, Connection, OptionalExtension};

use crate::error::AppResult;
use crate::models::score::Score;

const STORE_SCORE_SQL: &str =
    "SELECT sustainability_score FROM store_emissions WHERE name = :name";
const BRAND_SCORE_SQL: &str =
    "SELECT sustainability_score FROM brand_emissions WHERE name = :name";

/// Point lookups against the store and brand scoring tables.
///
/// `None` means no row matched the name. When several rows share a name the
/// first one SQLite returns wins.
pub struct EmissionsRepository;

impl EmissionsRepository {
    pub fn store_score(conn: &Connection, store: &str) -> AppResult<Option<Score>> {
        lookup(conn, STORE_SCORE_SQL, store)
    }

    pub fn brand_score(conn: &Connection, brand: &str) -> AppResult<Option<Score>> {
        lookup(conn, BRAND_SCORE_SQL, brand)
    }
}

fn lookup(conn: &Connection, sql: &str, name: &str) -> AppResult<Option<Score>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let score = stmt
        .query_row(named_params! {":name": name}, |row| row.get::<_, Score>(0))
        .optional()?;
    Ok(score)
}
