use std::convert::TryFrom;

use rusqlite::{named_params, Connection, Row};

use crate::error::{AppError, AppResult};
use crate::models::purchase::Purchase;

#[derive(Debug, Clone)]
pub struct PurchaseRow {
    pub store: String,
    pub brand: String,
    pub product_name: String,
}

impl PurchaseRow {
    pub fn into_purchase(self) -> Purchase {
        Purchase {
            store: self.store,
            brand: self.brand,
            product_name: self.product_name,
        }
    }
}

impl TryFrom<&Row<'_>> for PurchaseRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            store: row.get("store")?,
            brand: row.get("brand")?,
            product_name: row.get("product_name")?,
        })
    }
}

pub struct PurchaseRepository;

impl PurchaseRepository {
    /// Purchases of one user in table order.
    pub fn list_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<Purchase>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    store,
                    brand,
                    product_name
                FROM purchases
                WHERE user_id = :user_id
            "#,
        )?;

        let rows = stmt
            .query_map(named_params! {":user_id": user_id}, |row| {
                PurchaseRow::try_from(row)
            })?
            .map(|row| row.map(PurchaseRow::into_purchase).map_err(AppError::from))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(rows)
    }

    pub fn distinct_purchasers(conn: &Connection) -> AppResult<Vec<String>> {
        let mut stmt = conn.prepare("SELECT DISTINCT user_id FROM purchases")?;

        let users = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }
}
