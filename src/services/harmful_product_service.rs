use rusqlite::Connection;
use tracing::{debug, info};

use crate::config::DEFAULT_HARMFUL_LIMIT;
use crate::db::repositories::emissions_repository::EmissionsRepository;
use crate::db::repositories::purchase_repository::PurchaseRepository;
use crate::error::AppResult;
use crate::models::purchase::{ProductHarmScore, Purchase};
use crate::models::score::Score;

const SCORE_DECIMALS: usize = 2;

/// Ranks a user's purchases by combined store and brand sustainability score,
/// lowest first.
pub struct HarmfulProductService {
    limit: usize,
}

impl Default for HarmfulProductService {
    fn default() -> Self {
        Self::new(DEFAULT_HARMFUL_LIMIT)
    }
}

impl HarmfulProductService {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The `limit` lowest scoring purchases of `user_id`.
    ///
    /// Equal scores keep purchase order.
    pub fn most_harmful(
        &self,
        conn: &Connection,
        user_id: &str,
    ) -> AppResult<Vec<ProductHarmScore>> {
        let purchases = PurchaseRepository::list_for_user(conn, user_id)?;
        let purchase_count = purchases.len();

        let mut scored = purchases
            .into_iter()
            .map(|purchase| Self::score_purchase(conn, purchase))
            .collect::<AppResult<Vec<_>>>()?;

        rank_most_harmful(&mut scored, self.limit);

        info!(
            target: "app::export",
            %user_id,
            purchases = purchase_count,
            kept = scored.len(),
            "harmful products ranked"
        );
        Ok(scored)
    }

    /// Missing store or brand scores count as zero.
    pub fn score_purchase(conn: &Connection, purchase: Purchase) -> AppResult<ProductHarmScore> {
        let store_score = EmissionsRepository::store_score(conn, &purchase.store)?;
        let brand_score = EmissionsRepository::brand_score(conn, &purchase.brand)?;

        if store_score.is_none() {
            debug!(target: "app::export", store = %purchase.store, "no store score, using 0");
        }
        if brand_score.is_none() {
            debug!(target: "app::export", brand = %purchase.brand, "no brand score, using 0");
        }

        let combined = (store_score.unwrap_or(Score::ZERO) + brand_score.unwrap_or(Score::ZERO))
            .rounded(SCORE_DECIMALS);

        Ok(ProductHarmScore::from_purchase(purchase, combined))
    }
}

fn rank_most_harmful(products: &mut Vec<ProductHarmScore>, limit: usize) {
    products.sort_by(|a, b| a.score.numeric_cmp(&b.score));
    products.truncate(limit);
}
