use serde::Serialize;

use super::score::Score;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub store: String,
    pub brand: String,
    pub product_name: String,
}

/// Combined store and brand score of one purchased product.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductHarmScore {
    pub product_name: String,
    pub store: String,
    pub brand: String,
    pub score: Score,
}

impl ProductHarmScore {
    pub fn from_purchase(purchase: Purchase, score: Score) -> Self {
        Self {
            product_name: purchase.product_name,
            store: purchase.store,
            brand: purchase.brand,
            score,
        }
    }
}
