use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AverageRating {
    pub product_id: String,
    /// `None` while the product has no reviews.
    pub average: Option<f64>,
    pub count: i64,
}
