use serde::{Deserialize, Serialize};

/// A purchasable variation of a product. `price` overrides the product price when set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, sqlx::FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub stock: i64,
}
