use serde::{Deserialize, Serialize};

/// Catalog product as stored and as cached under `product:{id}`.
///
/// Everything except `id` and `name` defaults when absent, so entries written by
/// other readers of the same cache still decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, sqlx::FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: String,
    pub created_at: i64,
}
