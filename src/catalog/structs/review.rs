use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, sqlx::FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub author: Option<String>,
    pub created_at: i64,
}
