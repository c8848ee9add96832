use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryPagination {
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
}
