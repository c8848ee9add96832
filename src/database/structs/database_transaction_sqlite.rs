use sqlx::{Sqlite, Transaction};

pub struct DatabaseTransactionSQLite {
    pub(crate) transaction: Transaction<'static, Sqlite>,
}
