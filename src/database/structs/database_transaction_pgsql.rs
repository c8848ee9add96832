use sqlx::{Postgres, Transaction};

pub struct DatabaseTransactionPgSQL {
    pub(crate) transaction: Transaction<'static, Postgres>,
}
