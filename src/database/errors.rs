use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Unique, foreign key and check violations become `Constraint`.
    pub fn from_sqlx(error: sqlx::Error) -> StoreError {
        if let Some(database_error) = error.as_database_error()
            && (database_error.is_unique_violation()
                || database_error.is_foreign_key_violation()
                || database_error.is_check_violation())
        {
            return StoreError::Constraint(database_error.message().to_string());
        }
        StoreError::Database(error)
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }
}
