use actiontrack_core::types::DbId;

/// Failure kinds surfaced by store operations.
///
/// `DuplicateEmail` and `NotFound` are expected outcomes that callers turn
/// into user-facing messages. `Database` carries everything else.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("A {entity} with email {email} already exists")]
    DuplicateEmail { entity: &'static str, email: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an insert failure on a table whose only unique column is `email`.
    pub(crate) fn from_email_insert(err: sqlx::Error, entity: &'static str, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                tracing::debug!(entity, constraint = ?db_err.constraint(), "Duplicate email rejected");
                Self::DuplicateEmail {
                    entity,
                    email: email.to_string(),
                }
            }
            _ => Self::Database(err),
        }
    }
}
