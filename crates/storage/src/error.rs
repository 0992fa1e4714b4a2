use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A referenced row (city, user, picnic) does not exist
    #[error("{0}")]
    InvalidReference(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        self.has_sqlstate(UNIQUE_VIOLATION)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.has_sqlstate(FOREIGN_KEY_VIOLATION)
    }

    fn has_sqlstate(&self, code: &str) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(code)
        )
    }

    /// Turns a raw insert failure into a `ConstraintViolation` carrying `message`
    /// when Postgres rejected it for a key constraint.
    pub fn on_constraint(self, message: &str) -> Self {
        if self.is_unique_violation() || self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_a_constraint_violation() {
        let err = StorageError::NotFound;
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
    }

    #[test]
    fn test_on_constraint_keeps_unrelated_errors() {
        let err = StorageError::Database(sqlx::Error::RowNotFound).on_constraint("duplicate");
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(StorageError::NotFound.to_string(), "Not found");
        assert_eq!(
            StorageError::ConstraintViolation("City already exists".to_string()).to_string(),
            "Constraint violation: City already exists"
        );
    }
}
