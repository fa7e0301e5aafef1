use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Every field-level problem found in a single draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn has_message(&self, message: &str) -> bool {
        self.0.iter().any(|e| e.message.contains(message))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum UserCrudError {
    /// No record has the requested id
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// Email is held by another record
    #[error("Email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Request body could not be read as a user draft
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserCrudError {
    fn from(err: sqlx::Error) -> Self {
        UserCrudError::DatabaseError(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for UserCrudError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        UserCrudError::DatabaseError(format!("Migration failed: {}", err))
    }
}
