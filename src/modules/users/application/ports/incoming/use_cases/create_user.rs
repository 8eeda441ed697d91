use async_trait::async_trait;

use crate::users::application::domain::validation::{UserPayload, ValidationErrors};
use crate::users::application::ports::outgoing::user_query::UserView;

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    /// Nothing was written; the map names every failing field.
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, payload: UserPayload) -> Result<UserView, CreateUserError>;
}
