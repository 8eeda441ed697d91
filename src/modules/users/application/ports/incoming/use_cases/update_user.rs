use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::domain::validation::{UserPayload, ValidationErrors};
use crate::users::application::ports::outgoing::user_query::UserView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        payload: UserPayload,
    ) -> Result<UserView, UpdateUserError>;
}
