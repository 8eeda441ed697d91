use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::outgoing::user_query::UserView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserView, FetchUserError>;
}
