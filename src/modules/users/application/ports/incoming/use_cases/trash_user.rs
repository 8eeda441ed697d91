use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TrashUserError {
    /// Unknown id, or the user is already trashed — the active-only
    /// lookup is the only path into this operation.
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TrashUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), TrashUserError>;
}
