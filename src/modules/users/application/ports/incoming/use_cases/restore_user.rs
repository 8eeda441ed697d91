use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreUserError {
    /// Unknown id, or the user is not in the trash — restore resolves
    /// its target among trashed records only.
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RestoreUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), RestoreUserError>;
}
