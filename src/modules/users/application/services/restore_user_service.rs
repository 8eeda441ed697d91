use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::{RestoreUserError, RestoreUserUseCase};
use crate::users::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct RestoreUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> RestoreUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RestoreUserUseCase for RestoreUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), RestoreUserError> {
        self.repository.restore(user_id).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => RestoreUserError::UserNotFound,
            other => RestoreUserError::RepositoryError(other.to_string()),
        })
    }
}
