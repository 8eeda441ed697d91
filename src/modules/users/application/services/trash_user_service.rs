use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::{TrashUserError, TrashUserUseCase};
use crate::users::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct TrashUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> TrashUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TrashUserUseCase for TrashUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), TrashUserError> {
        self.repository.trash(user_id).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => TrashUserError::UserNotFound,
            other => TrashUserError::RepositoryError(other.to_string()),
        })
    }
}
