use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::{
    ForceDeleteUserError, ForceDeleteUserUseCase,
};
use crate::users::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ForceDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> ForceDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ForceDeleteUserUseCase for ForceDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), ForceDeleteUserError> {
        self.repository
            .force_delete(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ForceDeleteUserError::UserNotFound,
                other => ForceDeleteUserError::RepositoryError(other.to_string()),
            })
    }
}
