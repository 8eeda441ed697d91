use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::{FetchUserError, FetchUserUseCase};
use crate::users::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserView,
};

#[derive(Debug, Clone)]
pub struct FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserView, FetchUserError> {
        self.query.find_active(user_id).await.map_err(|e| match e {
            UserQueryError::NotFound => FetchUserError::UserNotFound,
            other => FetchUserError::RepositoryError(other.to_string()),
        })
    }
}
