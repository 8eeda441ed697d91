use async_trait::async_trait;

use crate::users::application::ports::outgoing::user_query::{
    PageResult, SortDirection, UserListItem, UserListView, UserSortField,
};

//
// ──────────────────────────────────────────────────────────
// Listing request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UserListRequest {
    pub view: UserListView,
    pub search: Option<String>,
    pub sort: UserSortField,
    pub direction: Option<SortDirection>,
    pub page: Option<u32>,
}

impl UserListRequest {
    pub fn for_view(view: UserListView) -> Self {
        Self {
            view,
            search: None,
            sort: UserSortField::default(),
            direction: None,
            page: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        request: UserListRequest,
    ) -> Result<PageResult<UserListItem>, ListUsersError>;
}
