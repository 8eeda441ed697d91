use async_trait::async_trait;

use crate::users::application::ports::incoming::use_cases::{
    ListUsersError, ListUsersUseCase, UserListRequest,
};
use crate::users::application::ports::outgoing::user_query::{
    PageRequest, PageResult, SortDirection, UserListFilter, UserListItem, UserQuery, UserSortField,
    PAGE_SIZE,
};

#[derive(Debug, Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: UserListRequest,
    ) -> Result<PageResult<UserListItem>, ListUsersError> {
        // Registration date reads newest-first unless the caller says
        // otherwise; the name/email sorts default to ascending.
        let direction = request.direction.unwrap_or(match request.sort {
            UserSortField::CreatedAt => SortDirection::Desc,
            _ => SortDirection::Asc,
        });

        let page = PageRequest {
            page: request.page.unwrap_or(1).max(1),
            per_page: PAGE_SIZE,
        };

        let filter = UserListFilter {
            search: request
                .search
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string),
        };

        self.query
            .list(request.view, filter, request.sort, direction, page)
            .await
            .map_err(|e| ListUsersError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::application::ports::outgoing::user_query::{UserListView, UserQueryError};
    use std::sync::Mutex;

    struct RecordingQuery {
        calls: Mutex<Vec<(UserListView, Option<String>, UserSortField, SortDirection, u32)>>,
    }

    impl RecordingQuery {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UserQuery for RecordingQuery {
        async fn email_taken(
            &self,
            _email: &str,
            _exclude: Option<uuid::Uuid>,
        ) -> Result<bool, UserQueryError> {
            unimplemented!()
        }

        async fn find_active(
            &self,
            _user_id: uuid::Uuid,
        ) -> Result<crate::users::application::ports::outgoing::user_query::UserView, UserQueryError>
        {
            unimplemented!()
        }

        async fn list(
            &self,
            view: UserListView,
            filter: UserListFilter,
            sort: UserSortField,
            direction: SortDirection,
            page: PageRequest,
        ) -> Result<PageResult<UserListItem>, UserQueryError> {
            self.calls
                .lock()
                .unwrap()
                .push((view, filter.search, sort, direction, page.page));
            Ok(PageResult {
                items: vec![],
                page: page.page,
                per_page: page.per_page,
                total: 0,
            })
        }
    }

    #[tokio::test]
    async fn the_default_listing_is_registration_date_descending() {
        let service = ListUsersService::new(RecordingQuery::new());

        service
            .execute(UserListRequest::for_view(UserListView::Active))
            .await
            .unwrap();

        let calls = service.query.calls.lock().unwrap();
        let (view, search, sort, direction, page) = calls[0].clone();
        assert_eq!(view, UserListView::Active);
        assert_eq!(search, None);
        assert_eq!(sort, UserSortField::CreatedAt);
        assert_eq!(direction, SortDirection::Desc);
        assert_eq!(page, 1);
    }

    #[tokio::test]
    async fn name_and_email_sorts_default_to_ascending() {
        let service = ListUsersService::new(RecordingQuery::new());

        let request = UserListRequest {
            sort: UserSortField::Email,
            ..UserListRequest::for_view(UserListView::Active)
        };
        service.execute(request).await.unwrap();

        let calls = service.query.calls.lock().unwrap();
        assert_eq!(calls[0].3, SortDirection::Asc);
    }

    #[tokio::test]
    async fn a_blank_search_term_is_dropped() {
        let service = ListUsersService::new(RecordingQuery::new());

        let request = UserListRequest {
            search: Some("   ".to_string()),
            ..UserListRequest::for_view(UserListView::Trashed)
        };
        service.execute(request).await.unwrap();

        let calls = service.query.calls.lock().unwrap();
        assert_eq!(calls[0].0, UserListView::Trashed);
        assert_eq!(calls[0].1, None);
    }

    #[tokio::test]
    async fn page_zero_is_clamped_to_the_first_page() {
        let service = ListUsersService::new(RecordingQuery::new());

        let request = UserListRequest {
            page: Some(0),
            ..UserListRequest::for_view(UserListView::Active)
        };
        service.execute(request).await.unwrap();

        let calls = service.query.calls.lock().unwrap();
        assert_eq!(calls[0].4, 1);
    }
}
