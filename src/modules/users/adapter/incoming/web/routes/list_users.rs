use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::users::application::ports::incoming::use_cases::{ListUsersError, UserListRequest};
use crate::users::application::ports::outgoing::user_query::{
    SortDirection, UserListView, UserSortField,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query string
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub page: Option<u32>,
    pub order: Option<String>,
    pub direction: Option<String>,
    pub search: Option<String>,
}

impl ListUsersParams {
    /// Unknown order/direction values fall back to the defaults; the
    /// listing is a read path and tolerates stray query strings.
    pub fn into_request(self, view: UserListView) -> UserListRequest {
        let sort = match self.order.as_deref() {
            Some("first_name") | Some("name") => UserSortField::FirstName,
            Some("email") => UserSortField::Email,
            _ => UserSortField::CreatedAt,
        };

        let direction = match self.direction.as_deref() {
            Some("asc") => Some(SortDirection::Asc),
            Some("desc") => Some(SortDirection::Desc),
            _ => None,
        };

        UserListRequest {
            view,
            search: self.search,
            sort,
            direction,
            page: self.page,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/api/users")]
pub async fn list_users_handler(
    data: web::Data<AppState>,
    params: web::Query<ListUsersParams>,
) -> impl Responder {
    let request = params.into_inner().into_request(UserListView::Active);

    match data.list_users_use_case.execute(request).await {
        Ok(page) => ApiResponse::success(page),
        Err(ListUsersError::RepositoryError(e)) => {
            error!("Repository error listing users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
