use actix_web::{get, web, Responder};
use tracing::error;

use crate::users::application::ports::incoming::use_cases::ListUsersError;
use crate::users::application::ports::outgoing::user_query::UserListView;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::list_users::ListUsersParams;

/// The trash view: same listing machinery, explicitly scoped to
/// soft-deleted users.
#[get("/api/users/trash")]
pub async fn list_trashed_users_handler(
    data: web::Data<AppState>,
    params: web::Query<ListUsersParams>,
) -> impl Responder {
    let request = params.into_inner().into_request(UserListView::Trashed);

    match data.list_users_use_case.execute(request).await {
        Ok(page) => ApiResponse::success(page),
        Err(ListUsersError::RepositoryError(e)) => {
            error!("Repository error listing trashed users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
