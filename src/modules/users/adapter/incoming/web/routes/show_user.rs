use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/users/{user_id}")]
pub async fn show_user_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.fetch_user_use_case.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::RepositoryError(e)) => {
            error!("Repository error fetching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
