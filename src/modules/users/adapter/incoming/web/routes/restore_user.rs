use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::RestoreUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/api/users/{user_id}/restore")]
pub async fn restore_user_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.restore_user_use_case.execute(user_id).await {
        Ok(_) => ApiResponse::no_content(),
        Err(RestoreUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(RestoreUserError::RepositoryError(e)) => {
            error!("Repository error restoring user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
