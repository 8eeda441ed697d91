use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::users::application::domain::validation::UserPayload;
use crate::users::application::ports::incoming::use_cases::UpdateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/users/{user_id}")]
pub async fn update_user_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UserPayload>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .update_user_use_case
        .execute(user_id, payload.into_inner())
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(err) => map_update_user_error(err),
    }
}

fn map_update_user_error(err: UpdateUserError) -> actix_web::HttpResponse {
    match err {
        UpdateUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        UpdateUserError::Validation(errors) => ApiResponse::validation_failed(errors),
        UpdateUserError::HashingFailed(e) => {
            error!("Password hashing failed updating user: {}", e);
            ApiResponse::internal_error()
        }
        UpdateUserError::RepositoryError(e) => {
            error!("Repository error updating user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
