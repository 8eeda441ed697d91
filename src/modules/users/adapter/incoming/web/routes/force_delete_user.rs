use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::ForceDeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Permanent removal; the UI only offers it from the trash view, the
/// contract itself takes any existing user.
#[delete("/api/users/{user_id}")]
pub async fn force_delete_user_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.force_delete_user_use_case.execute(user_id).await {
        Ok(_) => ApiResponse::no_content(),
        Err(ForceDeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ForceDeleteUserError::RepositoryError(e)) => {
            error!("Repository error deleting user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
