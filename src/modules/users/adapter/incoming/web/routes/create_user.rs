use actix_web::{post, web, Responder};
use tracing::error;

use crate::users::application::domain::validation::UserPayload;
use crate::users::application::ports::incoming::use_cases::CreateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<UserPayload>,
) -> impl Responder {
    match data.create_user_use_case.execute(payload.into_inner()).await {
        Ok(user) => ApiResponse::created(user),
        Err(err) => map_create_user_error(err),
    }
}

fn map_create_user_error(err: CreateUserError) -> actix_web::HttpResponse {
    match err {
        CreateUserError::Validation(errors) => ApiResponse::validation_failed(errors),
        CreateUserError::HashingFailed(e) => {
            error!("Password hashing failed creating user: {}", e);
            ApiResponse::internal_error()
        }
        CreateUserError::RepositoryError(e) => {
            error!("Repository error creating user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
