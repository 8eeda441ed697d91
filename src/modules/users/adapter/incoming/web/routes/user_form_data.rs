use actix_web::{get, web, Responder};
use tracing::error;

use crate::users::application::ports::incoming::use_cases::UserFormDataError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Choice lists for the create form: selectable professions + skills.
#[get("/api/users/form-data")]
pub async fn user_form_data_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user_form_data_use_case.execute().await {
        Ok(form_data) => ApiResponse::success(form_data),
        Err(UserFormDataError::RepositoryError(e)) => {
            error!("Repository error loading form data: {}", e);
            ApiResponse::internal_error()
        }
    }
}
