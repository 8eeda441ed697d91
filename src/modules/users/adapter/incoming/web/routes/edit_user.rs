use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::users::application::ports::incoming::use_cases::{
    FetchUserError, UserFormData, UserFormDataError,
};
use crate::users::application::ports::outgoing::user_query::UserView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
struct EditUserData {
    user: UserView,
    #[serde(flatten)]
    form: UserFormData,
}

/// The edit form needs the user next to the same choice lists as the
/// create form.
#[get("/api/users/{user_id}/edit")]
pub async fn edit_user_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    let user = match data.fetch_user_use_case.execute(user_id).await {
        Ok(user) => user,
        Err(FetchUserError::UserNotFound) => {
            return ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::RepositoryError(e)) => {
            error!("Repository error loading user for edit: {}", e);
            return ApiResponse::internal_error();
        }
    };

    match data.user_form_data_use_case.execute().await {
        Ok(form) => ApiResponse::success(EditUserData { user, form }),
        Err(UserFormDataError::RepositoryError(e)) => {
            error!("Repository error loading form data for edit: {}", e);
            ApiResponse::internal_error()
        }
    }
}
