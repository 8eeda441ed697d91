mod create_user_service;
mod fetch_user_service;
mod force_delete_user_service;
mod list_users_service;
mod restore_user_service;
mod trash_user_service;
mod update_user_service;
mod user_form_data_service;

#[cfg(test)]
pub mod test_support;

pub use create_user_service::CreateUserService;
pub use fetch_user_service::FetchUserService;
pub use force_delete_user_service::ForceDeleteUserService;
pub use list_users_service::ListUsersService;
pub use restore_user_service::RestoreUserService;
pub use trash_user_service::TrashUserService;
pub use update_user_service::UpdateUserService;
pub use user_form_data_service::UserFormDataService;
