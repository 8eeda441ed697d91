mod create_user;
mod fetch_user;
mod force_delete_user;
mod list_users;
mod restore_user;
mod trash_user;
mod update_user;
mod user_form_data;

pub use create_user::{CreateUserError, CreateUserUseCase};
pub use fetch_user::{FetchUserError, FetchUserUseCase};
pub use force_delete_user::{ForceDeleteUserError, ForceDeleteUserUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase, UserListRequest};
pub use restore_user::{RestoreUserError, RestoreUserUseCase};
pub use trash_user::{TrashUserError, TrashUserUseCase};
pub use update_user::{UpdateUserError, UpdateUserUseCase};
pub use user_form_data::{UserFormData, UserFormDataError, UserFormDataUseCase};
