pub mod list_users;

mod create_user;
mod edit_user;
mod force_delete_user;
mod list_trashed_users;
mod restore_user;
mod show_user;
mod trash_user;
mod update_user;
mod user_form_data;

pub use create_user::create_user_handler;
pub use edit_user::edit_user_handler;
pub use force_delete_user::force_delete_user_handler;
pub use list_trashed_users::list_trashed_users_handler;
pub use list_users::list_users_handler;
pub use restore_user::restore_user_handler;
pub use show_user::show_user_handler;
pub use trash_user::trash_user_handler;
pub use update_user::update_user_handler;
pub use user_form_data::user_form_data_handler;
