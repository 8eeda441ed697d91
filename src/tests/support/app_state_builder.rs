use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::users::application::ports::incoming::use_cases::{
    CreateUserUseCase, FetchUserUseCase, ForceDeleteUserUseCase, ListUsersUseCase,
    RestoreUserUseCase, TrashUserUseCase, UpdateUserUseCase, UserFormDataUseCase,
};
use crate::AppState;

/// Builds an `AppState` where every use case defaults to an inert stub
/// and tests swap in only the one under exercise.
pub struct TestAppStateBuilder {
    list_users: Arc<dyn ListUsersUseCase>,
    fetch_user: Arc<dyn FetchUserUseCase>,
    user_form_data: Arc<dyn UserFormDataUseCase>,
    create_user: Arc<dyn CreateUserUseCase>,
    update_user: Arc<dyn UpdateUserUseCase>,
    trash_user: Arc<dyn TrashUserUseCase>,
    restore_user: Arc<dyn RestoreUserUseCase>,
    force_delete_user: Arc<dyn ForceDeleteUserUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_users: Arc::new(StubListUsersUseCase),
            fetch_user: Arc::new(MockFetchUserUseCase::not_found()),
            user_form_data: Arc::new(MockUserFormDataUseCase::empty()),
            create_user: Arc::new(StubCreateUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            trash_user: Arc::new(MockTrashUserUseCase::not_found()),
            restore_user: Arc::new(MockRestoreUserUseCase::not_found()),
            force_delete_user: Arc::new(MockForceDeleteUserUseCase::not_found()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl FetchUserUseCase + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_user_form_data(mut self, uc: impl UserFormDataUseCase + 'static) -> Self {
        self.user_form_data = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_trash_user(mut self, uc: impl TrashUserUseCase + 'static) -> Self {
        self.trash_user = Arc::new(uc);
        self
    }

    pub fn with_restore_user(mut self, uc: impl RestoreUserUseCase + 'static) -> Self {
        self.restore_user = Arc::new(uc);
        self
    }

    pub fn with_force_delete_user(mut self, uc: impl ForceDeleteUserUseCase + 'static) -> Self {
        self.force_delete_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            list_users_use_case: self.list_users,
            fetch_user_use_case: self.fetch_user,
            user_form_data_use_case: self.user_form_data,
            create_user_use_case: self.create_user,
            update_user_use_case: self.update_user,
            trash_user_use_case: self.trash_user,
            restore_user_use_case: self.restore_user,
            force_delete_user_use_case: self.force_delete_user,
        })
    }
}
