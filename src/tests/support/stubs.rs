//! Default stubs the route tests plug into `TestAppStateBuilder`.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::users::application::domain::entities::{Role, UserState};
use crate::users::application::domain::validation::UserPayload;
use crate::users::application::ports::incoming::use_cases::{
    CreateUserError, CreateUserUseCase, FetchUserError, FetchUserUseCase, ForceDeleteUserError,
    ForceDeleteUserUseCase, ListUsersError, ListUsersUseCase, RestoreUserError, RestoreUserUseCase,
    TrashUserError, TrashUserUseCase, UpdateUserError, UpdateUserUseCase, UserFormData,
    UserFormDataError, UserFormDataUseCase, UserListRequest,
};
use crate::users::application::ports::outgoing::user_query::{
    PageResult, UserListItem, UserView,
};

pub fn sample_user_view(user_id: Uuid) -> UserView {
    UserView {
        id: user_id,
        first_name: "Pepe".to_string(),
        last_name: "Pérez".to_string(),
        email: "pepe@mail.es".to_string(),
        role: Role::User,
        state: UserState::Active,
        bio: "Programador de Laravel y Vue.js".to_string(),
        twitter: Some("https://twitter.com/pepe".to_string()),
        profession_id: None,
        profession_title: Some("Estudiante".to_string()),
        skills: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// ──────────────────────────────────────────────────────────
// Defaults
// ──────────────────────────────────────────────────────────

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _request: UserListRequest,
    ) -> Result<PageResult<UserListItem>, ListUsersError> {
        Ok(PageResult {
            items: vec![],
            page: 1,
            per_page: 15,
            total: 0,
        })
    }
}

pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _payload: UserPayload) -> Result<UserView, CreateUserError> {
        Err(CreateUserError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _payload: UserPayload,
    ) -> Result<UserView, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

// ──────────────────────────────────────────────────────────
// Configurable mocks
// ──────────────────────────────────────────────────────────

pub struct MockFetchUserUseCase {
    result: Result<UserView, FetchUserError>,
}

impl MockFetchUserUseCase {
    pub fn success(view: UserView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(FetchUserError::UserNotFound),
        }
    }
}

#[async_trait]
impl FetchUserUseCase for MockFetchUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserView, FetchUserError> {
        self.result.clone()
    }
}

pub struct MockUserFormDataUseCase {
    result: Result<UserFormData, UserFormDataError>,
}

impl MockUserFormDataUseCase {
    pub fn success(data: UserFormData) -> Self {
        Self { result: Ok(data) }
    }

    pub fn empty() -> Self {
        Self {
            result: Ok(UserFormData {
                professions: vec![],
                skills: vec![],
            }),
        }
    }
}

#[async_trait]
impl UserFormDataUseCase for MockUserFormDataUseCase {
    async fn execute(&self) -> Result<UserFormData, UserFormDataError> {
        self.result.clone()
    }
}

pub struct MockTrashUserUseCase {
    result: Result<(), TrashUserError>,
}

impl MockTrashUserUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(TrashUserError::UserNotFound),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            result: Err(TrashUserError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl TrashUserUseCase for MockTrashUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), TrashUserError> {
        self.result.clone()
    }
}

pub struct MockRestoreUserUseCase {
    result: Result<(), RestoreUserError>,
}

impl MockRestoreUserUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(RestoreUserError::UserNotFound),
        }
    }
}

#[async_trait]
impl RestoreUserUseCase for MockRestoreUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), RestoreUserError> {
        self.result.clone()
    }
}

pub struct MockForceDeleteUserUseCase {
    result: Result<(), ForceDeleteUserError>,
}

impl MockForceDeleteUserUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(ForceDeleteUserError::UserNotFound),
        }
    }
}

#[async_trait]
impl ForceDeleteUserUseCase for MockForceDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), ForceDeleteUserError> {
        self.result.clone()
    }
}
