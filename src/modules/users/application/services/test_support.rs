//! Hand-rolled port stubs shared by the service test modules.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::professions::application::ports::outgoing::{
    ProfessionItem, ProfessionQuery, ProfessionQueryError,
};
use crate::skills::application::ports::outgoing::{SkillItem, SkillQuery, SkillQueryError};
use crate::users::application::domain::entities::{Role, UserState};
use crate::users::application::domain::validation::UserPayload;
use crate::users::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::users::application::ports::outgoing::user_query::{
    PageRequest, PageResult, SortDirection, UserListFilter, UserListItem, UserListView, UserQuery,
    UserQueryError, UserSortField, UserView,
};
use crate::users::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};

pub fn pepe_payload() -> UserPayload {
    UserPayload {
        first_name: Some("Pepe".to_string()),
        last_name: Some("Pérez".to_string()),
        email: Some("pepe@mail.es".to_string()),
        password: Some("12345678".to_string()),
        profession_id: Some("".to_string()),
        profession: Some("Estudiante".to_string()),
        bio: Some("Programador de Laravel y Vue.js".to_string()),
        twitter: Some(Some("https://twitter.com/pepe".to_string())),
        role: Some("user".to_string()),
        state: Some("active".to_string()),
        skills: None,
    }
}

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
// UserQuery stub
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct StubUserQuery {
    email_taken: bool,
    view: Option<UserView>,
    list: Option<PageResult<UserListItem>>,
}

impl StubUserQuery {
    pub fn free_email() -> Self {
        Self::default()
    }

    pub fn taken_email() -> Self {
        Self {
            email_taken: true,
            ..Self::default()
        }
    }

    pub fn with_view(mut self, view: UserView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_list(mut self, list: PageResult<UserListItem>) -> Self {
        self.list = Some(list);
        self
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn email_taken(
        &self,
        _email: &str,
        _exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError> {
        Ok(self.email_taken)
    }

    async fn find_active(&self, _user_id: Uuid) -> Result<UserView, UserQueryError> {
        self.view.clone().ok_or(UserQueryError::NotFound)
    }

    async fn list(
        &self,
        _view: UserListView,
        _filter: UserListFilter,
        _sort: UserSortField,
        _direction: SortDirection,
        _page: PageRequest,
    ) -> Result<PageResult<UserListItem>, UserQueryError> {
        match &self.list {
            Some(list) => Ok(PageResult {
                items: list.items.clone(),
                page: list.page,
                per_page: list.per_page,
                total: list.total,
            }),
            None => unimplemented!("listing not stubbed for this test"),
        }
    }
}

// ──────────────────────────────────────────────────────────
// ProfessionQuery / SkillQuery stubs
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct StubProfessionQuery {
    selectable: Option<ProfessionItem>,
    title_taken: bool,
    listing: Vec<ProfessionItem>,
}

impl StubProfessionQuery {
    pub fn selectable(profession: ProfessionItem) -> Self {
        Self {
            selectable: Some(profession),
            ..Self::default()
        }
    }

    pub fn title_taken() -> Self {
        Self {
            title_taken: true,
            ..Self::default()
        }
    }

    pub fn listing(professions: Vec<ProfessionItem>) -> Self {
        Self {
            listing: professions,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ProfessionQuery for StubProfessionQuery {
    async fn find_selectable(
        &self,
        profession_id: Uuid,
    ) -> Result<Option<ProfessionItem>, ProfessionQueryError> {
        Ok(self
            .selectable
            .clone()
            .filter(|profession| profession.id == profession_id))
    }

    async fn title_taken(&self, _title: &str) -> Result<bool, ProfessionQueryError> {
        Ok(self.title_taken)
    }

    async fn list_selectable(&self) -> Result<Vec<ProfessionItem>, ProfessionQueryError> {
        Ok(self.listing.clone())
    }
}

#[derive(Default)]
pub struct StubSkillQuery {
    skills: Vec<SkillItem>,
}

impl StubSkillQuery {
    pub fn with_skills(skills: Vec<SkillItem>) -> Self {
        Self { skills }
    }
}

#[async_trait]
impl SkillQuery for StubSkillQuery {
    async fn list_all(&self) -> Result<Vec<SkillItem>, SkillQueryError> {
        Ok(self.skills.clone())
    }
}

// ──────────────────────────────────────────────────────────
// UserRepository stub
// ──────────────────────────────────────────────────────────

pub struct StubUserRepository {
    unreachable: bool,
    create_result: Result<Uuid, UserRepositoryError>,
    update_result: Result<(), UserRepositoryError>,
    trash_result: Result<(), UserRepositoryError>,
    restore_result: Result<(), UserRepositoryError>,
    force_delete_result: Result<(), UserRepositoryError>,
    creates: Arc<Mutex<Vec<CreateUserData>>>,
    updates: Arc<Mutex<Vec<(Uuid, UpdateUserData)>>>,
}

impl Default for StubUserRepository {
    fn default() -> Self {
        Self {
            unreachable: false,
            create_result: Ok(Uuid::nil()),
            update_result: Ok(()),
            trash_result: Ok(()),
            restore_result: Ok(()),
            force_delete_result: Ok(()),
            creates: Arc::new(Mutex::new(Vec::new())),
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl StubUserRepository {
    /// Panics on any call; the test asserts the repository stays cold.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn create_ok(user_id: Uuid) -> Self {
        Self {
            create_result: Ok(user_id),
            ..Self::default()
        }
    }

    pub fn create_err(err: UserRepositoryError) -> Self {
        Self {
            create_result: Err(err),
            ..Self::default()
        }
    }

    pub fn update_ok() -> Self {
        Self::default()
    }

    pub fn update_err(err: UserRepositoryError) -> Self {
        Self {
            update_result: Err(err),
            ..Self::default()
        }
    }

    pub fn trash_err(err: UserRepositoryError) -> Self {
        Self {
            trash_result: Err(err),
            ..Self::default()
        }
    }

    pub fn restore_err(err: UserRepositoryError) -> Self {
        Self {
            restore_result: Err(err),
            ..Self::default()
        }
    }

    pub fn force_delete_err(err: UserRepositoryError) -> Self {
        Self {
            force_delete_result: Err(err),
            ..Self::default()
        }
    }

    pub fn recorded_creates(&self) -> Arc<Mutex<Vec<CreateUserData>>> {
        Arc::clone(&self.creates)
    }

    pub fn recorded_updates(&self) -> Arc<Mutex<Vec<(Uuid, UpdateUserData)>>> {
        Arc::clone(&self.updates)
    }

    fn guard(&self) {
        if self.unreachable {
            panic!("the repository must not be reached by this flow");
        }
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn create(&self, data: CreateUserData) -> Result<Uuid, UserRepositoryError> {
        self.guard();
        self.creates.lock().unwrap().push(data);
        self.create_result.clone()
    }

    async fn update(&self, user_id: Uuid, data: UpdateUserData) -> Result<(), UserRepositoryError> {
        self.guard();
        self.updates.lock().unwrap().push((user_id, data));
        self.update_result.clone()
    }

    async fn trash(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.guard();
        self.trash_result.clone()
    }

    async fn restore(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.guard();
        self.restore_result.clone()
    }

    async fn force_delete(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.guard();
        self.force_delete_result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// PasswordHasher stubs
// ──────────────────────────────────────────────────────────

pub struct StaticHasher;

impl PasswordHasher for StaticHasher {
    fn hash_password(&self, _password: &str) -> Result<String, String> {
        Ok("hashed_password".to_string())
    }

    fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
        Ok(true)
    }
}

pub struct FailingHasher;

impl PasswordHasher for FailingHasher {
    fn hash_password(&self, _password: &str) -> Result<String, String> {
        Err("hashing failed".to_string())
    }

    fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
        Ok(false)
    }
}
