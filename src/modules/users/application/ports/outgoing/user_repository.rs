use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::domain::entities::{ProfessionRef, Role, UserState};

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub state: UserState,
    pub bio: String,
    pub twitter: Option<String>,
    pub profession: ProfessionRef,
    pub skill_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` keeps the stored hash.
    pub password_hash: Option<String>,
    pub role: Role,
    pub state: UserState,
    pub bio: String,
    pub twitter: Option<String>,
    pub profession: ProfessionRef,
    pub skill_ids: Vec<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,

    /// Unique email constraint fired (pre-check lost the race).
    #[error("Email already registered")]
    EmailTaken,

    #[error("Profession not found")]
    ProfessionNotFound,

    /// Unique profession title constraint fired.
    #[error("Profession title already exists")]
    ProfessionTitleTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side; every method is one transaction)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve profession → insert user → insert profile → attach
    /// skills, atomically. Returns the new user id.
    async fn create(&self, data: CreateUserData) -> Result<Uuid, UserRepositoryError>;

    /// Same shape against an existing non-trashed user; reconciles the
    /// skill set to exactly `skill_ids`.
    async fn update(&self, user_id: Uuid, data: UpdateUserData) -> Result<(), UserRepositoryError>;

    /// Stamps one `deleted_at` across user, profile and skill links.
    /// Fails with `UserNotFound` unless the user is currently active.
    async fn trash(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// Clears `deleted_at` across user, profile and skill links. Fails
    /// with `UserNotFound` unless the user is currently trashed.
    async fn restore(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// Physically removes skill links, profile and user.
    async fn force_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
