use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::skills::application::ports::outgoing::SkillItem;
use crate::users::application::domain::entities::{Role, UserState};

/// Listing page size of the admin UI.
pub const PAGE_SIZE: u32 = 15;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub state: UserState,
    pub bio: String,
    pub twitter: Option<String>,
    pub profession_id: Option<Uuid>,
    pub profession_title: Option<String>,
    pub skills: Vec<SkillItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserListItem {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub state: UserState,
    pub profession_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Which slice of the soft-delete space a query runs against. There is
/// deliberately no implicit default scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListView {
    Active,
    Trashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum UserSortField {
    FirstName,
    Email,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    /// Case-insensitive partial match against names and email.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Email in use by a non-trashed user, optionally excluding the
    /// record being updated.
    async fn email_taken(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError>;

    /// One non-trashed user joined with profile and skills.
    async fn find_active(&self, user_id: Uuid) -> Result<UserView, UserQueryError>;

    /// Paged listing over the requested view, ordered by the sort key
    /// with id as tiebreaker so page boundaries stay deterministic.
    async fn list(
        &self,
        view: UserListView,
        filter: UserListFilter,
        sort: UserSortField,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserListItem>, UserQueryError>;
}
