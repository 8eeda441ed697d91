use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillItem {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// The whole catalog, name-ordered; the checkbox list of the forms.
    async fn list_all(&self) -> Result<Vec<SkillItem>, SkillQueryError>;
}
